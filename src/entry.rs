// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Per-address computation of the reciprocal table.
//!
//! The input is a normalized significand with an implicit leading one. The
//! result is not normalized: it has an explicit leading one and potentially
//! one leading zero in front of it, and keeps the exponent of the source.

use std::iter::FusedIterator;
use std::ops::Range;

/// Width of both the address and the data port of the ROM.
pub const ADDRESS_BITS: u32 = 10;

/// Number of entries in the table, one per address.
pub const TABLE_SIZE: usize = 1 << ADDRESS_BITS;

/// The implicit leading one of the significand.
pub const IMPLICIT_ONE: u32 = 1 << ADDRESS_BITS;

/// `1.0` scaled so the quotient keeps ten fractional bits.
pub const DIVIDEND: u32 = IMPLICIT_ONE * IMPLICIT_ONE;

/// Mask applied to the exact reciprocal to fit the data port.
pub const CODE_MASK: u32 = (1 << ADDRESS_BITS) - 1;

/// One line of the ROM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    address: u16,
    reciprocal: u32,
}

impl Entry {
    /// Computes the entry for `address`, or `None` if it does not fit in
    /// [`ADDRESS_BITS`] bits.
    pub fn new(address: u16) -> Option<Self> {
        if usize::from(address) >= TABLE_SIZE {
            return None;
        }
        let significand = IMPLICIT_ONE | u32::from(address);
        Some(Self {
            address,
            reciprocal: DIVIDEND / significand,
        })
    }

    /// The low ten bits of the significand, i.e. the case selector.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// The significand including its implicit leading one, in `1024..=2047`.
    pub fn significand(&self) -> u32 {
        IMPLICIT_ONE | u32::from(self.address)
    }

    /// The exact, unmasked `floor(2^20 / significand)`, in `512..=1024`.
    pub fn reciprocal(&self) -> u32 {
        self.reciprocal
    }

    /// The value stored in the ROM.
    ///
    /// Only address 0 produces a reciprocal that overflows ten bits
    /// (`1024`), and its dropped carry is implied by the consumer.
    pub fn code(&self) -> u16 {
        // CODE_MASK keeps the value below 1024, so the cast is lossless.
        (self.reciprocal & CODE_MASK) as u16
    }
}

/// The ROM value for `address`. Bits above [`ADDRESS_BITS`] are ignored.
pub fn reciprocal_code(address: u16) -> u16 {
    let significand = IMPLICIT_ONE | (u32::from(address) & CODE_MASK);
    ((DIVIDEND / significand) & CODE_MASK) as u16
}

/// Iterates over every entry of the table in ascending address order.
pub fn entries() -> Entries {
    Entries {
        addresses: 0..TABLE_SIZE as u16,
    }
}

/// Iterator returned by [`entries`].
#[derive(Clone, Debug)]
pub struct Entries {
    addresses: Range<u16>,
}

impl Iterator for Entries {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.addresses.next().and_then(Entry::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.addresses.size_hint()
    }
}

impl DoubleEndedIterator for Entries {
    fn next_back(&mut self) -> Option<Entry> {
        self.addresses.next_back().and_then(Entry::new)
    }
}

impl ExactSizeIterator for Entries {}

impl FusedIterator for Entries {}
