// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! `reciprocal-rom`
//! ===========
//!
//! Generator for the `reciprocal_rom` Verilog module, a 1024-entry lookup
//! table estimating `1 / x` for normalized significands with an implicit
//! leading one.
//!
//! ## Usage
//!
//! ```
//! use reciprocal_rom::{Entry, reciprocal_code};
//!
//! let entry = Entry::new(0x3ff).unwrap();
//! assert_eq!(entry.significand(), 2047);
//! assert_eq!(entry.reciprocal(), 512);
//! assert_eq!(entry.code(), 0x200);
//! assert_eq!(reciprocal_code(0), 0);
//!
//! let mut rom = Vec::new();
//! reciprocal_rom::write_rom(&mut rom).unwrap();
//! assert!(rom.ends_with(b"endmodule\n\n"));
//! ```

mod entry;
mod verilog;

pub use entry::{
    entries, reciprocal_code, Entries, Entry, ADDRESS_BITS, CODE_MASK, DIVIDEND, IMPLICIT_ONE,
    TABLE_SIZE,
};
pub use verilog::{render, write_entry, write_rom, FOOTER, HEADER};
