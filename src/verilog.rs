// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Verilog rendering of the reciprocal table.
//!
//! The output is a single `reciprocal_rom` module with a 10-bit address
//! input and a 10-bit registered data output, driven by a combinational
//! `case` that lists every address.

use std::io::{self, Write};

use log::{debug, trace};

use crate::entry::{entries, Entry, ADDRESS_BITS, TABLE_SIZE};

/// Module declaration up to and including the opening `case`.
pub const HEADER: &str = "
//
// This file is autogenerated by make_reciprocal_rom.py
//

module reciprocal_rom(
\tinput [9:0]\t\t\taddr_i,
\toutput reg [9:0]\tdata_o);

\talways @*
\tbegin
\t\tcase (addr_i)
";

/// Closes the `case`, the `always` block and the module.
pub const FOOTER: &str = "\t\tendcase
\tend
endmodule

";

/// Writes the `case` branch for one entry, including the trailing newline.
pub fn write_entry<W: Write>(out: &mut W, entry: &Entry) -> io::Result<()> {
    writeln!(
        out,
        "\t\t\t{bits}'h{:03x}: data_o = {bits}'h{:03x}; // 1 / {} = {}",
        entry.address(),
        entry.code(),
        entry.significand(),
        entry.reciprocal(),
        bits = ADDRESS_BITS,
    )
}

/// Streams the complete ROM source to `out`.
///
/// Nothing is buffered here; wrap unbuffered sinks in a `BufWriter`.
pub fn write_rom<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;
    for entry in entries() {
        trace!(
            "address {:#05x} -> {:#05x} (1 / {} = {})",
            entry.address(),
            entry.code(),
            entry.significand(),
            entry.reciprocal()
        );
        write_entry(out, &entry)?;
    }
    out.write_all(FOOTER.as_bytes())?;
    debug!("emitted {} rom entries", TABLE_SIZE);
    Ok(())
}

/// Renders the complete ROM source into a string.
pub fn render() -> String {
    let mut buf = Vec::with_capacity(HEADER.len() + FOOTER.len() + TABLE_SIZE * 48);
    // Writing into a Vec cannot fail.
    let _ = write_rom(&mut buf);
    // Every piece written above is ASCII.
    String::from_utf8_lossy(&buf).into_owned()
}
