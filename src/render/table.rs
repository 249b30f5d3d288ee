use std::io::{self, Write};

use crate::spectrum::SpectrumBins;

pub const HEADER: &str = "    k        T        f          A          B        AMP    PHASE";

/// Fixed-width table: header, blank line, one row per bin.
pub fn write_table<W: Write>(out: &mut W, spectrum: &SpectrumBins) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    writeln!(out)?;
    for bin in spectrum.bins() {
        writeln!(
            out,
            "{:5} {:8.3} {:8.3} {:10.3} {:10.3} {:10.3} {:8.3}",
            bin.k, bin.period, bin.frequency, bin.a, bin.b, bin.amplitude, bin.phase
        )?;
    }
    Ok(())
}
