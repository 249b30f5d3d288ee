use std::io::{self, Write};

use crate::spectrum::SpectrumBins;

pub const HEADER: &str = "   omega    PHASE";

/// Angular frequency and phase pairs as a fixed-width table.
pub fn write_phase_table<W: Write>(out: &mut W, spectrum: &SpectrumBins) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    writeln!(out)?;
    for bin in spectrum.bins() {
        writeln!(out, "{:8.3} {:8.3}", bin.omega(), bin.phase)?;
    }
    Ok(())
}

/// Angular frequency and phase pairs as CSV.
pub fn write_phase_csv<W: Write>(out: &mut W, spectrum: &SpectrumBins) -> io::Result<()> {
    writeln!(out, "omega,PHASE")?;
    for bin in spectrum.bins() {
        writeln!(out, "{:.6},{:.6}", bin.omega(), bin.phase)?;
    }
    Ok(())
}
