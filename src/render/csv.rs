use std::io::{self, Write};

use crate::spectrum::SpectrumBins;

/// CSV with `k,T,f,AMP,PHASE`, or `k,T,f,A,B,AMP,PHASE` when `coefficients`
/// is set.
pub fn write_csv<W: Write>(
    out: &mut W,
    spectrum: &SpectrumBins,
    coefficients: bool,
) -> io::Result<()> {
    if coefficients {
        writeln!(out, "k,T,f,A,B,AMP,PHASE")?;
    } else {
        writeln!(out, "k,T,f,AMP,PHASE")?;
    }
    for bin in spectrum.bins() {
        if coefficients {
            writeln!(
                out,
                "{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
                bin.k, bin.period, bin.frequency, bin.a, bin.b, bin.amplitude, bin.phase
            )?;
        } else {
            writeln!(
                out,
                "{},{:.6},{:.6},{:.6},{:.6}",
                bin.k, bin.period, bin.frequency, bin.amplitude, bin.phase
            )?;
        }
    }
    Ok(())
}
