//! Fourier amplitude and phase spectrum of a single wave.
//!
//! The pipeline runs once per wave:
//! 1. zero-pad to a power of two ([`prepare`])
//! 2. forward transform, scaled by `1/n` ([`transform`])
//! 3. cosine/sine coefficients for bins `0..=n/2` ([`coefficients`])
//! 4. amplitude and phase ([`amplitude`])
//! 5. frequency and period axis ([`axis`])

pub mod amplitude;
pub mod axis;
pub mod bins;
pub mod coefficients;
pub mod prepare;
pub mod transform;

pub use bins::SpectrumBins;

use crate::wave::{DegenerateInputError, TimeSeries};

pub fn analyze(wave: &TimeSeries) -> Result<SpectrumBins, DegenerateInputError> {
    wave.validate()?;

    let ndata = wave.ndata();
    let record_length = wave.duration();

    let mut buffer = prepare::prepare(&wave.data);
    let n = buffer.len();
    log::info!(
        "Wave '{}': {} samples, dt={}s, {:.3}s, padded to {}",
        wave.name, ndata, wave.dt, record_length, n
    );

    transform::forward(&mut buffer);

    let (a, b) = coefficients::fourier_coefficients(&buffer);
    let (amplitude, phase) = amplitude::amplitude_and_phase(&a, &b, record_length);
    let (frequency, period) = axis::frequency_axis(n, wave.dt);
    log::debug!(
        "{} bins, df={:.6}Hz, nyquist={:.3}Hz",
        frequency.len(),
        frequency.get(1).copied().unwrap_or(0.0),
        frequency.last().copied().unwrap_or(0.0)
    );

    Ok(SpectrumBins {
        n,
        ndata,
        dt: wave.dt,
        record_length,
        a,
        b,
        amplitude,
        phase,
        frequency,
        period,
    })
}
