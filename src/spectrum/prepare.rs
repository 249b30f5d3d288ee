use rustfft::num_complex::Complex;

/// Smallest power of two that holds `ndata` samples, never less than 2.
pub fn padded_length(ndata: usize) -> usize {
    if ndata <= 2 {
        2
    } else {
        ndata.next_power_of_two()
    }
}

/// Zero-pad the samples to a power-of-two length and lift them into the
/// complex plane.
pub fn prepare(samples: &[f64]) -> Vec<Complex<f64>> {
    let n = padded_length(samples.len());
    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    buffer.resize(n, Complex::new(0.0, 0.0));
    buffer
}
