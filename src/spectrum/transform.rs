use rustfft::{num_complex::Complex, FftPlanner};

/// Forward DFT in place, scaled by `1/n`.
///
/// `rustfft` computes the unnormalized transform `X[k] = sum x[j] e^{-2 pi i jk/n}`.
/// Dividing by `n` makes `2 Re X[k]` and `-2 Im X[k]` the cosine and sine
/// amplitudes of the one-sided Fourier series.
pub fn forward(buffer: &mut [Complex<f64>]) {
    let n = buffer.len();
    debug_assert!(n.is_power_of_two(), "transform length must be a power of two");

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(buffer);

    let scale = 1.0 / n as f64;
    for c in buffer.iter_mut() {
        *c *= scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constant_signal_lands_in_dc() {
        let mut buffer = vec![Complex::new(3.0, 0.0); 8];
        forward(&mut buffer);
        assert_abs_diff_eq!(buffer[0].re, 3.0, epsilon = 1e-12);
        for c in &buffer[1..] {
            assert_abs_diff_eq!(c.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn matches_direct_dft() {
        let signal = [0.3, -1.2, 2.5, 0.0, 4.1, -0.7, 1.1, 0.9];
        let n = signal.len();
        let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&s| Complex::new(s, 0.0)).collect();
        forward(&mut buffer);

        for (k, got) in buffer.iter().enumerate() {
            let mut expected = Complex::new(0.0, 0.0);
            for (j, &x) in signal.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * (j * k) as f64 / n as f64;
                expected += Complex::new(angle.cos(), angle.sin()) * x;
            }
            expected /= n as f64;
            assert_abs_diff_eq!(got.re, expected.re, epsilon = 1e-12);
            assert_abs_diff_eq!(got.im, expected.im, epsilon = 1e-12);
        }
    }
}
