use rustfft::num_complex::Complex;

/// Fourier cosine (`a`) and sine (`b`) coefficients for bins `0..=nfold`.
///
/// `spectrum` is the `1/n`-normalized transform of a real signal. The sine
/// terms of the DC and Nyquist bins are forced to zero; whatever the
/// transform leaves there is rounding noise.
pub fn fourier_coefficients(spectrum: &[Complex<f64>]) -> (Vec<f64>, Vec<f64>) {
    debug_assert!(spectrum.len() >= 2);
    let nfold = spectrum.len() / 2;

    let (a, mut b): (Vec<f64>, Vec<f64>) = spectrum[..=nfold]
        .iter()
        .map(|c| (2.0 * c.re, -2.0 * c.im))
        .unzip();
    b[0] = 0.0;
    b[nfold] = 0.0;

    (a, b)
}
