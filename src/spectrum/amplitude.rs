/// Phase angle of one bin, in `(-pi, pi]`.
///
/// Signed zeros are folded to `+0.0` first so that `atan2` never returns
/// `-pi` for a purely negative cosine term, and an empty bin has phase 0.
pub fn phase_angle(a: f64, b: f64) -> f64 {
    let y = if b == 0.0 { 0.0 } else { -b };
    if y == 0.0 && a == 0.0 {
        return 0.0;
    }
    y.atan2(a)
}

/// Amplitude and phase per bin.
///
/// The coefficient magnitude is scaled by `record_length / 2` to give the
/// Fourier amplitude in signal units times seconds.
pub fn amplitude_and_phase(a: &[f64], b: &[f64], record_length: f64) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(a.len(), b.len());
    let scale = record_length / 2.0;

    a.iter()
        .zip(b)
        .map(|(&a, &b)| (a.hypot(b) * scale, phase_angle(a, b)))
        .unzip()
}
