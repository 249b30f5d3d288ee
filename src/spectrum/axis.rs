/// Frequency (Hz) and period (s) for bins `0..=n/2` of an `n`-point transform.
///
/// The resolution is `1 / (n * dt)` with `n` the padded length. The DC bin has
/// no finite period and reports 0.
pub fn frequency_axis(n: usize, dt: f64) -> (Vec<f64>, Vec<f64>) {
    let nfold = n / 2;
    let df = 1.0 / (n as f64 * dt);

    (0..=nfold)
        .map(|k| {
            if k == 0 {
                (0.0, 0.0)
            } else {
                let f = k as f64 * df;
                (f, 1.0 / f)
            }
        })
        .unzip()
}
