/// One row of the spectrum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub k: usize,
    /// Period (s), 0 for the DC bin
    pub period: f64,
    /// Frequency (Hz)
    pub frequency: f64,
    /// Cosine coefficient
    pub a: f64,
    /// Sine coefficient
    pub b: f64,
    /// Fourier amplitude, scaled by half the record length
    pub amplitude: f64,
    /// Phase angle (rad)
    pub phase: f64,
}

impl Bin {
    /// Angular frequency (rad/s)
    pub fn omega(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.frequency
    }
}

/// Spectrum of one wave over bins `0..=nfold`, stored as parallel arrays.
#[derive(Clone, Debug)]
pub struct SpectrumBins {
    /// Padded transform length
    pub n: usize,
    /// Number of original samples
    pub ndata: usize,
    pub dt: f64,
    /// Duration of the original record (s)
    pub record_length: f64,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub amplitude: Vec<f64>,
    pub phase: Vec<f64>,
    pub frequency: Vec<f64>,
    pub period: Vec<f64>,
}

impl SpectrumBins {
    /// Index of the Nyquist bin.
    pub fn nfold(&self) -> usize {
        self.n / 2
    }

    pub fn bin(&self, k: usize) -> Bin {
        Bin {
            k,
            period: self.period[k],
            frequency: self.frequency[k],
            a: self.a[k],
            b: self.b[k],
            amplitude: self.amplitude[k],
            phase: self.phase[k],
        }
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        (0..self.a.len()).map(move |k| self.bin(k))
    }

    /// Bin with the largest amplitude, ignoring DC.
    pub fn peak(&self) -> Option<Bin> {
        self.bins()
            .skip(1)
            .max_by(|x, y| x.amplitude.total_cmp(&y.amplitude))
    }
}
