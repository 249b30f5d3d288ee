use thiserror::Error;

/// Input that cannot produce a spectrum without dividing by zero.
#[derive(Debug, Error, PartialEq)]
pub enum DegenerateInputError {
    #[error("Wave '{name}' has no samples")]
    Empty { name: String },

    #[error("Wave '{name}' has a non-positive sample interval: {dt}")]
    NonPositiveInterval { name: String, dt: f64 },

    #[error("Wave '{name}' has a non-finite sample at index {index}")]
    NonFiniteSample { name: String, index: usize },
}

/// A single digitized ground-motion record.
#[derive(Clone, Debug)]
pub struct TimeSeries {
    pub name: String,
    /// Sample interval in seconds
    pub dt: f64,
    pub data: Vec<f64>,
}

impl TimeSeries {
    pub fn new(name: impl Into<String>, dt: f64, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            dt,
            data,
        }
    }

    pub fn ndata(&self) -> usize {
        self.data.len()
    }

    /// Total record length in seconds.
    pub fn duration(&self) -> f64 {
        self.ndata() as f64 * self.dt
    }

    pub fn validate(&self) -> Result<(), DegenerateInputError> {
        if self.data.is_empty() {
            return Err(DegenerateInputError::Empty {
                name: self.name.clone(),
            });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(DegenerateInputError::NonPositiveInterval {
                name: self.name.clone(),
                dt: self.dt,
            });
        }
        if let Some(index) = self.data.iter().position(|s| !s.is_finite()) {
            return Err(DegenerateInputError::NonFiniteSample {
                name: self.name.clone(),
                index,
            });
        }
        Ok(())
    }
}
