use std::path::{Path, PathBuf};
use thiserror::Error;

use super::series::TimeSeries;

/// Failures while reading a wave CSV file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read wave file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Wave file has no {0}")]
    Empty(&'static str),

    #[error("Header names a time column but no waves")]
    MissingWaves,

    #[error("Line {line}, column {column}: '{value}' is not a number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cannot derive a positive sample interval from the time column (dt = {dt})")]
    InvalidInterval { dt: f64 },

    #[error("Unknown wave '{name}'. Available: {available}")]
    UnknownWave { name: String, available: String },
}

/// Load every wave in a seismic-wave CSV file.
///
/// The first non-empty line is the header: a time column followed by one
/// column per wave. The sample interval is taken from the first two time
/// values.
pub fn load_csv(path: &Path) -> Result<Vec<TimeSeries>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let waves = parse_csv(&content)?;

    log::info!(
        "Loaded {} wave(s) from {}: {}",
        waves.len(),
        path.display(),
        waves.iter().map(|w| w.name.as_str()).collect::<Vec<_>>().join(", ")
    );

    Ok(waves)
}

pub fn parse_csv(content: &str) -> Result<Vec<TimeSeries>, LoadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (_, header) = lines.next().ok_or(LoadError::Empty("header"))?;
    let names: Vec<&str> = header.split(',').map(str::trim).skip(1).collect();
    if names.is_empty() {
        return Err(LoadError::MissingWaves);
    }
    let expected = names.len() + 1;

    let mut times: Vec<f64> = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for (line, text) in lines {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() != expected {
            return Err(LoadError::RaggedRow {
                line,
                expected,
                found: fields.len(),
            });
        }
        let mut values = fields.iter().enumerate().map(|(i, field)| {
            field.parse::<f64>().map_err(|_| LoadError::Parse {
                line,
                column: i + 1,
                value: field.to_string(),
            })
        });
        if let Some(t) = values.next() {
            times.push(t?);
        }
        for (column, value) in columns.iter_mut().zip(values) {
            column.push(value?);
        }
    }

    if times.is_empty() {
        return Err(LoadError::Empty("data rows"));
    }
    let dt = match times.as_slice() {
        [t0, t1, ..] => t1 - t0,
        _ => f64::NAN,
    };
    if !(dt.is_finite() && dt > 0.0) {
        return Err(LoadError::InvalidInterval { dt });
    }
    log::debug!("Parsed {} rows, dt = {}", times.len(), dt);

    Ok(names
        .into_iter()
        .zip(columns)
        .map(|(name, data)| TimeSeries::new(name, dt, data))
        .collect())
}

/// Pick a wave by name, or the first one when no name is given.
pub fn select_wave(
    waves: Vec<TimeSeries>,
    name: Option<&str>,
) -> Result<TimeSeries, LoadError> {
    let Some(name) = name else {
        return waves.into_iter().next().ok_or(LoadError::MissingWaves);
    };
    let available = waves
        .iter()
        .map(|w| w.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    waves
        .into_iter()
        .find(|w| w.name == name)
        .ok_or_else(|| LoadError::UnknownWave {
            name: name.to_string(),
            available,
        })
}
