pub mod csv;
pub mod phase;
pub mod table;

use serde::Deserialize;
use std::io::{self, Write};

use crate::spectrum::SpectrumBins;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Include the A and B columns in CSV output
    pub coefficients: bool,
    /// Only angular frequency and phase
    pub phase_only: bool,
}

pub fn render<W: Write>(
    out: &mut W,
    spectrum: &SpectrumBins,
    options: &RenderOptions,
) -> io::Result<()> {
    match (options.format, options.phase_only) {
        (OutputFormat::Table, false) => table::write_table(out, spectrum),
        (OutputFormat::Csv, false) => csv::write_csv(out, spectrum, options.coefficients),
        (OutputFormat::Table, true) => phase::write_phase_table(out, spectrum),
        (OutputFormat::Csv, true) => phase::write_phase_csv(out, spectrum),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::spectrum::analyze;
    use crate::wave::TimeSeries;
    use std::f64::consts::PI;

    /// Hand-built four-point spectrum with round numbers.
    pub(crate) fn four_point() -> SpectrumBins {
        SpectrumBins {
            n: 4,
            ndata: 4,
            dt: 1.0,
            record_length: 4.0,
            a: vec![0.0, 1.0, -1.0],
            b: vec![0.0, 0.0, 0.0],
            amplitude: vec![0.0, 2.0, 2.0],
            phase: vec![0.0, 0.0, PI],
            frequency: vec![0.0, 0.25, 0.5],
            period: vec![0.0, 4.0, 2.0],
        }
    }

    fn to_string(spectrum: &SpectrumBins, options: RenderOptions) -> String {
        let mut out = Vec::new();
        render(&mut out, spectrum, &options).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn numbers(line: &str, separator: Option<char>) -> Vec<f64> {
        let fields: Vec<&str> = match separator {
            Some(sep) => line.split(sep).collect(),
            None => line.split_whitespace().collect(),
        };
        fields.iter().map(|f| f.trim().parse::<f64>().unwrap()).collect()
    }

    #[test]
    fn dispatches_on_format_and_mode() {
        let spectrum = four_point();
        let plain = to_string(&spectrum, RenderOptions::default());
        assert!(plain.starts_with(table::HEADER));

        let short_csv = to_string(
            &spectrum,
            RenderOptions {
                format: OutputFormat::Csv,
                ..Default::default()
            },
        );
        assert!(short_csv.starts_with("k,T,f,AMP,PHASE\n"));

        let phase_csv = to_string(
            &spectrum,
            RenderOptions {
                format: OutputFormat::Csv,
                phase_only: true,
                coefficients: true,
            },
        );
        assert!(phase_csv.starts_with("omega,PHASE\n"));

        let phase_table = to_string(
            &spectrum,
            RenderOptions {
                phase_only: true,
                ..Default::default()
            },
        );
        assert!(phase_table.starts_with(phase::HEADER));
    }

    #[test]
    fn table_and_csv_agree() {
        let data: Vec<f64> = (0..300)
            .map(|i| {
                let t = i as f64 * 0.02;
                25.0 * (2.0 * PI * 1.3 * t).sin() + 8.0 * (2.0 * PI * 4.1 * t).cos()
            })
            .collect();
        let spectrum = analyze(&TimeSeries::new("NS", 0.02, data)).unwrap();

        let table_text = to_string(&spectrum, RenderOptions::default());
        let csv_text = to_string(
            &spectrum,
            RenderOptions {
                format: OutputFormat::Csv,
                coefficients: true,
                ..Default::default()
            },
        );

        let table_rows: Vec<&str> = table_text.lines().skip(2).collect();
        let csv_rows: Vec<&str> = csv_text.lines().skip(1).collect();
        assert_eq!(table_rows.len(), spectrum.nfold() + 1);
        assert_eq!(table_rows.len(), csv_rows.len());

        for (t, c) in table_rows.iter().zip(&csv_rows) {
            let t = numbers(t, None);
            let c = numbers(c, Some(','));
            assert_eq!(t.len(), 7);
            assert_eq!(c.len(), 7);
            assert_eq!(t[0], c[0]);
            for (x, y) in t.iter().zip(&c).skip(1) {
                assert!((x - y).abs() <= 1e-3, "table {} vs csv {}", x, y);
            }
        }
    }
}
