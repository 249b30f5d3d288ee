mod cli;
mod config;
mod render;
mod spectrum;
mod wave;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufWriter, Write};

use cli::Cli;
use config::Config;
use render::{OutputFormat, RenderOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    if cli.version {
        println!("v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(path) = config::find_config(cli.config.as_deref()) {
        if let Some(cfg) = config::load_config(&path) {
            log::info!("Loaded config from {}", path.display());
            merge_config(&mut cli, cfg);
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    let input = cli.input.as_ref().context("Input wave file is required")?;

    let waves = wave::load_csv(input)
        .with_context(|| format!("Failed to load waves from {}", input.display()))?;
    let wave = wave::select_wave(waves, cli.wave.as_deref())?;

    let spectrum = spectrum::analyze(&wave)
        .with_context(|| format!("Cannot analyze wave '{}'", wave.name))?;
    log::info!(
        "{} samples ({:.3}s) padded to {}, df={:.6}Hz",
        spectrum.ndata,
        spectrum.record_length,
        spectrum.n,
        1.0 / (spectrum.n as f64 * spectrum.dt)
    );
    if let Some(peak) = spectrum.peak() {
        log::info!(
            "Peak: k={}, f={:.3}Hz, T={:.3}s, AMP={:.3}",
            peak.k, peak.frequency, peak.period, peak.amplitude
        );
    }

    let options = render_options(&cli);
    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(BufWriter::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    render::render(&mut out, &spectrum, &options).context("Failed to write spectrum")?;
    out.flush().context("Failed to write spectrum")?;

    if let Some(ref path) = cli.output {
        log::info!("Wrote {} bins to {}", spectrum.nfold() + 1, path.display());
    }
    Ok(())
}

/// Config values apply only where the CLI is at its default.
fn merge_config(cli: &mut Cli, cfg: Config) {
    if !cli.csv_output {
        cli.csv_output = cfg.output.format == OutputFormat::Csv;
    }
    if !cli.coefficients {
        cli.coefficients = cfg.output.coefficients;
    }
    if !cli.phase_only {
        cli.phase_only = cfg.output.phase_only;
    }
    if cli.wave.is_none() {
        cli.wave = cfg.input.wave;
    }
}

fn render_options(cli: &Cli) -> RenderOptions {
    RenderOptions {
        format: if cli.csv_output {
            OutputFormat::Csv
        } else {
            OutputFormat::Table
        },
        coefficients: cli.coefficients,
        phase_only: cli.phase_only,
    }
}
