use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fourier",
    about = "Fourier amplitude and phase spectrum of a seismic wave",
    disable_version_flag = true
)]
pub struct Cli {
    /// Input wave file (CSV: time column followed by one column per wave)
    pub input: Option<PathBuf>,

    /// Output as CSV
    #[arg(long)]
    pub csv_output: bool,

    /// Include the cosine/sine coefficients (A, B) in CSV output
    #[arg(long)]
    pub coefficients: bool,

    /// Output angular frequency and phase only
    #[arg(long)]
    pub phase_only: bool,

    /// Wave to analyze, by header name (default: first wave)
    #[arg(short, long)]
    pub wave: Option<String>,

    /// Write the result to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (default: fourier.toml or ~/.config/fourier/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show version
    #[arg(short = 'V', long)]
    pub version: bool,
}
