#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{SentimentClassifier, SentimentIter, classify_series, technical_sentiment};
pub use config::{SENTIMENT, SentimentConfig, SentimentScore, TECHNICAL, TechnicalConfig};
pub use domain::{PriceBar, PriceSeries};
pub use errors::{ConfigError, SentimentError, SeriesError};
pub use models::{SentimentBand, SentimentClass, SentimentReading, TechnicalSentiment};

// CLI argument parsing
use {
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON classifier config. Defaults to the built-in preset
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Table of Greed-Fear readings for one series
    Classify {
        /// JSON array of daily bars
        #[arg(long)]
        series: PathBuf,

        /// Symbol to display (default: file stem)
        #[arg(long)]
        symbol: Option<String>,

        /// Only show the most recent N readings
        #[arg(long)]
        tail: Option<usize>,
    },

    /// Reading for the most recent bar
    Live {
        #[arg(long)]
        series: PathBuf,

        #[arg(long)]
        symbol: Option<String>,
    },

    /// Volatility metrics, summary, insights and correlations
    Report {
        #[arg(long)]
        series: PathBuf,

        #[arg(long)]
        symbol: Option<String>,
    },

    /// Live reading for every instrument in a catalog
    Scan {
        /// JSON instrument catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Restrict to one sector
        #[arg(long)]
        sector: Option<String>,
    },
}

/// Entry point for the binary: runs the command and prints its output.
pub fn run(args: Cli) -> anyhow::Result<()> {
    let output = app::run(args)?;
    println!("{}", output);
    Ok(())
}
