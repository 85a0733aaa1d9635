mod commands;

use {
    crate::{
        Cli, Command,
        analysis::SentimentClassifier,
        config::SentimentConfig,
        data::load_config,
    },
    anyhow::{Context, Result},
};

/// Builds the classifier from the optional config file and runs one command.
pub fn run(args: Cli) -> Result<String> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SentimentConfig::default(),
    };
    let classifier = SentimentClassifier::new(config).context("Invalid sentiment configuration")?;

    match &args.command {
        Command::Classify { series, symbol, tail } => {
            commands::classify(&classifier, series, symbol.as_deref(), *tail)
        }
        Command::Live { series, symbol } => commands::live(&classifier, series, symbol.as_deref()),
        Command::Report { series, symbol } => {
            commands::report(&classifier, series, symbol.as_deref())
        }
        Command::Scan { catalog, sector } => {
            commands::scan(&classifier, catalog, sector.as_deref())
        }
    }
}
