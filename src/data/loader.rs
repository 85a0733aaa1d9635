use {
    crate::{
        config::{DF, InstrumentCatalog, SentimentConfig},
        domain::{PriceBar, PriceSeries},
    },
    anyhow::{Context, Result},
    std::{fs::File, io::BufReader, path::Path},
};

/// Reads a JSON array of bars and builds a validated series.
/// When `symbol` is None the file stem is used.
pub fn load_series(path: &Path, symbol: Option<&str>) -> Result<PriceSeries> {
    let file = File::open(path).context(format!("Failed to open series file: {:?}", path))?;
    let reader = BufReader::new(file);

    let bars: Vec<PriceBar> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse price bars from: {}", path.display()))?;

    let symbol = match symbol {
        Some(s) => s.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let series = PriceSeries::new(symbol, bars)
        .with_context(|| format!("Invalid price series in: {}", path.display()))?;

    if DF.log_loading {
        log::info!("Loaded {} ({} bars) from {}", series.symbol(), series.len(), path.display());
    }
    Ok(series)
}

/// Reads the instrument catalog and resolves it against its own directory.
pub fn load_catalog(path: &Path) -> Result<InstrumentCatalog> {
    let file = File::open(path).context(format!("Failed to open catalog: {:?}", path))?;
    let catalog: InstrumentCatalog = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = catalog
        .resolve(base_dir)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;

    if DF.log_loading {
        log::info!(
            "Catalog {} lists {} instruments",
            path.display(),
            catalog.instruments.len()
        );
    }
    Ok(catalog)
}

/// Reads a JSON classifier config. Validation is left to the classifier.
pub fn load_config(path: &Path) -> Result<SentimentConfig> {
    let file = File::open(path).context(format!("Failed to open config: {:?}", path))?;
    let config: SentimentConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    if DF.log_loading {
        log::info!("Config from {}: window {}", path.display(), config.window);
    }
    Ok(config)
}

/// Loads every catalog instrument. Files that fail are logged and skipped.
pub fn load_catalog_series(catalog: &InstrumentCatalog) -> Vec<PriceSeries> {
    catalog
        .instruments
        .iter()
        .filter_map(|inst| match load_series(&inst.path, Some(&inst.symbol)) {
            Ok(series) => Some(series),
            Err(e) => {
                log::warn!("Skipping {}: {:#}", inst.symbol, e);
                None
            }
        })
        .collect()
}
