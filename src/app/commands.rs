use {
    crate::{
        analysis::{
            MetricColumn, SentimentClassifier, correlation_matrix, describe, metric_rows, summarize,
            technical_sentiment, volatility_metrics,
        },
        config::{DF, InstrumentCatalog, TECHNICAL, constants},
        data::{load_catalog, load_catalog_series, load_series},
        models::SentimentReading,
        ui::{self, ScanRow, ui_text},
    },
    anyhow::{Context, Result},
    std::path::Path,
    strum::IntoEnumIterator,
};

/// Bars shown above the report.
const REPORT_BARS: usize = 5;

pub fn classify(
    classifier: &SentimentClassifier,
    path: &Path,
    symbol: Option<&str>,
    tail: Option<usize>,
) -> Result<String> {
    let series = load_series(path, symbol)?;
    let readings: Vec<SentimentReading> = classifier
        .classify(&series)
        .with_context(|| format!("Cannot classify {}", series.symbol()))?
        .collect();

    let keep = tail.unwrap_or(constants::cli::DEFAULT_TAIL);
    let shown = &readings[readings.len().saturating_sub(keep)..];

    Ok(format!(
        "{} - {} ({} of {} readings, window {})\n{}",
        ui_text::TITLE_READINGS,
        series.symbol(),
        shown.len(),
        readings.len(),
        classifier.config().window,
        ui::readings_table(shown)
    ))
}

pub fn live(classifier: &SentimentClassifier, path: &Path, symbol: Option<&str>) -> Result<String> {
    let series = load_series(path, symbol)?;
    let reading = classifier
        .live(&series)
        .with_context(|| format!("No live reading for {}", series.symbol()))?;

    let mut out = format!(
        "{} - {}: {}\n{}",
        ui_text::TITLE_LIVE,
        series.symbol(),
        reading,
        ui_text::class_description(reading.class)
    );
    if let Some(tech) = technical_sentiment(&series, &TECHNICAL).last() {
        out.push_str(&format!(
            "\n{}: {}\n{}",
            ui_text::TITLE_TECHNICAL,
            tech,
            ui_text::band_description(tech.band)
        ));
    }
    Ok(out)
}

pub fn report(classifier: &SentimentClassifier, path: &Path, symbol: Option<&str>) -> Result<String> {
    let series = load_series(path, symbol)?;
    let readings: Vec<SentimentReading> = classifier
        .classify(&series)
        .with_context(|| format!("Cannot classify {}", series.symbol()))?
        .collect();

    let technical = technical_sentiment(&series, &TECHNICAL);
    let Some(summary) = summarize(&readings, &technical) else {
        return Ok(ui_text::NO_READINGS.to_string());
    };

    let mut sections = vec![
        format!("{}\n{}", series.symbol(), ui::bars_table(&series, REPORT_BARS)),
    ];

    let metrics = volatility_metrics(&readings);
    let latest = &metrics[metrics.len().saturating_sub(1)..];
    sections.push(format!(
        "{}\n{}",
        ui_text::TITLE_VOLATILITY,
        ui::volatility_table(latest)
    ));
    if !technical.is_empty() {
        let recent = &technical[technical.len().saturating_sub(REPORT_BARS)..];
        sections.push(format!(
            "{}\n{}",
            ui_text::TITLE_TECHNICAL,
            ui::technical_table(recent)
        ));
    }

    let columns: Vec<MetricColumn> = MetricColumn::iter().collect();
    let rows = metric_rows(&readings, &technical);
    sections.push(format!(
        "{}\n{}\n{}",
        ui_text::TITLE_SUMMARY,
        ui::summary_table(&describe(&rows, &columns)),
        ui::class_counts_table(&summary)
    ));
    sections.push(format!(
        "{}\n{}",
        ui_text::TITLE_INSIGHTS,
        ui::insights_text(&summary)
    ));

    let matrix = correlation_matrix(&rows, &columns);
    sections.push(format!(
        "{}\n{}",
        ui_text::TITLE_CORRELATION,
        ui::correlation_table(&matrix)
    ));

    Ok(sections.join("\n\n"))
}

pub fn scan(classifier: &SentimentClassifier, path: &Path, sector: Option<&str>) -> Result<String> {
    let catalog = load_catalog(path)?;
    let catalog = match sector {
        Some(sector) => {
            let instruments: Vec<_> = catalog.in_sector(sector).cloned().collect();
            if instruments.is_empty() {
                log::warn!(
                    "No instruments in sector '{}'. Known sectors: {:?}",
                    sector,
                    catalog.sectors()
                );
            }
            InstrumentCatalog { instruments }
        }
        None => catalog,
    };

    if DF.log_scan {
        log::info!("Scanning {:?}", catalog.symbols().collect::<Vec<_>>());
    }

    let series = load_catalog_series(&catalog);
    let results = classifier.live_all(&series);

    let mut rows = Vec::with_capacity(series.len());
    for (s, result) in series.iter().zip(results) {
        let sector = catalog
            .get(s.symbol())
            .ok()
            .and_then(|i| i.sector.clone())
            .unwrap_or_default();
        match result {
            Ok(reading) => {
                if DF.log_scan {
                    log::info!("{}: {}", s.symbol(), reading);
                }
                rows.push(ScanRow {
                    symbol: s.symbol().to_string(),
                    sector,
                    date: reading.date.to_string(),
                    score: reading.score.to_string(),
                    class: reading.class.to_string(),
                });
            }
            Err(e) => log::warn!("Skipping {}: {}", s.symbol(), e),
        }
    }

    Ok(format!("{}\n{}", ui_text::TITLE_SCAN, ui::scan_table(rows)))
}
