//! Plain-text tables for the terminal.

use {
    crate::{
        analysis::{CorrelationMatrix, MetricColumn, MetricStats, SentimentSummary, VolatilityMetrics},
        domain::PriceSeries,
        models::{SentimentBand, SentimentClass, SentimentReading, TechnicalSentiment},
        ui::ui_text,
    },
    tabled::{Table, Tabled, builder::Builder, settings::Style},
};

#[derive(Tabled)]
struct ReadingRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Class")]
    class: SentimentClass,
    #[tabled(rename = "BB Pos")]
    bollinger: String,
    #[tabled(rename = "Vol")]
    volatility: String,
    #[tabled(rename = "ATR")]
    atr: String,
}

impl From<&SentimentReading> for ReadingRow {
    fn from(r: &SentimentReading) -> Self {
        Self {
            date: r.date.to_string(),
            close: format!("{:.2}", r.snapshot.close),
            score: r.score.to_string(),
            class: r.class,
            bollinger: format!("{:.3}", r.snapshot.bollinger_position.value()),
            volatility: format!("{:.4}", r.snapshot.volatility),
            atr: format!("{:.3}", r.snapshot.atr),
        }
    }
}

pub fn readings_table(readings: &[SentimentReading]) -> String {
    let rows: Vec<ReadingRow> = readings.iter().map(ReadingRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct BarRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    volume: u64,
    #[tabled(rename = "Money Flow")]
    money_flow: String,
}

/// Last `n` bars of the series with their money flow.
pub fn bars_table(series: &PriceSeries, n: usize) -> String {
    let rows: Vec<BarRow> = series
        .tail(n)
        .iter()
        .map(|b| BarRow {
            date: b.date.to_string(),
            open: format!("{:.2}", b.open),
            high: format!("{:.2}", b.high),
            low: format!("{:.2}", b.low),
            close: format!("{:.2}", b.close),
            volume: b.volume,
            money_flow: format!("{:+.0}", b.money_flow()),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct VolatilityRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Hist Vol %")]
    historical: String,
    #[tabled(rename = "ATR %")]
    atr: String,
    #[tabled(rename = "BB Width %")]
    band_width: String,
}

pub fn volatility_table(metrics: &[VolatilityMetrics]) -> String {
    let rows: Vec<VolatilityRow> = metrics
        .iter()
        .map(|m| VolatilityRow {
            date: m.date.to_string(),
            historical: format!("{:.1}", m.historical_volatility_pct),
            atr: format!("{:.2}", m.atr_pct),
            band_width: format!("{:.2}", m.band_width_pct),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct TechnicalRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Sentiment")]
    score: String,
    #[tabled(rename = "Band")]
    band: SentimentBand,
}

pub fn technical_table(scores: &[TechnicalSentiment]) -> String {
    let rows: Vec<TechnicalRow> = scores
        .iter()
        .map(|s| TechnicalRow {
            date: s.date.to_string(),
            score: format!("{:+.1}", s.score),
            band: s.band,
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// One row per metric; a column with no values shows dashes.
pub fn summary_table(stats: &[(MetricColumn, Option<MetricStats>)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Metric", "Count", "Mean", "Std Dev", "Min", "Median", "Max"]);
    for (col, stats) in stats {
        let mut record = vec![col.to_string()];
        match stats {
            Some(s) => {
                record.push(s.count.to_string());
                record.extend(
                    [s.mean, s.std_dev, s.min, s.median, s.max]
                        .iter()
                        .map(|v| format!("{:.2}", v)),
                );
            }
            None => {
                record.push("0".to_string());
                record.extend(std::iter::repeat_n("-".to_string(), 5));
            }
        }
        builder.push_record(record);
    }
    builder.build().with(Style::rounded()).to_string()
}

pub fn class_counts_table(summary: &SentimentSummary) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Class", "Readings"]);
    for (class, n) in &summary.class_counts {
        builder.push_record([class.to_string(), n.to_string()]);
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Bullet list in the "Key Insights" style.
pub fn insights_text(summary: &SentimentSummary) -> String {
    let current = &summary.current;
    let mut lines = vec![
        format!("Current Greed-Fear: {} ({})", current.score, current.class),
        format!("  {}", ui_text::class_description(current.class)),
        String::new(),
        format!("{}:", ui_text::TITLE_SENTIMENT_ANALYSIS),
    ];
    match &summary.technical {
        Some(t) => {
            lines.push(format!("  Current Sentiment: {:+.1} ({})", t.current.score, t.current.band));
            lines.push(format!("    {}", ui_text::band_description(t.current.band)));
            lines.push(format!("  Average Sentiment: {:+.1}", t.stats.mean));
            lines.push(format!("  Sentiment Volatility: {:.1}", t.stats.std_dev));
            lines.push(format!("  Sentiment Trend: {}", t.trend));
        }
        None => lines.push(format!("  {}", ui_text::NO_TECHNICAL)),
    }

    lines.push(String::new());
    lines.push(format!("{}:", ui_text::TITLE_PSYCHOLOGY));
    lines.push(format!("  Average Greed-Fear: {}", summary.mean_score()));
    lines.push(format!("  Current vs Average: {:+.1}", summary.current_vs_average));
    lines.push(format!(
        "  Market State: {} ({})",
        summary.mood,
        ui_text::mood_description(summary.mood)
    ));
    if let Some(dominant) = summary.dominant_class() {
        lines.push(format!("  Most common class: {}", dominant));
    }
    lines.join("\n")
}

pub fn correlation_table(matrix: &CorrelationMatrix) -> String {
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(matrix.columns.iter().map(|c| c.to_string()));
    builder.push_record(header);

    for (col, row) in matrix.columns.iter().zip(&matrix.values) {
        let mut record = vec![col.to_string()];
        record.extend(row.iter().map(|v| {
            if v.is_nan() {
                "-".to_string()
            } else {
                format!("{:+.2}", v)
            }
        }));
        builder.push_record(record);
    }
    builder.build().with(Style::rounded()).to_string()
}

#[derive(Tabled)]
pub struct ScanRow {
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Sector")]
    pub sector: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Score")]
    pub score: String,
    #[tabled(rename = "Class")]
    pub class: String,
}

pub fn scan_table(rows: Vec<ScanRow>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}
