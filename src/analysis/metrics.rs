//! Per-date metric table joining Greed-Fear readings with the technical
//! Sentiment Score, plus describe-style column statistics.

use {
    crate::{
        analysis::volatility_metrics::VolatilityMetrics,
        models::{SentimentReading, TechnicalSentiment},
        utils::{mean_and_sample_stddev, min_max},
    },
    chrono::NaiveDate,
    itertools::{EitherOrBoth, Itertools},
    serde::{Deserialize, Serialize},
    statrs::statistics::{Data, Median},
    strum_macros::{Display, EnumIter},
};

/// Columns of the metric table, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display)]
pub enum MetricColumn {
    #[strum(to_string = "Greed-Fear")]
    Score,
    #[strum(to_string = "Sentiment")]
    Sentiment,
    #[strum(to_string = "Hist Vol %")]
    HistoricalVolatility,
    #[strum(to_string = "ATR %")]
    AtrPct,
    #[strum(to_string = "BB Width %")]
    BandWidth,
}

/// One classified date. `sentiment` is None until the technical score has
/// enough history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub date: NaiveDate,
    pub greed_fear: f64,
    pub sentiment: Option<f64>,
    pub volatility: VolatilityMetrics,
}

impl MetricRow {
    pub fn value(&self, column: MetricColumn) -> Option<f64> {
        match column {
            MetricColumn::Score => Some(self.greed_fear),
            MetricColumn::Sentiment => self.sentiment,
            MetricColumn::HistoricalVolatility => Some(self.volatility.historical_volatility_pct),
            MetricColumn::AtrPct => Some(self.volatility.atr_pct),
            MetricColumn::BandWidth => Some(self.volatility.band_width_pct),
        }
    }
}

/// One row per reading. Technical scores are matched by date; scores on
/// dates without a reading are dropped.
pub fn metric_rows(readings: &[SentimentReading], technical: &[TechnicalSentiment]) -> Vec<MetricRow> {
    readings
        .iter()
        .merge_join_by(technical, |r, t| r.date.cmp(&t.date))
        .filter_map(|pair| {
            let (reading, sentiment) = match pair {
                EitherOrBoth::Both(r, t) => (r, Some(t.score)),
                EitherOrBoth::Left(r) => (r, None),
                EitherOrBoth::Right(_) => return None,
            };
            Some(MetricRow {
                date: reading.date,
                greed_fear: reading.score.value(),
                sentiment,
                volatility: VolatilityMetrics::from_reading(reading),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub count: usize,
    pub mean: f64,
    /// Sample (n-1)
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl MetricStats {
    /// None for an empty column.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (min, max) = min_max(values)?;
        let (mean, std_dev) = mean_and_sample_stddev(values);
        let median = Data::new(values.to_vec()).median();
        Some(Self {
            count: values.len(),
            mean,
            std_dev,
            min,
            median,
            max,
        })
    }
}

/// Statistics of each requested column over the values it has.
pub fn describe(rows: &[MetricRow], columns: &[MetricColumn]) -> Vec<(MetricColumn, Option<MetricStats>)> {
    columns
        .iter()
        .map(|&col| {
            let values: Vec<f64> = rows.iter().filter_map(|r| r.value(col)).collect();
            (col, MetricStats::from_values(&values))
        })
        .collect()
}
