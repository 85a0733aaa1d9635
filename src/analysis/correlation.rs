use {
    crate::{
        analysis::metrics::{MetricColumn, MetricRow},
        utils::pearson,
    },
    serde::{Deserialize, Serialize},
};

/// Square Pearson matrix; `values[i][j]` pairs `columns[i]` with `columns[j]`.
/// Each pair uses the rows where both columns have a value. Entries involving
/// a zero-variance column are NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<MetricColumn>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: MetricColumn, b: MetricColumn) -> Option<f64> {
        let i = self.columns.iter().position(|c| *c == a)?;
        let j = self.columns.iter().position(|c| *c == b)?;
        Some(self.values[i][j])
    }
}

pub fn correlation_matrix(rows: &[MetricRow], columns: &[MetricColumn]) -> CorrelationMatrix {
    let values = columns
        .iter()
        .map(|&a| columns.iter().map(|&b| pair_correlation(rows, a, b)).collect())
        .collect();

    CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    }
}

fn pair_correlation(rows: &[MetricRow], a: MetricColumn, b: MetricColumn) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = rows
        .iter()
        .filter_map(|r| Some((r.value(a)?, r.value(b)?)))
        .unzip();
    pearson(&xs, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{metrics::metric_rows, sentiment::classify_series, technical_sentiment::technical_sentiment},
        config::{SENTIMENT, SentimentConfig, TECHNICAL},
        domain::{PriceBar, PriceSeries},
    };
    use chrono::{Duration, NaiveDate};
    use strum::IntoEnumIterator;

    fn wavy_series() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let bars = (0..90)
            .map(|i| {
                let c = 50.0 + (i as f64 * 0.4).sin() * 4.0 + (i as f64 * 0.13).cos() * 2.0;
                PriceBar::new(start + Duration::days(i), c, c + 0.8, c - 0.6, c, 10_000)
            })
            .collect();
        PriceSeries::new("WAVE", bars).unwrap()
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let series = wavy_series();
        let cfg = SentimentConfig { window: 10, ..SENTIMENT };
        let readings = classify_series(&series, &cfg).unwrap();
        let rows = metric_rows(&readings, &technical_sentiment(&series, &TECHNICAL));
        assert!(rows.iter().any(|r| r.sentiment.is_none()));
        assert!(rows.iter().filter(|r| r.sentiment.is_some()).count() > 30);

        let cols: Vec<_> = MetricColumn::iter().collect();
        let m = correlation_matrix(&rows, &cols);

        assert_eq!(m.values.len(), 5);
        for i in 0..5 {
            assert!((m.values[i][i] - 1.0).abs() < 1e-9);
            for j in 0..5 {
                assert!((m.values[i][j] - m.values[j][i]).abs() < 1e-12);
                assert!(m.values[i][j].abs() <= 1.0);
            }
        }
        assert!(m.get(MetricColumn::Score, MetricColumn::Sentiment).is_some_and(|v| !v.is_nan()));
    }

    #[test]
    fn constant_column_gives_nan() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let bars = (0..8)
            .map(|i| PriceBar::new(start + Duration::days(i), 7.0, 7.0, 7.0, 7.0, 1))
            .collect();
        let series = PriceSeries::new("FLAT", bars).unwrap();
        let cfg = SentimentConfig { window: 3, ..SENTIMENT };
        let readings = classify_series(&series, &cfg).unwrap();
        let rows = metric_rows(&readings, &[]);
        let m = correlation_matrix(&rows, &[MetricColumn::Score, MetricColumn::AtrPct, MetricColumn::Sentiment]);
        assert!(m.values[0][0].is_nan());
        assert!(m.values[0][1].is_nan());
        // no technical scores at all
        assert!(m.values[2][2].is_nan());
    }
}
