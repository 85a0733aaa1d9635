use {
    crate::{config::constants::TRADING_DAYS_PER_YEAR, models::SentimentReading},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Volatility figures for one classified bar, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityMetrics {
    pub date: NaiveDate,
    /// Return std-dev annualized with sqrt(252)
    pub historical_volatility_pct: f64,
    /// ATR relative to the close
    pub atr_pct: f64,
    /// Upper minus lower band, relative to the moving average
    pub band_width_pct: f64,
}

impl VolatilityMetrics {
    pub fn from_reading(reading: &SentimentReading) -> Self {
        let snap = &reading.snapshot;
        let atr_pct = if snap.close > f64::EPSILON {
            snap.atr / snap.close * 100.0
        } else {
            0.0
        };

        Self {
            date: reading.date,
            historical_volatility_pct: snap.volatility * TRADING_DAYS_PER_YEAR.sqrt() * 100.0,
            atr_pct,
            band_width_pct: snap.bollinger.width_ratio() * 100.0,
        }
    }
}

pub fn volatility_metrics(readings: &[SentimentReading]) -> Vec<VolatilityMetrics> {
    readings.iter().map(VolatilityMetrics::from_reading).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{SENTIMENT, SentimentConfig},
        domain::{PriceBar, PriceSeries},
        analysis::sentiment::classify_series,
    };

    #[test]
    fn reference_window_metrics() {
        let bars = [(10.0, 9.5, 10.0), (11.5, 10.0, 11.0), (11.0, 9.0, 9.0)]
            .iter()
            .enumerate()
            .map(|(i, &(h, l, c))| {
                let date = NaiveDate::from_ymd_opt(2024, 2, 1 + i as u32).unwrap();
                PriceBar::new(date, c, h, l, c, 500)
            })
            .collect();
        let series = PriceSeries::new("REF", bars).unwrap();
        let cfg = SentimentConfig { window: 3, ..SENTIMENT };
        let readings = classify_series(&series, &cfg).unwrap();

        let m = volatility_metrics(&readings);
        assert_eq!(m.len(), 1);
        // 0.199275547 * sqrt(252) * 100
        assert!((m[0].historical_volatility_pct - 316.340_1).abs() < 1e-3);
        // TRs: 0.5, max(1.5, 1.5, 0) = 1.5, max(2, 0, 2) = 2 -> ATR 4/3, close 9
        assert!((m[0].atr_pct - 4.0 / 3.0 / 9.0 * 100.0).abs() < 1e-9);
        // bands 12/8 around 10
        assert!((m[0].band_width_pct - 40.0).abs() < 1e-9);
    }
}
