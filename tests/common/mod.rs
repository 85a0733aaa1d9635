#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use fear_gauge::{
    PriceBar, PriceSeries, SENTIMENT, SentimentConfig,
    config::{IndicatorWeights, NormalizationMethod},
};
use proptest::prelude::*;

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid date")
}

/// Bars from closes with a fixed +/- `spread` range and open at the previous close.
pub fn series_from_closes(symbol: &str, closes: &[f64], spread: f64) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let open = if i == 0 { c } else { closes[i - 1] };
            let high = c.max(open) + spread;
            let low = (c.min(open) - spread).max(0.01);
            PriceBar::new(start_date() + Duration::days(i as i64), open, high, low, c, 10_000)
        })
        .collect();
    PriceSeries::new(symbol, bars).expect("valid series")
}

/// Bars from (return, relative spread) steps starting at 50. Each bar opens
/// at the previous close; its range widens the body by `spread` on each side.
pub fn series_from_steps(symbol: &str, steps: &[(f64, f64)]) -> PriceSeries {
    let mut prev = 50.0;
    let bars = steps
        .iter()
        .enumerate()
        .map(|(i, &(ret, spread))| {
            let open = prev;
            let close = prev * (1.0 + ret);
            prev = close;
            PriceBar::new(
                start_date() + Duration::days(i as i64),
                open,
                open.max(close) * (1.0 + spread),
                open.min(close) * (1.0 - spread),
                close,
                10_000,
            )
        })
        .collect();
    PriceSeries::new(symbol, bars).expect("valid series")
}

pub fn normalization() -> impl Strategy<Value = NormalizationMethod> {
    prop_oneof![
        Just(NormalizationMethod::MinMax),
        (0.5f64..4.0).prop_map(|clip| NormalizationMethod::ZScore { clip }),
    ]
}

/// Valid classifier configs with the default thresholds.
pub fn configs() -> impl Strategy<Value = SentimentConfig> {
    (
        2usize..=25,
        0.5f64..3.0,
        (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0),
        normalization(),
    )
        .prop_filter("weights must not all vanish", |(_, _, (b, v, a), _)| b + v + a > 0.01)
        .prop_map(|(window, band_multiplier, (bollinger, volatility, atr), normalization)| {
            SentimentConfig {
                window,
                band_multiplier,
                normalization,
                weights: IndicatorWeights {
                    bollinger,
                    volatility,
                    atr,
                },
                ..SENTIMENT
            }
        })
}

/// Steps where unchanged closes and zero-range bars are common.
pub fn steps(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(f64, f64)>> {
    let ret = prop_oneof![1 => Just(0.0), 3 => -0.05f64..0.05];
    let spread = prop_oneof![1 => Just(0.0), 2 => 0.0f64..0.03];
    proptest::collection::vec((ret, spread), len)
}

/// A config together with a series at least one window long.
pub fn config_and_series() -> impl Strategy<Value = (SentimentConfig, PriceSeries)> {
    configs().prop_flat_map(|cfg| {
        let w = cfg.window;
        (
            Just(cfg),
            steps(w..3 * w + 10).prop_map(|s| series_from_steps("PROP", &s)),
        )
    })
}
