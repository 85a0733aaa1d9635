mod common;
use common::{config_and_series, series_from_closes, series_from_steps, start_date, steps};

use chrono::Duration;
use fear_gauge::{
    PriceBar, PriceSeries, SENTIMENT, SentimentClass, SentimentClassifier, SentimentConfig,
    SentimentError, SentimentReading, classify_series, config::NormalizationMethod,
};
use proptest::prelude::*;

fn classifier(config: SentimentConfig) -> SentimentClassifier {
    SentimentClassifier::new(config).expect("valid config")
}

/// Candidate closes for the last bar: both range ends, its open, the previous
/// close and evenly spaced points in between, in ascending order.
fn last_close_sweep(series: &PriceSeries) -> Vec<f64> {
    let bars = series.bars();
    let last = bars[bars.len() - 1];
    let mut closes = vec![last.low, last.high, last.open];
    if bars.len() > 1 {
        closes.push(bars[bars.len() - 2].close.clamp(last.low, last.high));
    }
    closes.extend((1..8).map(|k| (last.low + (last.high - last.low) * k as f64 / 8.0).clamp(last.low, last.high)));
    closes.sort_by(f64::total_cmp);
    closes
}

fn with_last_close(series: &PriceSeries, close: f64) -> PriceSeries {
    let mut bars = series.bars().to_vec();
    let last = bars[bars.len() - 1];
    *bars.last_mut().expect("non-empty") =
        PriceBar::new(last.date, last.open, last.high, last.low, close, last.volume);
    PriceSeries::new(series.symbol(), bars).expect("close stays inside the range")
}

proptest! {
    #[test]
    fn scores_stay_in_range((cfg, series) in config_and_series()) {
        let readings: Vec<_> = classifier(cfg).classify(&series).unwrap().collect();
        prop_assert_eq!(readings.len(), series.len() - cfg.window + 1);
        for r in readings {
            let s = r.score.value();
            prop_assert!(s.is_finite());
            prop_assert!((0.0..=100.0).contains(&s), "{}", s);
            prop_assert_eq!(r.class, SentimentClass::from_score(r.score, &cfg.thresholds));
        }
    }

    #[test]
    fn higher_latest_close_never_lowers_score((cfg, series) in config_and_series()) {
        let clf = classifier(cfg);
        let mut previous = f64::NEG_INFINITY;
        for close in last_close_sweep(&series) {
            let score = clf.live(&with_last_close(&series, close)).unwrap().score.value();
            prop_assert!(score >= previous - 1e-9, "close {}: {} < {}", close, score, previous);
            previous = score;
        }
    }

    #[test]
    fn identical_input_gives_identical_output((cfg, series) in config_and_series()) {
        let clf = classifier(cfg);
        let a: Vec<_> = clf.classify(&series).unwrap().collect();
        let b: Vec<_> = clf.classify(&series).unwrap().collect();
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.score.value().to_bits(), y.score.value().to_bits());
            prop_assert_eq!(x.class, y.class);
        }

        for result in clf.classify_all(&[series.clone(), series]) {
            prop_assert_eq!(result.unwrap(), a.clone());
        }
    }

    #[test]
    fn live_matches_last_classified_reading((cfg, series) in config_and_series()) {
        let clf = classifier(cfg);
        let last = clf.classify(&series).unwrap().last();
        prop_assert_eq!(Some(clf.live(&series).unwrap()), last);
    }

    #[test]
    fn date_gaps_do_not_matter(steps in steps(6..40), gap in 2i64..5) {
        let dense = series_from_steps("GAP", &steps);
        let gapped_bars = dense
            .bars()
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let date = start_date() + Duration::days(i as i64 * gap);
                PriceBar::new(date, b.open, b.high, b.low, b.close, b.volume)
            })
            .collect();
        let gapped = PriceSeries::new("GAP", gapped_bars).unwrap();

        let cfg = SentimentConfig { window: 6, ..SENTIMENT };
        let scores = |v: Vec<SentimentReading>| v.iter().map(|r| r.score).collect::<Vec<_>>();
        prop_assert_eq!(
            scores(classify_series(&dense, &cfg).unwrap()),
            scores(classify_series(&gapped, &cfg).unwrap())
        );
    }
}

#[test]
fn constant_series_is_neutral_everywhere() {
    let series = series_from_closes("FLAT", &[42.0; 60], 0.0);
    for cfg in [
        SENTIMENT,
        SentimentConfig { window: 5, ..SENTIMENT },
        SentimentConfig {
            window: 10,
            normalization: NormalizationMethod::ZScore { clip: 2.0 },
            ..SENTIMENT
        },
    ] {
        let readings: Vec<_> = classifier(cfg).classify(&series).unwrap().collect();
        assert_eq!(readings.len(), 60 - cfg.window + 1);
        for r in readings {
            assert_eq!(r.score.value(), 50.0);
            assert_eq!(r.class, SentimentClass::Neutral);
        }
    }
}

#[test]
fn window_length_boundaries() {
    let cfg = SentimentConfig { window: 8, ..SENTIMENT };
    let closes = [10.0, 10.2, 9.9, 10.4, 10.1, 10.6, 10.3, 10.8];
    let exact = series_from_closes("W", &closes, 0.1);
    assert_eq!(classify_series(&exact, &cfg).unwrap().len(), 1);

    let short = series_from_closes("W", &closes[..7], 0.1);
    assert_eq!(
        classify_series(&short, &cfg).unwrap_err(),
        SentimentError::InsufficientData {
            required: 8,
            available: 7
        }
    );
}

#[test]
fn reference_example() {
    let bars = [10.0, 11.0, 9.0]
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(start_date() + Duration::days(i as i64), c, c, c, c, 1))
        .collect();
    let series = PriceSeries::new("REF", bars).unwrap();
    let cfg = SentimentConfig { window: 3, ..SENTIMENT };
    let r = classifier(cfg).live(&series).unwrap();

    let bb = r.snapshot.bollinger;
    assert!((bb.middle - 10.0).abs() < 1e-9);
    assert!((bb.upper - 12.0).abs() < 1e-9);
    assert!((bb.lower - 8.0).abs() < 1e-9);
    assert!((r.snapshot.bollinger_position.value() - 0.25).abs() < 1e-9);
    assert!((r.snapshot.volatility - 0.199276).abs() < 1e-6);
    assert!((r.snapshot.downside_volatility - 0.128565).abs() < 1e-6);
    assert!((r.score.value() - 37.5).abs() < 1e-9);
    assert_eq!(r.class, SentimentClass::Fear);
}

#[test]
fn invalid_config_is_rejected_before_classifying() {
    let cfg = SentimentConfig { window: 1, ..SENTIMENT };
    assert!(matches!(
        SentimentClassifier::new(cfg),
        Err(SentimentError::InvalidConfiguration(_))
    ));
}
