//! Technical Sentiment Score: a -100..100 vote of four classic signals.
//!
//! ```text
//! ma     = +1 if MA(fast) > MA(slow) else -1
//! rsi    = -1 above overbought, +1 below oversold, else 0
//! bands  = -1 above band_upper, +1 below band_lower, else 0
//! change = sign of the mean return over change_period bars
//! raw    = 100 * (w_ma*ma + w_rsi*rsi + w_bb*bands + w_chg*change)
//! ```
//!
//! The published score is the mean of the last `smoothing` raw scores.
//! Bars before `TechnicalConfig::first_index` are omitted.

use {
    crate::{
        analysis::indicators::BollingerBands,
        config::TechnicalConfig,
        domain::PriceSeries,
        models::{SentimentBand, TechnicalSentiment},
    },
    itertools::Itertools,
    statrs::statistics::Statistics,
};

pub fn technical_sentiment(series: &PriceSeries, config: &TechnicalConfig) -> Vec<TechnicalSentiment> {
    let bars = series.bars();
    let closes = series.closes();
    let smoothing = config.smoothing.max(1);
    let first = config.first_index();
    if closes.len() <= first {
        return Vec::new();
    }

    let deltas: Vec<f64> = closes.iter().tuple_windows().map(|(a, b)| b - a).collect();
    let returns: Vec<f64> = bars
        .iter()
        .tuple_windows()
        .map(|(prev, cur)| cur.return_from(prev.close))
        .collect();

    let raw_start = first + 1 - smoothing;
    let raw: Vec<f64> = (raw_start..closes.len())
        .map(|i| {
            let w = &config.weights;
            let band_window = &bars[i + 1 - config.band_period.max(1)..=i];
            let position = BollingerBands::calculate(band_window, config.band_multiplier)
                .position(closes[i])
                .value();

            let rsi_vote = threshold_vote(
                rsi(&deltas, i, config.rsi_period),
                config.rsi_overbought,
                config.rsi_oversold,
            );
            let band_vote = threshold_vote(position, config.band_upper, config.band_lower);
            let change_vote = sign(trailing_mean(&returns, i, config.change_period));

            100.0
                * (w.ma_cross * ma_vote(&closes, i, config)
                    + w.rsi * rsi_vote
                    + w.bollinger * band_vote
                    + w.price_change * change_vote)
        })
        .collect();

    raw.windows(smoothing)
        .zip(&bars[first..])
        .map(|(scores, bar)| {
            let score = scores.mean();
            TechnicalSentiment {
                date: bar.date,
                score,
                band: SentimentBand::from_score(score),
            }
        })
        .collect()
}

fn ma_vote(closes: &[f64], i: usize, config: &TechnicalConfig) -> f64 {
    let fast = closes[i + 1 - config.fast_ma.max(1)..=i].mean();
    let slow = closes[i + 1 - config.slow_ma.max(1)..=i].mean();
    if fast > slow { 1.0 } else { -1.0 }
}

/// Simple-average RSI over the `period` price changes ending at bar `i`.
/// No movement at all reads as 50.
fn rsi(deltas: &[f64], i: usize, period: usize) -> f64 {
    let period = period.max(1);
    // deltas[j] is the change into bar j + 1
    let window = &deltas[i - period..i];
    let gain = window.iter().map(|d| d.max(0.0)).sum::<f64>() / period as f64;
    let loss = window.iter().map(|d| (-d).max(0.0)).sum::<f64>() / period as f64;
    if loss == 0.0 {
        return if gain == 0.0 { 50.0 } else { 100.0 };
    }
    100.0 - 100.0 / (1.0 + gain / loss)
}

/// Mean of the `period` returns ending at bar `i`.
fn trailing_mean(returns: &[f64], i: usize, period: usize) -> f64 {
    returns[i - period.max(1)..i].mean()
}

/// Contrarian vote: stretched high is -1, stretched low is +1.
fn threshold_vote(value: f64, upper: f64, lower: f64) -> f64 {
    if value > upper {
        -1.0
    } else if value < lower {
        1.0
    } else {
        0.0
    }
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
