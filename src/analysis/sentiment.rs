//! Greed-Fear classification over a price series.
//!
//! For every bar with a full window the classifier computes an
//! `IndicatorSnapshot`, normalizes downside volatility and ATR against their
//! own trailing history (at most `window` readings), and blends them with the
//! Bollinger position into a 0..100 score:
//!
//! ```text
//! greed = w_bb * bb + w_vol * (1 - vol_n) + w_atr * (1 - atr_n)
//! score = 100 * greed / (w_bb + w_vol + w_atr)
//! ```
//!
//! Bars before index `window - 1` are omitted from the output.
//! A window whose closes are all equal has collapsed bands and sits at the
//! neutral position 0.5; a constant-price series therefore scores exactly 50.

use {
    crate::{
        config::{DF, Pct, SentimentConfig, SentimentScore},
        domain::{PriceBar, PriceSeries},
        errors::SentimentError,
        models::{IndicatorSnapshot, SentimentClass, SentimentReading},
    },
    rayon::prelude::*,
    std::collections::VecDeque,
};

/// Stateless classifier holding a validated configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentClassifier {
    config: SentimentConfig,
}

impl SentimentClassifier {
    pub fn new(config: SentimentConfig) -> Result<Self, SentimentError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Lazy per-bar readings for the whole series.
    pub fn classify<'a>(&self, series: &'a PriceSeries) -> Result<SentimentIter<'a>, SentimentError> {
        log::debug!(
            "Classifying {} ({} bars, window {})",
            series.symbol(),
            series.len(),
            self.config.window
        );
        SentimentIter::new(series.bars(), self.config)
    }

    /// Reading for the most recent bar only.
    /// Reads just the trailing `lookback()` bars; equal to the last item of `classify`.
    pub fn live(&self, series: &PriceSeries) -> Result<SentimentReading, SentimentError> {
        let tail = series.tail(self.config.lookback());
        SentimentIter::new(tail, self.config)?
            .last()
            .ok_or(SentimentError::InsufficientData {
                required: self.config.window,
                available: series.len(),
            })
    }

    /// Classifies many independent series in parallel. Output order follows input order.
    pub fn classify_all(
        &self,
        series: &[PriceSeries],
    ) -> Vec<Result<Vec<SentimentReading>, SentimentError>> {
        crate::trace_time!("classify_all", 50_000, {
            series
                .par_iter()
                .map(|s| self.classify(s).map(|it| it.collect()))
                .collect()
        })
    }

    /// Live reading for many independent series in parallel.
    pub fn live_all(&self, series: &[PriceSeries]) -> Vec<Result<SentimentReading, SentimentError>> {
        series.par_iter().map(|s| self.live(s)).collect()
    }
}

/// One-shot helper: validate `config` and collect every reading of `series`.
pub fn classify_series(
    series: &PriceSeries,
    config: &SentimentConfig,
) -> Result<Vec<SentimentReading>, SentimentError> {
    config.validate()?;
    Ok(SentimentIter::new(series.bars(), *config)?.collect())
}

/// Lazy iterator over the readings of a bar slice.
/// Borrows the bars; owns a copy of the config and the trailing normalization history.
pub struct SentimentIter<'a> {
    bars: &'a [PriceBar],
    config: SentimentConfig,
    next_idx: usize,
    downside_history: VecDeque<f64>,
    atr_history: VecDeque<f64>,
}

impl<'a> SentimentIter<'a> {
    /// `config` is assumed valid.
    pub(crate) fn new(bars: &'a [PriceBar], config: SentimentConfig) -> Result<Self, SentimentError> {
        if bars.len() < config.window {
            return Err(SentimentError::InsufficientData {
                required: config.window,
                available: bars.len(),
            });
        }

        Ok(Self {
            bars,
            config,
            next_idx: config.window - 1,
            downside_history: VecDeque::with_capacity(config.window),
            atr_history: VecDeque::with_capacity(config.window),
        })
    }

    fn push_history(history: &mut VecDeque<f64>, value: f64, cap: usize) {
        if history.len() == cap {
            history.pop_front();
        }
        history.push_back(value);
    }
}

impl Iterator for SentimentIter<'_> {
    type Item = SentimentReading;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next_idx;
        if idx >= self.bars.len() {
            return None;
        }
        self.next_idx += 1;

        let w = self.config.window;
        let window = &self.bars[idx + 1 - w..=idx];
        let snapshot = IndicatorSnapshot::calculate(window, self.config.band_multiplier)?;

        Self::push_history(&mut self.downside_history, snapshot.downside_volatility, w);
        Self::push_history(&mut self.atr_history, snapshot.atr, w);

        let norm = self.config.normalization;
        let vol_n = norm.normalize_last(self.downside_history.make_contiguous());
        let atr_n = norm.normalize_last(self.atr_history.make_contiguous());

        let score = composite_score(&self.config, &snapshot, vol_n, atr_n);
        let class = SentimentClass::from_score(score, &self.config.thresholds);
        let date = self.bars[idx].date;

        if DF.log_snapshots {
            log::debug!("{} {} vol_n={} atr_n={} -> {} {}", date, snapshot, vol_n, atr_n, score, class);
        }

        Some(SentimentReading {
            date,
            score,
            class,
            snapshot,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bars.len().saturating_sub(self.next_idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SentimentIter<'_> {}

/// Weighted blend of the three unit-scale components.
fn composite_score(
    config: &SentimentConfig,
    snapshot: &IndicatorSnapshot,
    vol_n: Pct,
    atr_n: Pct,
) -> SentimentScore {
    let w = &config.weights;
    let greed = w.bollinger * snapshot.bollinger_position.value()
        + w.volatility * vol_n.complement().value()
        + w.atr * atr_n.complement().value();

    SentimentScore::from_unit(Pct::new(greed / w.total()))
}
