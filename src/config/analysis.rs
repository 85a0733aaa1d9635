//! Analysis and computation configuration

use serde::{Deserialize, Serialize};

use crate::config::constants::{MIN_WINDOW, SCORE_MAX, SCORE_MIDPOINT, SCORE_MIN};
use crate::errors::ConfigError;

/// How a raw indicator reading is put on the unit scale
/// against its own trailing history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum NormalizationMethod {
    /// (x - min) / (max - min) over the history.
    MinMax,
    /// Sample z-score, mapped linearly so that -clip..+clip covers 0..1.
    ZScore { clip: f64 },
}

/// Relative weight of each indicator in the composite score.
/// Only the ratios matter; the sum is normalized away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorWeights {
    /// Bollinger position (greed when near the upper band)
    pub bollinger: f64,
    /// Downside volatility (fear when high)
    pub volatility: f64,
    /// Average True Range (fear when high)
    pub atr: f64,
}

impl IndicatorWeights {
    pub fn total(&self) -> f64 {
        self.bollinger + self.volatility + self.atr
    }
}

/// Score cut points between the five classes.
/// Must be strictly increasing and lie inside the score range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassThresholds {
    pub extreme_fear: f64,
    pub fear: f64,
    pub greed: f64,
    pub extreme_greed: f64,
}

impl ClassThresholds {
    pub fn as_array(&self) -> [f64; 4] {
        [self.extreme_fear, self.fear, self.greed, self.extreme_greed]
    }
}

/// The Master Sentiment Configuration.
/// Passed explicitly to the classifier; nothing in the algorithm reads `SENTIMENT` directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Rolling window W, in available bars (not calendar days)
    pub window: usize,
    /// Bollinger band multiplier k (in standard deviations)
    pub band_multiplier: f64,
    pub normalization: NormalizationMethod,
    pub weights: IndicatorWeights,
    pub thresholds: ClassThresholds,
}

impl SentimentConfig {
    /// Checks every field. Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window < MIN_WINDOW {
            return Err(ConfigError::WindowTooSmall {
                window: self.window,
                min: MIN_WINDOW,
            });
        }

        if !self.band_multiplier.is_finite() || self.band_multiplier <= 0.0 {
            return Err(ConfigError::NonPositiveBandMultiplier(self.band_multiplier));
        }

        if let NormalizationMethod::ZScore { clip } = self.normalization {
            if !clip.is_finite() || clip <= 0.0 {
                return Err(ConfigError::InvalidClip(clip));
            }
        }

        let w = &self.weights;
        for (name, value) in [
            ("bollinger", w.bollinger),
            ("volatility", w.volatility),
            ("atr", w.atr),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if w.total() <= 0.0 {
            return Err(ConfigError::ZeroWeightSum);
        }

        let cuts = self.thresholds.as_array();
        if let Some(&value) = cuts
            .iter()
            .find(|v| !v.is_finite() || **v < SCORE_MIN || **v > SCORE_MAX)
        {
            return Err(ConfigError::ThresholdOutOfRange {
                value,
                min: SCORE_MIN,
                max: SCORE_MAX,
            });
        }
        if cuts.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::UnorderedThresholds(cuts));
        }

        // A constant-price series scores exactly the midpoint and must read as Neutral.
        let t = &self.thresholds;
        if t.fear > SCORE_MIDPOINT || t.greed < SCORE_MIDPOINT {
            return Err(ConfigError::NeutralBandMissesMidpoint {
                fear: t.fear,
                greed: t.greed,
                midpoint: SCORE_MIDPOINT,
            });
        }

        Ok(())
    }

    /// Number of trailing bars a single reading can depend on:
    /// W bars for the raw indicators plus W-1 more for the normalization history.
    pub fn lookback(&self) -> usize {
        2 * self.window - 1
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        SENTIMENT
    }
}

pub const SENTIMENT: SentimentConfig = SentimentConfig {
    window: 20,
    band_multiplier: 2.0,

    normalization: NormalizationMethod::MinMax,

    weights: IndicatorWeights {
        bollinger: 0.5,
        volatility: 0.25,
        atr: 0.25,
    },

    // Same cut points the dashboard drew as horizontal guide lines
    thresholds: ClassThresholds {
        extreme_fear: 20.0,
        fear: 40.0,
        greed: 60.0,
        extreme_greed: 80.0,
    },
};

/// Signal weights of the technical Sentiment Score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub ma_cross: f64,
    pub rsi: f64,
    pub bollinger: f64,
    pub price_change: f64,
}

/// Settings for the technical Sentiment Score (-100..100).
/// Each signal votes -1, 0 or +1; the weighted vote is scaled by 100 and smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalConfig {
    pub fast_ma: usize,
    pub slow_ma: usize,
    pub rsi_period: usize,
    /// RSI above this votes -1
    pub rsi_overbought: f64,
    /// RSI below this votes +1
    pub rsi_oversold: f64,
    pub band_period: usize,
    pub band_multiplier: f64,
    /// Band position above this votes -1
    pub band_upper: f64,
    /// Band position below this votes +1
    pub band_lower: f64,
    /// Bars averaged for the price-change vote
    pub change_period: usize,
    /// Trailing raw scores averaged into the published score
    pub smoothing: usize,
    pub weights: SignalWeights,
}

impl TechnicalConfig {
    /// Index of the first bar with a published score.
    pub fn first_index(&self) -> usize {
        let raw = (self.slow_ma.max(self.fast_ma).max(self.band_period).max(1) - 1)
            .max(self.rsi_period.max(1))
            .max(self.change_period.max(1));
        raw + self.smoothing.max(1) - 1
    }
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        TECHNICAL
    }
}

pub const TECHNICAL: TechnicalConfig = TechnicalConfig {
    fast_ma: 5,
    slow_ma: 20,
    rsi_period: 14,
    rsi_overbought: 70.0,
    rsi_oversold: 30.0,
    band_period: 20,
    band_multiplier: 2.0,
    band_upper: 0.8,
    band_lower: 0.2,
    change_period: 5,
    smoothing: 3,
    weights: SignalWeights {
        ma_cross: 0.3,
        rsi: 0.25,
        bollinger: 0.25,
        price_change: 0.2,
    },
};
