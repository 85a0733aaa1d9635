//! Bounded value types shared by the analysis code.

use {
    crate::config::constants::{SCORE_MAX, SCORE_MIDPOINT, SCORE_MIN},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Composite Greed-Fear score. 0 = Extreme Fear, 100 = Extreme Greed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(f64);

impl SentimentScore {
    pub const NEUTRAL: Self = Self(SCORE_MIDPOINT);

    /// Clamps into [SCORE_MIN, SCORE_MAX]. NaN collapses to neutral.
    pub const fn new(val: f64) -> Self {
        let v = if val.is_nan() {
            SCORE_MIDPOINT
        } else if val < SCORE_MIN {
            SCORE_MIN
        } else if val > SCORE_MAX {
            SCORE_MAX
        } else {
            val
        };
        Self(v)
    }

    /// Builds a score from a unit-interval "greed fraction".
    pub fn from_unit(fraction: Pct) -> Self {
        Self::new(SCORE_MIN + fraction.value() * (SCORE_MAX - SCORE_MIN))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A 'general' fraction clamped between 0 and 1
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Pct(f64);

impl Pct {
    pub const HALF: Self = Self(0.5);

    pub const fn new(val: f64) -> Self {
        let v = if val.is_nan() {
            0.5
        } else if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// 1 - self
    #[inline]
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl fmt::Display for Pct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_clamped() {
        assert_eq!(SentimentScore::new(-3.0).value(), 0.0);
        assert_eq!(SentimentScore::new(140.0).value(), 100.0);
        assert_eq!(SentimentScore::new(f64::NAN), SentimentScore::NEUTRAL);
        assert_eq!(SentimentScore::from_unit(Pct::new(0.375)).value(), 37.5);
    }

    #[test]
    fn pct_is_clamped() {
        assert_eq!(Pct::new(1.5).value(), 1.0);
        assert_eq!(Pct::new(-0.1).value(), 0.0);
        assert_eq!(Pct::new(0.25).complement().value(), 0.75);
    }
}
