use {
    crate::{
        config::{ClassThresholds, SentimentScore, constants::mood},
        models::IndicatorSnapshot,
    },
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::fmt,
    strum_macros::{Display, EnumIter},
};

/// Discrete Greed-Fear band, ordered from most fearful to most greedy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum SentimentClass {
    #[strum(to_string = "Extreme Fear")]
    ExtremeFear,
    #[strum(to_string = "Fear")]
    Fear,
    #[strum(to_string = "Neutral")]
    Neutral,
    #[strum(to_string = "Greed")]
    Greed,
    #[strum(to_string = "Extreme Greed")]
    ExtremeGreed,
}

impl SentimentClass {
    /// Maps a score through the cut points.
    /// A score sitting exactly on a cut point goes to the class nearer Neutral.
    pub fn from_score(score: SentimentScore, t: &ClassThresholds) -> Self {
        let s = score.value();
        if s < t.extreme_fear {
            Self::ExtremeFear
        } else if s < t.fear {
            Self::Fear
        } else if s <= t.greed {
            Self::Neutral
        } else if s <= t.extreme_greed {
            Self::Greed
        } else {
            Self::ExtremeGreed
        }
    }

    /// Position in `SentimentClass::iter()` order.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// One classified bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub date: NaiveDate,
    pub score: SentimentScore,
    pub class: SentimentClass,
    pub snapshot: IndicatorSnapshot,
}

impl fmt::Display for SentimentReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.score, self.class)
    }
}

/// Coarse read of the latest score, as shown next to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MarketMood {
    Overheated,
    Balanced,
    Undervalued,
}

impl MarketMood {
    pub fn from_score(score: SentimentScore) -> Self {
        let s = score.value();
        if s > mood::OVERHEATED_ABOVE {
            Self::Overheated
        } else if s < mood::UNDERVALUED_BELOW {
            Self::Undervalued
        } else {
            Self::Balanced
        }
    }
}

/// Latest score against the period average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum SentimentTrend {
    Improving,
    Declining,
}

impl SentimentTrend {
    /// Improving only when strictly above the average.
    pub fn from_current(current: f64, average: f64) -> Self {
        if current > average {
            Self::Improving
        } else {
            Self::Declining
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SENTIMENT;
    use strum::IntoEnumIterator;

    fn class(s: f64) -> SentimentClass {
        SentimentClass::from_score(SentimentScore::new(s), &SENTIMENT.thresholds)
    }

    #[test]
    fn classes_follow_thresholds() {
        assert_eq!(class(0.0), SentimentClass::ExtremeFear);
        assert_eq!(class(19.9), SentimentClass::ExtremeFear);
        assert_eq!(class(37.5), SentimentClass::Fear);
        assert_eq!(class(50.0), SentimentClass::Neutral);
        assert_eq!(class(75.0), SentimentClass::Greed);
        assert_eq!(class(100.0), SentimentClass::ExtremeGreed);
    }

    #[test]
    fn ties_go_to_lower_intensity() {
        assert_eq!(class(20.0), SentimentClass::Fear);
        assert_eq!(class(40.0), SentimentClass::Neutral);
        assert_eq!(class(60.0), SentimentClass::Neutral);
        assert_eq!(class(80.0), SentimentClass::Greed);
    }

    #[test]
    fn ordinal_matches_iteration_order() {
        for (i, c) in SentimentClass::iter().enumerate() {
            assert_eq!(c.ordinal(), i);
        }
        assert_eq!(SentimentClass::ExtremeGreed.to_string(), "Extreme Greed");
    }

    #[test]
    fn mood_bands() {
        assert_eq!(MarketMood::from_score(SentimentScore::new(71.0)), MarketMood::Overheated);
        assert_eq!(MarketMood::from_score(SentimentScore::new(70.0)), MarketMood::Balanced);
        assert_eq!(MarketMood::from_score(SentimentScore::new(29.0)), MarketMood::Undervalued);
    }
}
