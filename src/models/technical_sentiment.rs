use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::fmt,
    strum_macros::{Display, EnumIter},
};

/// Interpretation band of the technical Sentiment Score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum SentimentBand {
    #[strum(to_string = "Very Negative")]
    VeryNegative,
    #[strum(to_string = "Negative")]
    Negative,
    #[strum(to_string = "Neutral")]
    Neutral,
    #[strum(to_string = "Positive")]
    Positive,
    #[strum(to_string = "Very Positive")]
    VeryPositive,
}

impl SentimentBand {
    /// Cut points at -50, -20, 20 and 50; a score on a cut point takes the upper band.
    pub fn from_score(score: f64) -> Self {
        if score >= 50.0 {
            Self::VeryPositive
        } else if score >= 20.0 {
            Self::Positive
        } else if score >= -20.0 {
            Self::Neutral
        } else if score >= -50.0 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }
}

/// Smoothed technical Sentiment Score for one bar, on a -100..100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSentiment {
    pub date: NaiveDate,
    pub score: f64,
    pub band: SentimentBand,
}

impl fmt::Display for TechnicalSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+.1} ({})", self.date, self.score, self.band)
    }
}
