use {
    crate::{
        analysis::metrics::MetricStats,
        config::SentimentScore,
        models::{MarketMood, SentimentClass, SentimentReading, SentimentTrend, TechnicalSentiment},
    },
    serde::{Deserialize, Serialize},
    strum::IntoEnumIterator,
};

/// "Key insights" read of a run of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub current: SentimentReading,
    pub greed_fear: MetricStats,
    /// current - mean Greed-Fear
    pub current_vs_average: f64,
    pub mood: MarketMood,
    /// Readings per class, in `SentimentClass::iter()` order
    pub class_counts: Vec<(SentimentClass, usize)>,
    /// Absent while the series is too short for a technical score
    pub technical: Option<TechnicalSummary>,
}

/// Average, volatility and trend of the technical Sentiment Score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSummary {
    pub current: TechnicalSentiment,
    pub stats: MetricStats,
    pub trend: SentimentTrend,
}

impl TechnicalSummary {
    pub fn from_scores(scores: &[TechnicalSentiment]) -> Option<Self> {
        let current = *scores.last()?;
        let values: Vec<f64> = scores.iter().map(|s| s.score).collect();
        let stats = MetricStats::from_values(&values)?;
        Some(Self {
            current,
            stats,
            trend: SentimentTrend::from_current(current.score, stats.mean),
        })
    }
}

/// None when there are no readings.
pub fn summarize(readings: &[SentimentReading], technical: &[TechnicalSentiment]) -> Option<SentimentSummary> {
    let current = *readings.last()?;
    let scores: Vec<f64> = readings.iter().map(|r| r.score.value()).collect();
    let greed_fear = MetricStats::from_values(&scores)?;

    let mut counts = vec![0usize; SentimentClass::iter().count()];
    for r in readings {
        counts[r.class.ordinal()] += 1;
    }
    let class_counts = SentimentClass::iter().zip(counts).collect();

    Some(SentimentSummary {
        current,
        greed_fear,
        current_vs_average: current.score.value() - greed_fear.mean,
        mood: MarketMood::from_score(current.score),
        class_counts,
        technical: TechnicalSummary::from_scores(technical),
    })
}

impl SentimentSummary {
    pub fn mean_score(&self) -> SentimentScore {
        SentimentScore::new(self.greed_fear.mean)
    }

    /// Most frequent class; ties go to the more fearful class.
    pub fn dominant_class(&self) -> Option<SentimentClass> {
        self.class_counts
            .iter()
            .filter(|(_, n)| *n > 0)
            .fold(None, |best: Option<(SentimentClass, usize)>, &(c, n)| match best {
                Some((_, bn)) if bn >= n => best,
                _ => Some((c, n)),
            })
            .map(|(c, _)| c)
    }
}
