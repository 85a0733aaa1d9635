mod indicator_snapshot;
mod sentiment;
mod technical_sentiment;

pub use {
    indicator_snapshot::IndicatorSnapshot,
    sentiment::{MarketMood, SentimentClass, SentimentReading, SentimentTrend},
    technical_sentiment::{SentimentBand, TechnicalSentiment},
};
