// Indicator maths, sentiment classification and the reports built on top
pub mod correlation;
pub mod indicators;
pub mod metrics;
mod normalize;
pub mod sentiment;
pub mod summary;
pub mod technical_sentiment;
pub mod volatility_metrics;

pub use {
    correlation::{CorrelationMatrix, correlation_matrix},
    metrics::{MetricColumn, MetricRow, MetricStats, describe, metric_rows},
    sentiment::{SentimentClassifier, SentimentIter, classify_series},
    summary::{SentimentSummary, TechnicalSummary, summarize},
    technical_sentiment::technical_sentiment,
    volatility_metrics::{VolatilityMetrics, volatility_metrics},
};
