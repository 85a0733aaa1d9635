use crate::models::{MarketMood, SentimentBand, SentimentClass};

pub const TITLE_LIVE: &str = "Live Greed-Fear";
pub const TITLE_READINGS: &str = "Greed-Fear Index";
pub const TITLE_VOLATILITY: &str = "Volatility Metrics";
pub const TITLE_SUMMARY: &str = "Summary Statistics";
pub const TITLE_INSIGHTS: &str = "Key Insights";
pub const TITLE_CORRELATION: &str = "Correlation Matrix";
pub const TITLE_TECHNICAL: &str = "Technical Sentiment";
pub const TITLE_SENTIMENT_ANALYSIS: &str = "Sentiment Analysis";
pub const TITLE_PSYCHOLOGY: &str = "Market Psychology";
pub const TITLE_SCAN: &str = "Catalog Scan";

pub const NO_READINGS: &str = "No readings: the series is shorter than one window.";
pub const NO_TECHNICAL: &str = "Not enough history for a technical sentiment score.";

/// One-line interpretation shown next to a class.
pub fn class_description(class: SentimentClass) -> &'static str {
    match class {
        SentimentClass::ExtremeGreed => "Market may be overextended",
        SentimentClass::Greed => "Bullish sentiment dominates",
        SentimentClass::Neutral => "Balanced market sentiment",
        SentimentClass::Fear => "Bearish sentiment present",
        SentimentClass::ExtremeFear => "Market may be oversold",
    }
}

pub fn mood_description(mood: MarketMood) -> &'static str {
    match mood {
        MarketMood::Overheated => "Current reading well above the greed line",
        MarketMood::Balanced => "Current reading inside the balanced band",
        MarketMood::Undervalued => "Current reading well below the fear line",
    }
}

pub fn band_description(band: SentimentBand) -> &'static str {
    match band {
        SentimentBand::VeryPositive => "Strong bullish technical signals",
        SentimentBand::Positive => "Moderate bullish signals",
        SentimentBand::Neutral => "Mixed technical signals",
        SentimentBand::Negative => "Bearish technical signals",
        SentimentBand::VeryNegative => "Strong bearish signals",
    }
}
