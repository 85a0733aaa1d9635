//! Configuration module for the fear-gauge application.

// Can all be private now because we have a public re-export.
mod analysis;
mod catalog;
mod debug;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use analysis::{
    ClassThresholds,
    IndicatorWeights,
    NormalizationMethod,
    SENTIMENT,
    SentimentConfig,
    SignalWeights,
    TECHNICAL,
    TechnicalConfig,
};
pub use catalog::{Instrument, InstrumentCatalog};
pub use debug::DF;
pub use types::{Pct, SentimentScore};
