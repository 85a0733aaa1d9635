use {chrono::NaiveDate, thiserror::Error};

/// Errors surfaced by the sentiment classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SentimentError {
    /// The series holds fewer bars than one rolling window.
    #[error("Insufficient data: need at least {required} bars, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// The configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Reasons a `SentimentConfig` is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window must be at least {min}, got {window}")]
    WindowTooSmall { window: usize, min: usize },

    #[error("band multiplier must be a positive finite number, got {0}")]
    NonPositiveBandMultiplier(f64),

    #[error("weight `{name}` must be a non-negative finite number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("indicator weights sum to zero")]
    ZeroWeightSum,

    #[error("z-score clip must be a positive finite number, got {0}")]
    InvalidClip(f64),

    #[error("thresholds must be strictly increasing, got {0:?}")]
    UnorderedThresholds([f64; 4]),

    #[error("threshold {value} lies outside the score range [{min}, {max}]")]
    ThresholdOutOfRange { value: f64, min: f64, max: f64 },

    #[error("neutral band [{fear}, {greed}] does not contain the midpoint {midpoint}")]
    NeutralBandMissesMidpoint { fear: f64, greed: f64, midpoint: f64 },
}

/// Reasons a run of bars cannot form a `PriceSeries`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("series symbol is empty")]
    EmptySymbol,

    #[error("bar {index} dated {date} does not follow {previous}")]
    NonIncreasingDate {
        index: usize,
        date: NaiveDate,
        previous: NaiveDate,
    },

    #[error("bar {index} dated {date} has a non-positive or non-finite {field}: {value}")]
    InvalidPrice {
        index: usize,
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },

    #[error("bar {index} dated {date} has open/close outside its low..high range")]
    InconsistentRange { index: usize, date: NaiveDate },
}

/// Problems with the instrument catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("catalog entry {0} has an empty symbol")]
    EmptySymbol(usize),

    #[error("symbol `{0}` appears more than once in the catalog")]
    DuplicateSymbol(String),

    #[error("symbol `{0}` is not in the catalog")]
    UnknownSymbol(String),
}
