//! Fixed constants (Immutable Blueprints)

// Score scale
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;
pub const SCORE_MIDPOINT: f64 = (SCORE_MIN + SCORE_MAX) / 2.0;

/// Smallest rolling window that yields at least one return.
pub const MIN_WINDOW: usize = 2;

/// Annualization factor for daily volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

pub mod mood {
    /// Current score above this reads as an overheated market.
    pub const OVERHEATED_ABOVE: f64 = 70.0;
    /// Current score below this reads as an undervalued market.
    pub const UNDERVALUED_BELOW: f64 = 30.0;
}

pub mod cli {
    /// Rows shown by `classify` when no --tail is given.
    pub const DEFAULT_TAIL: usize = 30;
}
