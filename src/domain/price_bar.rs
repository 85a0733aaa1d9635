use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

// One trading day for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    // A constructor for convenience
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        PriceBar {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Intrabar range (High - Low)
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// True range against the previous close: max(H-L, |H-prevC|, |L-prevC|).
    /// Without a previous close it degrades to the intrabar range.
    pub fn true_range(&self, prev_close: Option<f64>) -> f64 {
        match prev_close {
            Some(pc) => self
                .range()
                .max((self.high - pc).abs())
                .max((self.low - pc).abs()),
            None => self.range(),
        }
    }

    /// Simple return relative to the previous close.
    #[inline]
    pub fn return_from(&self, prev_close: f64) -> f64 {
        self.close / prev_close - 1.0
    }

    /// (Close - Open) * Volume. Signed money flow for the day.
    pub fn money_flow(&self) -> f64 {
        (self.close - self.open) * self.volume as f64
    }
}
