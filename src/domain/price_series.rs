use {
    crate::{domain::PriceBar, errors::SeriesError},
    serde::Serialize,
};

/// Date-ordered daily bars for a single instrument.
/// Dates are strictly increasing; gaps (weekends, holidays) are allowed.
/// Once built the series is never mutated, so it can be shared across threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Validates ordering and per-bar price sanity before taking ownership.
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, SeriesError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(SeriesError::EmptySymbol);
        }

        for (index, bar) in bars.iter().enumerate() {
            Self::check_bar(index, bar)?;
            if index > 0 {
                let previous = bars[index - 1].date;
                if bar.date <= previous {
                    return Err(SeriesError::NonIncreasingDate {
                        index,
                        date: bar.date,
                        previous,
                    });
                }
            }
        }

        Ok(Self { symbol, bars })
    }

    fn check_bar(index: usize, bar: &PriceBar) -> Result<(), SeriesError> {
        let fields = [
            ("open", bar.open),
            ("high", bar.high),
            ("low", bar.low),
            ("close", bar.close),
        ];
        if let Some(&(field, value)) = fields
            .iter()
            .find(|(_, v)| !v.is_finite() || *v <= 0.0)
        {
            return Err(SeriesError::InvalidPrice {
                index,
                date: bar.date,
                field,
                value,
            });
        }

        let inside = |p: f64| p >= bar.low && p <= bar.high;
        if !inside(bar.open) || !inside(bar.close) {
            return Err(SeriesError::InconsistentRange {
                index,
                date: bar.date,
            });
        }
        Ok(())
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// The last `n` bars (or all of them when the series is shorter).
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        &self.bars[self.bars.len().saturating_sub(n)..]
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
