//! Closed-form indicator kernels over a window of bars.
//! Each function reads only the slice it is given.

use {
    crate::{
        config::Pct,
        domain::PriceBar,
        utils::{is_flat, mean_and_sample_stddev},
    },
    itertools::Itertools,
    serde::{Deserialize, Serialize},
};

/// Simple close-to-close returns between consecutive bars of the window.
pub fn returns(window: &[PriceBar]) -> Vec<f64> {
    window
        .iter()
        .tuple_windows()
        .map(|(prev, cur)| cur.return_from(prev.close))
        .collect()
}

/// Sample standard deviation of the window's returns.
/// Zero when fewer than two returns exist.
pub fn volatility(window: &[PriceBar]) -> f64 {
    mean_and_sample_stddev(&returns(window)).1
}

/// Root mean square of the negative returns (zero-floored semi-deviation).
/// Only falling closes contribute, so a higher latest close never raises it.
pub fn downside_volatility(window: &[PriceBar]) -> f64 {
    let rets = returns(window);
    if rets.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = rets.iter().map(|r| r.min(0.0).powi(2)).sum();
    (sum_sq / rets.len() as f64).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
}

impl BollingerBands {
    /// Moving average of closes +/- k sample standard deviations.
    pub fn calculate(window: &[PriceBar], k: f64) -> Self {
        let closes: Vec<f64> = window.iter().map(|b| b.close).collect();
        let (middle, sd) = mean_and_sample_stddev(&closes);
        let band = k * sd;
        Self {
            middle,
            upper: middle + band,
            lower: middle - band,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// True when the bands have collapsed onto the average.
    pub fn is_collapsed(&self) -> bool {
        is_flat(self.width(), self.middle)
    }

    /// Where `close` sits between the bands: 0 = lower, 1 = upper.
    /// Collapsed bands give the neutral 0.5 instead of dividing by zero.
    pub fn position(&self, close: f64) -> Pct {
        if self.is_collapsed() {
            return Pct::HALF;
        }
        Pct::new((close - self.lower) / self.width())
    }

    /// Band width as a fraction of the moving average.
    pub fn width_ratio(&self) -> f64 {
        if self.middle.abs() > f64::EPSILON {
            self.width() / self.middle
        } else {
            0.0
        }
    }
}

/// True range for every bar of the window.
/// The first bar has no previous close inside the window, so it uses High - Low.
pub fn true_ranges(window: &[PriceBar]) -> Vec<f64> {
    window
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let prev_close = (i > 0).then(|| window[i - 1].close);
            bar.true_range(prev_close)
        })
        .collect()
}

/// Average True Range: mean of the window's true ranges.
pub fn atr(window: &[PriceBar]) -> f64 {
    let trs = true_ranges(window);
    if trs.is_empty() {
        return 0.0;
    }
    trs.iter().sum::<f64>() / trs.len() as f64
}
