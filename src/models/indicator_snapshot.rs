use {
    crate::{
        analysis::indicators::{self, BollingerBands},
        config::Pct,
        domain::PriceBar,
    },
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Raw indicator readings for the last bar of a window.
/// Recomputed on every pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Sample std-dev of close-to-close returns
    pub volatility: f64,
    /// RMS of the negative returns only
    pub downside_volatility: f64,
    pub bollinger: BollingerBands,
    /// 0 = on the lower band, 1 = on the upper band
    pub bollinger_position: Pct,
    /// Average True Range, in price units
    pub atr: f64,
    /// Close of the bar the snapshot belongs to
    pub close: f64,
}

impl fmt::Display for IndicatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vol={:.4}|down={:.4}|bb={:.3}|atr={:.4}",
            self.volatility,
            self.downside_volatility,
            self.bollinger_position.value(),
            self.atr,
        )
    }
}

impl IndicatorSnapshot {
    /// Calculates the snapshot for the LAST bar of `window`.
    /// Returns None for an empty window.
    pub(crate) fn calculate(window: &[PriceBar], band_multiplier: f64) -> Option<Self> {
        let current = window.last()?;
        let bollinger = BollingerBands::calculate(window, band_multiplier);

        Some(Self {
            volatility: indicators::volatility(window),
            downside_volatility: indicators::downside_volatility(window),
            bollinger,
            bollinger_position: bollinger.position(current.close),
            atr: indicators::atr(window),
            close: current.close,
        })
    }
}
