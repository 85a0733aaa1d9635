// Domain types and value objects
mod price_bar;
mod price_series;

// Re-export commonly used types to the world
pub use {price_bar::PriceBar, price_series::PriceSeries};
