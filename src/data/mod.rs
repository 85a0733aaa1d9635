mod loader;

pub use loader::{load_catalog, load_catalog_series, load_config, load_series};
