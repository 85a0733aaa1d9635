mod tables;
pub mod ui_text;

pub use tables::{
    ScanRow, bars_table, class_counts_table, correlation_table, insights_text, readings_table,
    scan_table, summary_table, technical_table, volatility_table,
};
