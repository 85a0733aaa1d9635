//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Per-bar indicator snapshots while classifying
    pub log_snapshots: bool,

    /// Series and catalog loading
    pub log_loading: bool,

    /// Per-instrument results during a catalog scan
    pub log_scan: bool,
}

pub const DF: LogFlags = LogFlags {
    log_performance: false,
    log_snapshots: false,
    log_loading: true,
    log_scan: false,
};
