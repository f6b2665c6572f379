//! Tracing and logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide observability with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}

/// Environment-driven configuration.
pub mod config;

/// Tracing subscriber setup (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
