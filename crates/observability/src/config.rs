use std::env;

/// Filter directive env var (shared with `tracing_subscriber::EnvFilter`).
pub const FILTER_ENV: &str = "RUST_LOG";

/// Output format env var: `json` or `pretty`.
pub const FORMAT_ENV: &str = "CLASSROLL_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a format name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,classroll_core=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Raw format value that failed to parse; reported once logging is up.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(FILTER_ENV).ok(), env::var(FORMAT_ENV).ok())
    }

    /// Build from raw variable values. Empty values count as unset.
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = format.filter(|f| !f.trim().is_empty()) {
            match LogFormat::parse(&raw) {
                Some(format) => config.format = format,
                None => config.rejected_format = Some(raw),
            }
        }

        config
    }
}
