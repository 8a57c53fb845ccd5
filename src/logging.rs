//! Logger installation for the binary
//!
//! `LOG_LEVEL` takes the level names of the service's original logger:
//! `debug`, `info`, `warn` and `error` map directly, `fatal` maps to
//! `error` and `panic` turns logging off. `trace` is accepted as well. Any
//! other non-empty value falls back to `debug`. Unset or empty means `info`.

use log::{info, LevelFilter};

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
/// Environment variable holding the service name logged at startup
pub const SERVICE_NAME_ENV: &str = "SERVICE_NAME";

/// Map a `LOG_LEVEL` value to a filter
pub fn level_filter(value: Option<&str>) -> LevelFilter {
    let value = value.map(str::trim).unwrap_or_default();
    match value.to_ascii_lowercase().as_str() {
        "" => LevelFilter::Info,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" | "fatal" => LevelFilter::Error,
        "panic" => LevelFilter::Off,
        _ => LevelFilter::Debug,
    }
}

/// Service name from `SERVICE_NAME`, defaulting to the package name
pub fn service_name(value: Option<String>) -> String {
    value
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Install `env_logger` and log the startup line with the service name as a
/// structured field
pub fn init() {
    let level = level_filter(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let service = service_name(std::env::var(SERVICE_NAME_ENV).ok());
    let version = env!("CARGO_PKG_VERSION");
    info!(service = service.as_str(), version = version; "Logger initialised");
}
