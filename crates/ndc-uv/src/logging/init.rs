use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` name one.
const FALLBACK_FILTER: &str = "info";

/// Where the diagnostics of `compose` and `try_normalize_uv` end up.
///
/// `env_filter` takes `env_logger` directives; `"ndc_uv=debug"` shows which
/// helper snippets `compose` skipped and why a checked normalization was
/// rejected.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Directives to apply: the explicit filter, else `rust_log`, else `info`.
    fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| FALLBACK_FILTER.to_owned())
    }
}

static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the crate's `log` records.
///
/// First call wins. A logger the host installed earlier is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init();

        match installed {
            Ok(()) => log::debug!("ndc-uv logging on ({filter})"),
            Err(_) => log::debug!("host logger already installed; ndc-uv filter {filter} ignored"),
        }
    });
}
