use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;

/// Variable read before `RUST_LOG`, so the shim's verbosity can be raised
/// without touching the host's own filter.
pub const ENV_LOG: &str = "GLES_COMPAT_LOG";

/// How the fallback `env_logger` is set up.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives, e.g. `"gles_compat_core=debug"` to see
    /// activations and shader rewrites. Wins over the environment.
    pub filter: Option<String>,
    /// Used when neither `filter` nor the environment names one.
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            // Per-draw diagnostics are noisy; only problems by default.
            fallback_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter directives to install, looking up environment variables
    /// through `lookup`.
    pub fn directives<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        self.filter
            .clone()
            .or_else(|| lookup(ENV_LOG))
            .or_else(|| lookup("RUST_LOG"))
            .filter(|directives| !directives.trim().is_empty())
            .unwrap_or_else(|| self.fallback_level.to_string().to_lowercase())
    }
}

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Installs `env_logger` as the global logger unless something already is.
///
/// Returns whether this call installed it. A host that set up its own `log`
/// backend keeps it and the shim's records go there.
pub fn init_logging(config: LoggingConfig) -> bool {
    if INSTALLED.swap(true, Ordering::AcqRel) {
        return false;
    }

    let directives = config.directives(|key| std::env::var(key).ok());
    let installed = env_logger::Builder::new()
        .parse_filters(&directives)
        .write_style(config.write_style)
        .try_init()
        .is_ok();
    if installed {
        log::debug!("logging to stderr with filter {directives:?}");
    }
    installed
}
