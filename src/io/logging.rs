//! Log backend setup for the command-line tool

use crate::io::configuration::{DEFAULT_LOG_LEVEL, LOG_ENV, QUIET_LOG_LEVEL};
use env_logger::{Builder, Env};

/// Pick the default filter used when `RUST_LOG` is not set
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Build a logger that honours `RUST_LOG` and falls back to the given quietness
pub fn builder(quiet: bool) -> Builder {
    let env = Env::default().filter_or(LOG_ENV, default_filter(quiet));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None).format_target(false);
    builder
}

/// Install the global logger
///
/// Repeated calls are harmless; only the first installation takes effect.
pub fn init(quiet: bool) {
    if builder(quiet).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
