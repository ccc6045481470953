//! Tracing-backed logging facade.
//!
//! Commands log through [`Logger`] rather than calling `tracing` macros
//! directly, so dry-run output and stage banners stay uniform across
//! subcommands.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter comes from the `SALTERN_LOG` environment variable when set,
/// otherwise `debug` in verbose mode and `info` by default.  Safe to call
/// more than once; later calls are no-ops.
pub fn init_subscriber(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env("SALTERN_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Structured logger with dry-run awareness.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// `true` when verbose output was requested.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Log a stage header (major step).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "saltern::stage", "==> {msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed unless verbose or filtered in).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "saltern::dry_run", "[dry run] {msg}");
    }
}
