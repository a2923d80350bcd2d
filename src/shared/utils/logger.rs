use log::{debug, error, info, warn};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Install the `env_logger` backend. `RUST_LOG` overrides the defaults.
///
/// Only the first call does anything. A host that already installed its own
/// logger keeps it.
pub fn init_logger() {
    INIT.call_once(|| {
        let installed = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("cinevault", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_env("RUST_LOG")
            .format_timestamp_secs()
            .format_target(false)
            .try_init()
            .is_ok();

        if installed {
            info!("Logger ready");
        }
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// One-line log formats shared by the catalog's layers
pub struct LogContext;

impl LogContext {
    pub fn db_operation(operation: &str, table: &str, elapsed_ms: u64) {
        debug!("DB: {} {} ({}ms)", operation, table, elapsed_ms);
    }

    pub fn api_call(provider: &str, endpoint: &str, outcome: &str, elapsed_ms: u64) {
        info!("API: {} {} -> {} ({}ms)", provider, endpoint, outcome, elapsed_ms);
    }

    pub fn import_progress(tmdb_id: i32, title: &str, outcome: &str) {
        info!("Import: TMDB {} '{}' {}", tmdb_id, title, outcome);
    }

    pub fn search_operation(query: &str, results: usize) {
        info!("Search: '{}' -> {} results", query, results);
    }

    pub fn slow_operation(operation: &str, elapsed_ms: u64) {
        warn!("Slow: {} took {}ms", operation, elapsed_ms);
    }

    /// Log an error followed by every cause in its `source()` chain
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        let mut message = format!("{}: {}", context, error);
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!(" (caused by: {})", cause));
            source = cause.source();
        }
        error!("{}", message);
    }
}

/// Wall-clock timer for a named operation
pub struct TimedOperation {
    start: Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Log the duration with a short summary and return it
    pub fn finish_with_info(self, summary: &str) -> u64 {
        let elapsed = self.elapsed_ms();
        info!("{} finished in {}ms ({})", self.operation, elapsed, summary);
        elapsed
    }
}
