//! Provides utilities to initialize logging.
use std::env;

use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "SLIP10_SVC_LABEL";

/// Environment variable that adds source file names to log lines when set to `1`.
pub const LOG_FILE_ENVVAR: &str = "LOG_FILE";

/// Environment variable that adds line numbers to log lines when set to `1`.
pub const LOG_LINE_NUM_ENVVAR: &str = "LOG_LINE_NUM";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the service in logs.
    whoami: String,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set.
    pub const fn new(whoami: String) -> Self {
        Self { whoami }
    }

    /// Creates a new instance with the whoami string derived from the provided base
    /// name and the service label, if any.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// The whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(slip10)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Output goes to stderr so that stdout stays free for command output. Filtering
/// follows `RUST_LOG`.
pub fn init(config: LoggerConfig) {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    let log_file = env_flag(LOG_FILE_ENVVAR);
    let log_line_num = env_flag(LOG_LINE_NUM_ENVVAR);

    let stderr_sub = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(log_file)
                .with_line_number(log_line_num),
        )
        .with_filter(filt);

    // `try_init` so repeated calls (e.g. from several tests) keep the first subscriber.
    if tracing_subscriber::registry()
        .with(stderr_sub)
        .try_init()
        .is_ok()
    {
        info!(whoami = %config.whoami, "logging started");
    }
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    whoami_with_label(base, get_service_label_from_env().as_deref())
}

fn whoami_with_label(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v == "1")
}
