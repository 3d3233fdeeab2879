//! Constants and default values for LogScope

use std::path::PathBuf;

/// Default log root directory (relative to the working directory)
pub const LOGS_DIR: &str = "logs";

/// Default bind host for the HTTP server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Extension shared by every log file
pub const LOG_EXTENSION: &str = "log";

/// Environment variable overriding the log root
pub const ENV_LOG_DIR: &str = "LOGSCOPE_LOG_DIR";

/// Environment variable overriding the resolution policy
pub const ENV_POLICY: &str = "LOGSCOPE_POLICY";

/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "LOGSCOPE_HOST";

/// Environment variable overriding the HTTP port
pub const ENV_PORT: &str = "PORT";

/// Default config file names to search for (in priority order)
pub const CONFIG_FILES: &[&str] = &[
    "logscope.toml",
    "logscope.yaml",
    "logscope.yml",
    "logscope.json",
];

/// Get the default log root
pub fn default_log_dir() -> PathBuf {
    PathBuf::from(LOGS_DIR)
}

/// File name of a log under the exact naming convention
pub fn log_file_name(server: &str, date: &str) -> String {
    format!("{}_{}.{}", server, date, LOG_EXTENSION)
}

/// Placeholder line returned when a server has no log for a date
pub fn no_logs_message(server: &str, date: &str) -> String {
    format!("No logs found for {} on {}", server, date)
}
