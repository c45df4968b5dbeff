mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod monitor_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use monitor_config::MonitorConfig;

const DEFAULT_HOST: &str = "http://127.0.0.1:8052";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
