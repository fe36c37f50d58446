mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "ECS_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CONFIG_DIRECTORY: &str = ".ecs";
const DEFAULT_SHELL_ORIGIN: &str = "https://bcombuddy.netlify.app";
const DEFAULT_FALLBACK_ON_INVALID_TOKEN: bool = true;
const DEFAULT_STORAGE_KEY: &str = "user_data";
const DEFAULT_STORAGE_DIRECTORY: &str = "storage";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
