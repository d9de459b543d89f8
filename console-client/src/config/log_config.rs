use renju_engine::config::Validate;
use renju_engine::logger::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    #[serde(default)]
    pub use_prefix: bool,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            use_prefix: false,
        }
    }
}
