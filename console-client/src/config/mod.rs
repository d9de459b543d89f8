mod game_config;
mod log_config;
mod main_config;

pub use game_config::{GameConfig, MAX_BOARD_SIZE};
pub use log_config::LogConfig;
pub use main_config::{Config, get_config_manager};
