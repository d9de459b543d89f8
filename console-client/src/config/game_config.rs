use renju_engine::config::Validate;
use renju_engine::renju::{DEFAULT_BOARD_SIZE, WIN_COUNT};
use serde::{Deserialize, Serialize};

/// Columns are labelled with single letters.
pub const MAX_BOARD_SIZE: usize = 26;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: usize,
    pub human_first: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < WIN_COUNT || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                WIN_COUNT, MAX_BOARD_SIZE, self.board_size
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            human_first: true,
            seed: None,
        }
    }
}
