mod board;
mod error;
pub mod line_scanner;
mod move_selector;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use error::EngineError;
pub use move_selector::{ComputerPlayer, MoveDecision, MoveReason, MoveSelector};
pub use session::{GameSession, TurnOutcome};
pub use types::{
    DEFAULT_BOARD_SIZE, Direction, GameResult, GameStatus, Mark, Position, WIN_COUNT, WinResult,
};
pub use win_detector::{check_win, find_winner};
