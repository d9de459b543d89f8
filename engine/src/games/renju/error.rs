use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    OutOfBounds { position: Position, size: usize },
    CellOccupied(Position),
    /// The computer was asked to move with nowhere to go. Draw detection
    /// runs before every computer turn, so this is a logic error.
    AllCellsFilled,
    BoardTooSmall { size: usize, min: usize },
    GameAlreadyOver,
}

impl EngineError {
    /// Errors a shell should answer by asking the human again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::OutOfBounds { .. }
                | EngineError::CellOccupied(_)
                | EngineError::GameAlreadyOver
        )
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::OutOfBounds { position, size } => write!(
                f,
                "Invalid row or column indexes: row = {}, column = {}, size = {}",
                position.row, position.col, size
            ),
            EngineError::CellOccupied(position) => write!(f, "Cell {} is not empty", position),
            EngineError::AllCellsFilled => {
                write!(f, "All cells are filled, the draw state was not detected")
            }
            EngineError::BoardTooSmall { size, min } => write!(
                f,
                "Size of playing field is small: size = {}, minimum requirement: {}",
                size, min
            ),
            EngineError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for EngineError {}
