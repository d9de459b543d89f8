use crate::games::SessionRng;

use super::board::Board;
use super::error::EngineError;
use super::line_scanner;
use super::types::{Direction, Mark, Position, WIN_COUNT};

/// Why the computer picked a cell. Lets a shell explain the move without the
/// engine formatting any text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReason {
    Opening,
    Pattern {
        /// Whose marks the window was counted for: `Computer` extends its own
        /// line, `Human` blocks.
        mark: Mark,
        threat: usize,
        direction: Direction,
        window: Vec<Position>,
    },
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDecision {
    pub position: Position,
    pub reason: MoveReason,
}

/// Anything that can play the computer's side. The human side is driven by
/// shell input and has no counterpart here.
pub trait ComputerPlayer {
    /// Picks a cell and places the computer's mark on it.
    fn choose_move(&mut self, board: &mut Board) -> Result<MoveDecision, EngineError>;

    /// Opening move when the computer starts.
    fn choose_first_move(&mut self, board: &mut Board) -> Result<MoveDecision, EngineError>;
}

pub struct MoveSelector {
    rng: SessionRng,
}

impl MoveSelector {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    fn try_patterns(&mut self, board: &Board) -> Result<Option<MoveDecision>, EngineError> {
        for threat in (1..WIN_COUNT).rev() {
            for mark in [Mark::Computer, Mark::Human] {
                if let Some(decision) = self.try_threat(board, mark, threat)? {
                    return Ok(Some(decision));
                }
            }
        }
        Ok(None)
    }

    fn try_threat(
        &mut self,
        board: &Board,
        mark: Mark,
        threat: usize,
    ) -> Result<Option<MoveDecision>, EngineError> {
        for direction in Direction::ALL {
            crate::log_trace!(
                "Trying {} pattern: {} empty and {} not empty cells for {}",
                direction,
                WIN_COUNT - threat,
                threat,
                mark
            );

            let matched = line_scanner::windows_in(direction, board.size(), WIN_COUNT)
                .find(|window| line_scanner::count_if_unblocked(board, window, mark) == Some(threat));

            if let Some(window) = matched {
                crate::log_debug!(
                    "Found {} empty and {} not empty cells by {}: {:?} {}",
                    WIN_COUNT - threat,
                    threat,
                    direction,
                    window,
                    line_scanner::pattern(board, &window)
                );
                let position = self.pick_cell_in_window(board, &window)?;
                return Ok(Some(MoveDecision {
                    position,
                    reason: MoveReason::Pattern {
                        mark,
                        threat,
                        direction,
                        window,
                    },
                }));
            }
        }
        Ok(None)
    }

    /// Takes an empty cell next to the first occupied cell that has one. Inside
    /// the window a coin decides which neighbour is tried first.
    fn pick_cell_in_window(
        &mut self,
        board: &Board,
        window: &[Position],
    ) -> Result<Position, EngineError> {
        let is_empty = |pos: Position| board.get(pos) == Ok(Mark::Empty);
        let last = window.len().saturating_sub(1);

        for (i, &pos) in window.iter().enumerate() {
            if is_empty(pos) {
                continue;
            }

            let candidates = if i == 0 {
                [window.get(1).copied(), None]
            } else if i == last {
                [Some(window[i - 1]), None]
            } else if self.rng.random_bool() {
                [Some(window[i + 1]), Some(window[i - 1])]
            } else {
                [Some(window[i - 1]), Some(window[i + 1])]
            };

            if let Some(cell) = candidates.into_iter().flatten().find(|&cell| is_empty(cell)) {
                crate::log_trace!(
                    "The best cell is {} for pattern {:?} {}",
                    cell,
                    window,
                    line_scanner::pattern(board, window)
                );
                return Ok(cell);
            }
        }

        crate::log_error!("All cells are filled: {:?}", window);
        Err(EngineError::AllCellsFilled)
    }

    fn random_cell(&mut self, board: &Board) -> Result<Position, EngineError> {
        let empty_cells = board.empty_cells();
        self.rng
            .choose(&empty_cells)
            .copied()
            .ok_or(EngineError::AllCellsFilled)
    }
}

impl ComputerPlayer for MoveSelector {
    fn choose_move(&mut self, board: &mut Board) -> Result<MoveDecision, EngineError> {
        let decision = match self.try_patterns(board)? {
            Some(decision) => decision,
            None => {
                let position = self.random_cell(board)?;
                crate::log!("Computer random turn: {}", position);
                MoveDecision {
                    position,
                    reason: MoveReason::Random,
                }
            }
        };

        board.set(decision.position, Mark::Computer)?;
        crate::log!("Computer turn is {}", decision.position);
        Ok(decision)
    }

    fn choose_first_move(&mut self, board: &mut Board) -> Result<MoveDecision, EngineError> {
        let center = board.size() / 2;
        let position = Position::new(center, center);
        board.set(position, Mark::Computer)?;
        crate::log!("Computer first turn: {}", position);
        Ok(MoveDecision {
            position,
            reason: MoveReason::Opening,
        })
    }
}
