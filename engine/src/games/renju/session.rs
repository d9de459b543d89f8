use crate::games::SessionRng;

use super::board::Board;
use super::error::EngineError;
use super::move_selector::{ComputerPlayer, MoveDecision, MoveSelector};
use super::types::{GameResult, GameStatus, Mark, Position, WinResult};
use super::win_detector::find_winner;

/// Everything a shell needs to redraw after one human click.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub board: Board,
    pub human_move: Position,
    pub computer_move: Option<MoveDecision>,
    /// Owner and cells of the winning run, if the game was won this turn.
    pub winner: Option<(Mark, WinResult)>,
    pub draw: bool,
    pub status: GameStatus,
}

/// One human-versus-computer game on a single board, reused across rematches.
pub struct GameSession<P: ComputerPlayer = MoveSelector> {
    board: Board,
    computer: P,
    human_first: bool,
    status: GameStatus,
    winning_line: Option<(Mark, WinResult)>,
    last_computer_move: Option<MoveDecision>,
}

impl GameSession<MoveSelector> {
    pub fn new(size: usize, human_first: bool, rng: SessionRng) -> Result<Self, EngineError> {
        crate::log!("Computer seed: {}", rng.seed());
        Self::with_player(size, human_first, MoveSelector::new(rng))
    }
}

impl<P: ComputerPlayer> GameSession<P> {
    pub fn with_player(size: usize, human_first: bool, computer: P) -> Result<Self, EngineError> {
        let mut session = Self {
            board: Board::new(size)?,
            computer,
            human_first,
            status: GameStatus::AwaitingHumanMove,
            winning_line: None,
            last_computer_move: None,
        };
        session.start()?;
        Ok(session)
    }

    fn start(&mut self) -> Result<(), EngineError> {
        self.board.reset();
        self.winning_line = None;
        self.last_computer_move = None;
        self.status = GameStatus::AwaitingHumanMove;

        if !self.human_first {
            let decision = self.computer.choose_first_move(&mut self.board)?;
            self.last_computer_move = Some(decision);
        }

        crate::log!(
            "New game started with playing field {}x{}{}",
            self.board.size(),
            self.board.size(),
            if self.human_first { "" } else { ", computer made the first turn" }
        );
        Ok(())
    }

    /// Clears the board and swaps who moves first.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        self.human_first = !self.human_first;
        self.start()
    }

    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<TurnOutcome, EngineError> {
        let pos = Position::new(row, col);

        // Bounds first so an off-board click on a finished game still reads as such.
        let free = self.board.is_free(pos)?;
        if self.status.is_over() {
            return Err(EngineError::GameAlreadyOver);
        }
        if !free {
            return Err(EngineError::CellOccupied(pos));
        }

        self.board.set(pos, Mark::Human)?;
        crate::log!("Human turn is {}", pos);

        let mut computer_move = None;
        if !self.resolve(Mark::Human) {
            self.status = GameStatus::AwaitingComputerMove;
            let decision = match self.computer.choose_move(&mut self.board) {
                Ok(decision) => decision,
                Err(e) => {
                    // Take the human mark back so the board matches the last good state.
                    self.board.set(pos, Mark::Empty)?;
                    self.status = GameStatus::AwaitingHumanMove;
                    crate::log_error!("Computer could not answer {}: {}", pos, e);
                    return Err(e);
                }
            };
            computer_move = Some(decision.clone());
            self.last_computer_move = Some(decision);
            self.resolve(Mark::Computer);
        }

        Ok(TurnOutcome {
            board: self.board.clone(),
            human_move: pos,
            computer_move,
            winner: self.winning_line.clone(),
            draw: self.status == GameStatus::GameOver(GameResult::Draw),
            status: self.status,
        })
    }

    /// Updates the status after `mark` moved; returns whether the game ended.
    fn resolve(&mut self, mark: Mark) -> bool {
        let result = find_winner(&self.board, mark);
        if result.winner_exists() {
            crate::log!("{} wins: {:?}", mark, result.cells());
            self.status = GameStatus::GameOver(match mark {
                Mark::Computer => GameResult::ComputerWon,
                _ => GameResult::HumanWon,
            });
            self.winning_line = Some((mark, result));
            return true;
        }

        if !self.board.has_empty_cell() {
            crate::log!("Nobody wins - draw");
            self.status = GameStatus::GameOver(GameResult::Draw);
            return true;
        }

        self.status = GameStatus::AwaitingHumanMove;
        false
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Mark, EngineError> {
        self.board.get(Position::new(row, col))
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn human_first(&self) -> bool {
        self.human_first
    }

    pub fn winning_line(&self) -> Option<&(Mark, WinResult)> {
        self.winning_line.as_ref()
    }

    pub fn last_computer_move(&self) -> Option<&MoveDecision> {
        self.last_computer_move.as_ref()
    }
}
