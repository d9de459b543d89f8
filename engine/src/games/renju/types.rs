use std::fmt;

/// Consecutive same-mark cells needed to win.
pub const WIN_COUNT: usize = 5;

pub const DEFAULT_BOARD_SIZE: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn glyph(&self) -> Option<char> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some('X'),
            Mark::Computer => Some('O'),
        }
    }

    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Human => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Human),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "Empty"),
            Mark::Human => write!(f, "Human"),
            Mark::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Row,
    Column,
    MainDiagonal,
    AntiDiagonal,
}

impl Direction {
    /// Scan order shared by win detection and the move heuristic.
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::MainDiagonal,
        Direction::AntiDiagonal,
    ];

    /// `(row_step, col_step)`.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Row => (0, 1),
            Direction::Column => (1, 0),
            Direction::MainDiagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
            Direction::MainDiagonal => "main diagonal",
            Direction::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Winning run in scan order, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinResult {
    cells: Vec<Position>,
    direction: Option<Direction>,
}

impl WinResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(direction: Direction, cells: Vec<Position>) -> Self {
        Self {
            cells,
            direction: Some(direction),
        }
    }

    pub fn winner_exists(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    HumanWon,
    ComputerWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingHumanMove,
    AwaitingComputerMove,
    GameOver(GameResult),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }
}
