use super::error::EngineError;
use super::types::{Mark, Position, WIN_COUNT};

/// Square playing field, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < WIN_COUNT {
            return Err(EngineError::BoardTooSmall {
                size,
                min: WIN_COUNT,
            });
        }

        Ok(Self {
            cells: vec![Mark::Empty; size * size],
            size,
        })
    }

    /// Builds a board from text rows: `X` human, `O` computer, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size).unwrap();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), size, "row {} has wrong width", row);
            for (col, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::Human,
                    'O' => Mark::Computer,
                    _ => Mark::Empty,
                };
                board.set(Position::new(row, col), mark).unwrap();
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Result<usize, EngineError> {
        if !self.contains(pos) {
            return Err(EngineError::OutOfBounds {
                position: pos,
                size: self.size,
            });
        }
        Ok(pos.row * self.size + pos.col)
    }

    pub fn get(&self, pos: Position) -> Result<Mark, EngineError> {
        let index = self.index(pos)?;
        Ok(self.cells[index])
    }

    /// Overwrites unconditionally; occupancy is the caller's concern.
    pub fn set(&mut self, pos: Position, mark: Mark) -> Result<(), EngineError> {
        let index = self.index(pos)?;
        self.cells[index] = mark;
        Ok(())
    }

    pub fn is_free(&self, pos: Position) -> Result<bool, EngineError> {
        Ok(self.get(pos)? == Mark::Empty)
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Mark::Empty)
    }

    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.cells[pos.row * self.size + pos.col] == Mark::Empty)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }
}
