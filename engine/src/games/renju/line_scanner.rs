//! Directional windows over the board, shared by win detection and the move heuristic.

use super::board::Board;
use super::types::{Direction, Mark, Position};

/// The `len` positions starting at `origin` and stepping along `direction`.
///
/// Callers pass origins from [`scan_origins`], which keeps the whole run on the
/// board; the anti-diagonal origin column must be at least `len - 1`.
pub fn run(origin: Position, direction: Direction, len: usize) -> Vec<Position> {
    let (row_step, col_step) = direction.delta();
    (0..len as isize)
        .map(|k| {
            Position::new(
                (origin.row as isize + row_step * k) as usize,
                (origin.col as isize + col_step * k) as usize,
            )
        })
        .collect()
}

/// Origins whose `len`-long run in `direction` stays in bounds, row-major.
pub fn scan_origins(direction: Direction, size: usize, len: usize) -> Vec<Position> {
    if len == 0 || len > size {
        return Vec::new();
    }
    let last_start = size - len + 1;

    let (rows, cols) = match direction {
        Direction::Row => (0..size, 0..last_start),
        Direction::Column => (0..last_start, 0..size),
        Direction::MainDiagonal => (0..last_start, 0..last_start),
        Direction::AntiDiagonal => (0..last_start, len - 1..size),
    };

    rows.flat_map(|row| cols.clone().map(move |col| Position::new(row, col)))
        .collect()
}

/// Every window of one direction, in scan order.
pub fn windows_in(
    direction: Direction,
    size: usize,
    len: usize,
) -> impl Iterator<Item = Vec<Position>> {
    scan_origins(direction, size, len)
        .into_iter()
        .map(move |origin| run(origin, direction, len))
}

/// Every window on the board: rows, columns, main diagonals, anti-diagonals.
pub fn windows(size: usize, len: usize) -> impl Iterator<Item = (Direction, Vec<Position>)> {
    Direction::ALL.into_iter().flat_map(move |direction| {
        windows_in(direction, size, len).map(move |window| (direction, window))
    })
}

/// Renders a window as `[*XO*]`, empty cells as `*`. Used for trace output.
pub fn pattern(board: &Board, window: &[Position]) -> String {
    let mut text = String::with_capacity(window.len() + 2);
    text.push('[');
    for &pos in window {
        let glyph = board
            .get(pos)
            .ok()
            .and_then(|mark| mark.glyph())
            .unwrap_or('*');
        text.push(glyph);
    }
    text.push(']');
    text
}

/// How many cells of `window` hold `mark`, or `None` when the window also
/// contains the other player's mark.
pub fn count_if_unblocked(board: &Board, window: &[Position], mark: Mark) -> Option<usize> {
    let mut count = 0;
    for &pos in window {
        match board.get(pos).ok()? {
            cell if cell == mark => count += 1,
            Mark::Empty => {}
            _ => return None,
        }
    }
    Some(count)
}
