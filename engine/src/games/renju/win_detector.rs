use super::board::Board;
use super::line_scanner;
use super::types::{Direction, Mark, WIN_COUNT, WinResult};

/// First run of `WIN_COUNT` cells all holding `mark`, scanning rows, columns,
/// main diagonals and anti-diagonals in that order.
pub fn find_winner(board: &Board, mark: Mark) -> WinResult {
    if mark == Mark::Empty {
        return WinResult::none();
    }

    for direction in Direction::ALL {
        crate::log_trace!("Try to find winner in {}s: is {} winner?", direction, mark);
        if let Some(result) = find_winner_in(board, mark, direction) {
            crate::log_debug!("Winner is {}. By {} {:?}", mark, direction, result.cells());
            return result;
        }
    }

    crate::log_trace!("Winner not found for {}", mark);
    WinResult::none()
}

fn find_winner_in(board: &Board, mark: Mark, direction: Direction) -> Option<WinResult> {
    line_scanner::windows_in(direction, board.size(), WIN_COUNT)
        .find(|window| window.iter().all(|&pos| board.get(pos) == Ok(mark)))
        .map(|window| WinResult::new(direction, window))
}

/// Either player's winning run, human first.
pub fn check_win(board: &Board) -> Option<(Mark, WinResult)> {
    [Mark::Human, Mark::Computer].into_iter().find_map(|mark| {
        let result = find_winner(board, mark);
        result.winner_exists().then_some((mark, result))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::renju::types::Position;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_four_in_a_row_is_not_a_win_five_is() {
        let mut board = Board::new(5).unwrap();
        for col in 0..4 {
            board.set(p(0, col), Mark::Human).unwrap();
        }
        assert!(!find_winner(&board, Mark::Human).winner_exists());

        board.set(p(0, 4), Mark::Human).unwrap();
        let result = find_winner(&board, Mark::Human);
        assert_eq!(result.cells(), &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(0, 4)]);
        assert_eq!(result.direction(), Some(Direction::Row));
        assert!(!find_winner(&board, Mark::Computer).winner_exists());
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows(&[
            "......", "...O..", "...O..", "...O..", "...O..", "...O..",
        ]);
        let result = find_winner(&board, Mark::Computer);
        assert_eq!(result.direction(), Some(Direction::Column));
        assert_eq!(result.cells(), &[p(1, 3), p(2, 3), p(3, 3), p(4, 3), p(5, 3)]);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_rows(&[
            "......", ".X....", "..X...", "...X..", "....X.", ".....X",
        ]);
        let result = find_winner(&board, Mark::Human);
        assert_eq!(result.direction(), Some(Direction::MainDiagonal));
        assert_eq!(result.cells(), &[p(1, 1), p(2, 2), p(3, 3), p(4, 4), p(5, 5)]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows(&[
            ".....O", "....O.", "...O..", "..O...", ".O....", "......",
        ]);
        let result = find_winner(&board, Mark::Computer);
        assert_eq!(result.direction(), Some(Direction::AntiDiagonal));
        assert_eq!(result.cells(), &[p(0, 5), p(1, 4), p(2, 3), p(3, 2), p(4, 1)]);
    }

    #[test]
    fn test_six_in_a_row_reports_first_five() {
        let board = Board::from_rows(&[
            "......", "XXXXXX", "......", "......", "......", "......",
        ]);
        let result = find_winner(&board, Mark::Human);
        assert_eq!(result.cells().len(), WIN_COUNT);
        assert_eq!(result.cells()[0], p(1, 0));
    }

    #[test]
    fn test_rows_are_reported_before_columns() {
        let board = Board::from_rows(&["X....", "X....", "X....", "X....", "XXXXX"]);
        let result = find_winner(&board, Mark::Human);
        assert_eq!(result.direction(), Some(Direction::Row));
        assert_eq!(result.cells()[0], p(4, 0));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = Board::from_rows(&["XXOXX", ".....", ".....", ".....", "....."]);
        assert!(!find_winner(&board, Mark::Human).winner_exists());
    }

    #[test]
    fn test_full_board_without_run_is_a_draw() {
        let board = Board::from_rows(&["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"]);
        assert!(!find_winner(&board, Mark::Human).winner_exists());
        assert!(!find_winner(&board, Mark::Computer).winner_exists());
        assert!(check_win(&board).is_none());
        assert!(!board.has_empty_cell());
    }

    #[test]
    fn test_winner_cells_all_hold_the_mark() {
        let board = Board::from_rows(&[
            "O.....X", ".O...X.", "..O.X..", "...X...", "..X.O..", ".X...O.", "X......",
        ]);
        for mark in [Mark::Human, Mark::Computer] {
            let result = find_winner(&board, mark);
            if result.winner_exists() {
                assert_eq!(result.cells().len(), WIN_COUNT);
                assert!(result.cells().iter().all(|&pos| board.get(pos) == Ok(mark)));
            }
        }
        assert!(find_winner(&board, Mark::Human).winner_exists());
        assert!(!find_winner(&board, Mark::Computer).winner_exists());
    }

    #[test]
    fn test_scanning_twice_gives_same_result() {
        let board = Board::from_rows(&["OOOOO", "XXXX.", ".....", ".....", "....."]);
        let snapshot = board.clone();
        assert_eq!(find_winner(&board, Mark::Computer), find_winner(&board, Mark::Computer));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = Board::new(5).unwrap();
        assert!(!find_winner(&board, Mark::Empty).winner_exists());
    }

    #[test]
    fn test_check_win_names_the_owner() {
        let board = Board::from_rows(&["OOOOO", "XXXX.", ".....", ".....", "....."]);
        let (mark, result) = check_win(&board).unwrap();
        assert_eq!(mark, Mark::Computer);
        assert_eq!(result.cells().len(), WIN_COUNT);
    }
}
