use std::fmt::Write;

use renju_engine::renju::{Board, GameResult, Mark, MoveDecision, MoveReason, Position, WinResult};

const EMPTY_GLYPH: char = '.';

fn column_letter(col: usize) -> char {
    (b'a' + col as u8) as char
}

/// Human-facing label, e.g. `h8` for `7:7`.
pub fn cell_label(pos: Position) -> String {
    format!("{}{}", column_letter(pos.col), pos.row + 1)
}

/// Winning cells are wrapped in `[ ]`, the computer's last move in `( )`.
pub fn render_board(board: &Board, win: Option<&WinResult>, last_move: Option<Position>) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..board.size() {
        let _ = write!(out, " {} ", column_letter(col));
    }
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        let _ = write!(out, "{:>3} ", row + 1);
        for (col, mark) in cells.iter().enumerate() {
            let pos = Position::new(row, col);
            let glyph = mark.glyph().unwrap_or(EMPTY_GLYPH);
            let (open, close) = if win.is_some_and(|w| w.contains(pos)) {
                ('[', ']')
            } else if last_move == Some(pos) {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }
        out.push('\n');
    }
    out
}

pub fn describe_decision(decision: &MoveDecision) -> String {
    let cell = cell_label(decision.position);
    match &decision.reason {
        MoveReason::Opening => format!("Computer opened in the centre at {}", cell),
        MoveReason::Random => format!("Computer saw no pattern and played {} at random", cell),
        MoveReason::Pattern {
            mark,
            threat,
            direction,
            window,
        } => {
            let from = window.first().map(|&p| cell_label(p)).unwrap_or_default();
            let to = window.last().map(|&p| cell_label(p)).unwrap_or_default();
            let intent = if *mark == Mark::Computer { "extend its" } else { "block your" };
            format!(
                "Computer played {} to {} {} in the {} {}-{}",
                cell, intent, threat, direction, from, to
            )
        }
    }
}

pub fn describe_result(result: GameResult) -> &'static str {
    match result {
        GameResult::HumanWon => "Game over: You win!",
        GameResult::ComputerWon => "Game over: Computer wins!",
        GameResult::Draw => "Game over: Draw!",
    }
}
