use criterion::{Criterion, criterion_group, criterion_main};
use renju_engine::SessionRng;
use renju_engine::renju::{Board, ComputerPlayer, Mark, MoveSelector, Position, find_winner};
use std::hint::black_box;

fn mid_game_board() -> Board {
    let mut board = Board::new(15).expect("15 is a valid board size");
    let moves = [
        (7, 7, Mark::Human), (8, 7, Mark::Computer), (7, 8, Mark::Human), (8, 8, Mark::Computer),
        (6, 6, Mark::Human), (9, 9, Mark::Computer), (5, 5, Mark::Human), (10, 10, Mark::Computer),
        (6, 8, Mark::Human), (8, 6, Mark::Computer), (9, 7, Mark::Human), (7, 9, Mark::Computer),
        (10, 6, Mark::Human), (6, 10, Mark::Computer), (5, 7, Mark::Human), (7, 5, Mark::Computer),
    ];
    for (row, col, mark) in moves {
        board
            .set(Position::new(row, col), mark)
            .expect("bench moves are on the board");
    }
    board
}

fn bench_empty_board(c: &mut Criterion) {
    let mut selector = MoveSelector::new(SessionRng::new(1));
    c.bench_function("heuristic_move_empty_15x15", |b| {
        b.iter(|| {
            let mut board = Board::new(15).expect("15 is a valid board size");
            black_box(selector.choose_move(&mut board).expect("board has empty cells"))
        })
    });
}

fn bench_mid_game(c: &mut Criterion) {
    let template = mid_game_board();
    let mut selector = MoveSelector::new(SessionRng::new(2));
    c.bench_function("heuristic_move_mid_game_15x15", |b| {
        b.iter(|| {
            let mut board = template.clone();
            black_box(selector.choose_move(&mut board).expect("board has empty cells"))
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("heuristic_self_fill_15x15", |b| {
        b.iter(|| {
            let mut board = Board::new(15).expect("15 is a valid board size");
            let mut selector = MoveSelector::new(SessionRng::new(3));
            while board.has_empty_cell() && !find_winner(&board, Mark::Computer).winner_exists() {
                selector.choose_move(&mut board).expect("board has empty cells");
            }
            black_box(board)
        })
    });
}

criterion_group!(benches, bench_empty_board, bench_mid_game, bench_full_game);
criterion_main!(benches);
