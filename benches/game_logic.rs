use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{Game, Player, Players};
use tui_tictactoe::term::render_text;
use tui_tictactoe::types::{CellIndex, Mark};

fn new_game() -> Game {
    Game::new(Players::new(
        Player::new("bittu", Mark::X),
        Player::new("riya", Mark::O),
    ))
}

fn bench_full_game(c: &mut Criterion) {
    let draw: Vec<CellIndex> = [0, 1, 2, 4, 3, 5, 7, 6, 8]
        .iter()
        .filter_map(|&i| CellIndex::new(i))
        .collect();

    c.bench_function("play_drawn_game", |b| {
        b.iter(|| {
            let mut game = new_game();
            for &cell in &draw {
                let _ = game.make_move(black_box(cell));
            }
            game.is_game_over()
        })
    });
}

fn bench_has_won(c: &mut Criterion) {
    let mut players = Players::new(Player::new("bittu", Mark::X), Player::new("riya", Mark::O));
    for i in [0, 4, 7, 5] {
        if let Some(cell) = CellIndex::new(i) {
            players.record_move(cell);
        }
    }

    c.bench_function("has_won", |b| b.iter(|| black_box(&players).has_won()));
}

fn bench_render(c: &mut Criterion) {
    let mut game = new_game();
    for i in [0, 4, 8] {
        if let Some(cell) = CellIndex::new(i) {
            let _ = game.make_move(cell);
        }
    }
    let status = game.status();

    c.bench_function("render_text", |b| b.iter(|| render_text(black_box(&status))));
}

criterion_group!(benches, bench_full_game, bench_has_won, bench_render);
criterion_main!(benches);
