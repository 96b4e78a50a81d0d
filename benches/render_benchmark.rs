//! Render benchmark: Measure frame generation.
//!
//! Target: < 2µs per frame

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictactoe::{Command, Game, OutputBuffer, Renderer};

fn render_redraw(c: &mut Criterion) {
    let mut game = Game::new();
    for command in [Command::Select, Command::MoveUp, Command::Select, Command::MoveLeft] {
        game.apply(command);
    }
    let mut renderer = Renderer::new();
    let mut out = OutputBuffer::new();
    renderer.render(&game, &mut out);
    game.mark_drawn();

    c.bench_function("render_redraw", |b| {
        b.iter(|| {
            out.clear();
            renderer.render(black_box(&game), &mut out);
            black_box(out.len())
        });
    });
}

fn render_full_game(c: &mut Criterion) {
    let script = [
        Command::Select,
        Command::MoveUp,
        Command::Select,
        Command::MoveLeft,
        Command::Select,
        Command::MoveDown,
        Command::Select,
        Command::MoveDown,
        Command::Select,
        Command::Restart,
    ];

    c.bench_function("render_full_game", |b| {
        b.iter(|| {
            let mut game = Game::new();
            let mut renderer = Renderer::new();
            let mut out = OutputBuffer::with_capacity(8192);
            renderer.render(&game, &mut out);
            game.mark_drawn();
            for &command in &script {
                game.apply(black_box(command));
                renderer.render(&game, &mut out);
                game.mark_drawn();
                game.settle();
            }
            black_box(out.len())
        });
    });
}

criterion_group!(benches, render_redraw, render_full_game);
criterion_main!(benches);
