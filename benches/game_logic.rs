use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hangman::core::HangmanGame;
use hangman::term::{GameView, Prompt, ScreenView, Viewport};
use hangman::types::Level;

fn phrase_game() -> HangmanGame {
    let mut game = HangmanGame::with_answer(Level::Intermediate, "SOFTWARE ENGINEERING PRINCIPLES", 6);
    for letter in ["e", "n", "r", "z"] {
        game.make_guess(letter);
    }
    game
}

fn bench_render_display(c: &mut Criterion) {
    let game = phrase_game();

    c.bench_function("render_display", |b| {
        b.iter(|| black_box(game.render_display()))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_python_to_win", |b| {
        b.iter(|| {
            let mut game = HangmanGame::with_answer(Level::Basic, "PYTHON", 6);
            for letter in ["p", "z", "y", "t", "h", "o", "n"] {
                black_box(game.make_guess(letter));
            }
            game
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = phrase_game();

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.snapshot())));
}

fn bench_timer_arm_disarm(c: &mut Criterion) {
    let mut game = HangmanGame::with_answer(Level::Basic, "PYTHON", 6);

    c.bench_function("start_stop_timer", |b| {
        b.iter(|| {
            game.start_timer();
            game.stop_timer();
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let snap = phrase_game().snapshot();
    let messages = vec!["Good guess! 'E' is in the answer.".to_string()];
    let view = GameView::default();

    c.bench_function("render_game_frame_80x24", |b| {
        b.iter(|| {
            let screen = ScreenView::Game {
                snapshot: &snap,
                seconds_left: Some(9),
                messages: &messages,
                prompt: Prompt {
                    label: "Enter a letter: ",
                    input: "",
                },
            };
            black_box(view.render(&screen, Viewport::new(80, 24)))
        })
    });
}

criterion_group!(
    benches,
    bench_render_display,
    bench_full_game,
    bench_snapshot,
    bench_timer_arm_disarm,
    bench_render_frame
);
criterion_main!(benches);
