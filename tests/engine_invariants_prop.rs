//! Property tests for the engine invariants.
//!
//! Arbitrary guess sequences (valid, repeated, and garbage input) against
//! every vocabulary entry must keep:
//! - guessed letters growing monotonically, lives in `[0, max]`
//! - incorrect guesses a subset of guessed letters and absent from the answer
//! - game over as a one-way transition that freezes the state
//! - a win only when every letter is revealed, a loss only at zero lives

use proptest::prelude::*;

use hangman::core::{vocabulary, GuessOutcome, HangmanGame};
use hangman::types::{Level, BLANK};

fn any_answer() -> impl Strategy<Value = (Level, &'static str)> {
    prop_oneof![Just(Level::Basic), Just(Level::Intermediate)].prop_flat_map(|level| {
        let words = vocabulary(level);
        (0..words.len()).prop_map(move |i| (level, words[i]))
    })
}

fn any_guess() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z]",
        1 => "[a-zA-Z0-9 !?]{0,3}",
    ]
}

proptest! {
    #[test]
    fn invariants_hold_over_any_guess_sequence(
        (level, answer) in any_answer(),
        lives in 1u32..10,
        guesses in prop::collection::vec(any_guess(), 0..60),
    ) {
        let mut game = HangmanGame::with_answer(level, answer, lives);
        let mut prev = game.snapshot();

        for guess in &guesses {
            let outcome = game.make_guess(guess);
            let snap = game.snapshot();

            prop_assert!(snap.lives <= snap.max_lives);
            prop_assert_eq!(snap.max_lives, lives);
            prop_assert_eq!(snap.display.chars().count(), answer.chars().count());
            prop_assert!(prev.guessed_letters.iter().all(|c| snap.guessed_letters.contains(c)));
            prop_assert!(snap.incorrect_guesses.iter().all(|c| snap.guessed_letters.contains(c)));
            prop_assert!(snap.incorrect_guesses.iter().all(|c| !answer.contains(*c)));
            prop_assert_eq!(snap.lives, lives - snap.incorrect_guesses.len() as u32);

            if prev.game_over {
                prop_assert_eq!(&outcome, &GuessOutcome::GameAlreadyOver);
                prop_assert_eq!(&snap, &prev);
            }
            if matches!(outcome, GuessOutcome::Invalid) {
                prop_assert_eq!(&snap, &prev);
            }
            if snap.won {
                prop_assert!(snap.game_over);
                prop_assert!(!snap.display.contains(BLANK));
                prop_assert_eq!(snap.display.as_str(), answer);
            }
            if snap.lives == 0 {
                prop_assert!(snap.game_over);
                prop_assert!(!snap.won);
            }
            prop_assert_eq!(snap.answer.is_some(), snap.game_over);

            prev = snap;
        }
    }
}
