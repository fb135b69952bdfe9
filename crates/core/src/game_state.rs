//! Game state module - the Hangman rules engine
//!
//! [`HangmanGame`] owns one round: the hidden answer, guessed letters, lives,
//! and the per-guess countdown. Guess handling is synchronous; the countdown
//! runs on a background thread and shares the mutable part of the state
//! through a single mutex.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::outcome::GuessOutcome;
use crate::snapshot::GameSnapshot;
use crate::timer::Countdown;
use crate::types::{Level, BLANK, TIME_LIMIT_SECS};
use crate::words::pick_answer;

/// Mutable game progress, shared with the countdown thread.
#[derive(Debug)]
struct Progress {
    lives: u32,
    guessed: BTreeSet<char>,
    incorrect: BTreeSet<char>,
    game_over: bool,
    won: bool,
    timer_active: bool,
    time_expired: bool,
    /// Bumped on every `start_timer`; a countdown only acts on its own turn.
    turn: u64,
}

impl Progress {
    fn new(lives: u32) -> Self {
        Self {
            lives,
            guessed: BTreeSet::new(),
            incorrect: BTreeSet::new(),
            game_over: false,
            won: false,
            timer_active: false,
            time_expired: false,
            turn: 0,
        }
    }

    /// Take one life; the game is lost when none remain.
    fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            self.won = false;
        }
        self.lives
    }
}

// The guarded state is never left half-updated, so a poisoned lock is still usable.
fn lock(progress: &Mutex<Progress>) -> MutexGuard<'_, Progress> {
    progress.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One round of Hangman.
#[derive(Debug)]
pub struct HangmanGame {
    level: Level,
    answer: String,
    max_lives: u32,
    time_limit: Duration,
    progress: Arc<Mutex<Progress>>,
    countdown: Option<Countdown>,
}

impl HangmanGame {
    /// Start a game with a random answer for `level`.
    pub fn new(level: Level, lives: u32) -> Self {
        let answer = pick_answer(level, &mut rand::thread_rng());
        Self::with_answer(level, answer, lives)
    }

    /// Start a game whose answer is drawn from a seeded RNG.
    pub fn with_seed(level: Level, lives: u32, seed: u64) -> Self {
        let answer = pick_answer(level, &mut StdRng::seed_from_u64(seed));
        Self::with_answer(level, answer, lives)
    }

    /// Start a game with a fixed answer (normalized to uppercase).
    ///
    /// A life count of zero is raised to one.
    pub fn with_answer(level: Level, answer: &str, lives: u32) -> Self {
        let lives = lives.max(1);
        let answer = answer.to_uppercase();
        debug!(
            level = %level,
            answer_len = answer.chars().count(),
            lives,
            "new game"
        );

        Self {
            level,
            answer,
            max_lives: lives,
            time_limit: Duration::from_secs(TIME_LIMIT_SECS),
            progress: Arc::new(Mutex::new(Progress::new(lives))),
            countdown: None,
        }
    }

    /// Start a random game using lives and time limit from `config`.
    pub fn from_config(level: Level, config: &GameConfig) -> Self {
        Self::new(level, config.lives).with_time_limit(config.time_limit)
    }

    /// Replace the per-turn guess time limit (default [`TIME_LIMIT_SECS`]).
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Length of the answer in characters (spaces included).
    pub fn answer_len(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn lives(&self) -> u32 {
        self.progress().lives
    }

    pub fn game_over(&self) -> bool {
        self.progress().game_over
    }

    pub fn won(&self) -> bool {
        self.progress().won
    }

    /// The answer, once the game is over.
    pub fn revealed_answer(&self) -> Option<&str> {
        if self.game_over() {
            Some(&self.answer)
        } else {
            None
        }
    }

    fn progress(&self) -> MutexGuard<'_, Progress> {
        lock(&self.progress)
    }

    /// The answer with every unguessed letter replaced by `_`.
    ///
    /// Spaces and other non-letters are shown as-is.
    pub fn render_display(&self) -> String {
        mask(&self.answer, &self.progress().guessed)
    }

    /// True for a single alphabetic character that has not been guessed yet
    /// (case-insensitive). Missing, empty, and multi-character input is invalid.
    pub fn is_valid_guess(&self, input: Option<&str>) -> bool {
        let Some(letter) = input.and_then(normalize_letter) else {
            return false;
        };
        !self.progress().guessed.contains(&letter)
    }

    /// Apply one guess.
    pub fn make_guess(&mut self, input: &str) -> GuessOutcome {
        let mut progress = self.progress();

        if progress.game_over {
            return GuessOutcome::GameAlreadyOver;
        }

        let Some(letter) = normalize_letter(input) else {
            return GuessOutcome::Invalid;
        };
        if !progress.guessed.insert(letter) {
            return GuessOutcome::Invalid;
        }

        if self.answer.contains(letter) {
            debug!(%letter, "hit");
            if is_solved(&self.answer, &progress.guessed) {
                progress.won = true;
                progress.game_over = true;
                info!(level = %self.level, lives = progress.lives, "game won");
                return GuessOutcome::Won;
            }
            return GuessOutcome::Hit { letter };
        }

        progress.incorrect.insert(letter);
        let lives_left = progress.lose_life();
        debug!(%letter, lives_left, "miss");

        if progress.game_over {
            info!(level = %self.level, answer = %self.answer, "game lost");
            GuessOutcome::Lost {
                answer: self.answer.clone(),
            }
        } else {
            GuessOutcome::Miss { letter, lives_left }
        }
    }

    /// Arm the countdown for the pending guess.
    ///
    /// When it runs out before [`stop_timer`](HangmanGame::stop_timer), the
    /// player loses a life without any letter being recorded. A countdown
    /// still pending from an earlier call is cancelled first.
    pub fn start_timer(&mut self) {
        self.cancel_countdown();

        let turn = {
            let mut progress = self.progress();
            progress.turn += 1;
            progress.timer_active = true;
            progress.time_expired = false;
            progress.turn
        };

        let shared = Arc::clone(&self.progress);
        let level = self.level;
        match Countdown::spawn(self.time_limit, move || expire_turn(&shared, turn, level)) {
            Ok(countdown) => self.countdown = Some(countdown),
            Err(err) => {
                warn!(%err, "could not start countdown thread; this guess is untimed");
                self.progress().timer_active = false;
            }
        }
    }

    /// Disarm the countdown. A callback that has not yet taken the lock
    /// becomes a no-op.
    pub fn stop_timer(&mut self) {
        self.progress().timer_active = false;
        self.cancel_countdown();
    }

    pub fn is_time_expired(&self) -> bool {
        self.progress().time_expired
    }

    pub fn is_timer_active(&self) -> bool {
        self.progress().timer_active
    }

    /// Time left on the armed countdown, if one is running.
    pub fn time_remaining(&self) -> Option<Duration> {
        if !self.is_timer_active() {
            return None;
        }
        self.countdown.as_ref().map(Countdown::remaining)
    }

    fn cancel_countdown(&mut self) {
        if let Some(mut countdown) = self.countdown.take() {
            countdown.cancel();
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let progress = self.progress();
        GameSnapshot {
            level: self.level,
            display: mask(&self.answer, &progress.guessed),
            lives: progress.lives,
            max_lives: self.max_lives,
            guessed_letters: progress.guessed.iter().copied().collect(),
            incorrect_guesses: progress.incorrect.iter().copied().collect(),
            game_over: progress.game_over,
            won: progress.won,
            answer: progress.game_over.then(|| self.answer.clone()),
            time_expired: progress.time_expired,
            time_limit_secs: self.time_limit.as_secs(),
        }
    }

    #[cfg(test)]
    fn guessed(&self) -> Vec<char> {
        self.progress().guessed.iter().copied().collect()
    }
}

/// Countdown callback: penalize the turn that armed it, if it is still armed.
fn expire_turn(progress: &Mutex<Progress>, turn: u64, level: Level) {
    let mut progress = lock(progress);
    if !progress.timer_active || progress.turn != turn {
        return;
    }

    progress.timer_active = false;
    progress.time_expired = true;
    if !progress.game_over {
        let lives_left = progress.lose_life();
        info!(level = %level, lives_left, game_over = progress.game_over, "guess timer expired");
    }
}

/// Single alphabetic character, uppercased.
fn normalize_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if !c.is_alphabetic() {
        return None;
    }

    let mut upper = c.to_uppercase();
    // Letters that uppercase to several characters ('ß' -> "SS") are not a
    // single letter any more.
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

fn mask(answer: &str, guessed: &BTreeSet<char>) -> String {
    answer
        .chars()
        .map(|c| {
            if c.is_alphabetic() && !guessed.contains(&c) {
                BLANK
            } else {
                c
            }
        })
        .collect()
}

fn is_solved(answer: &str, guessed: &BTreeSet<char>) -> bool {
    answer
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(|c| guessed.contains(&c))
}
