//! Terminal Hangman (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests, and benchmarks can use `hangman::{core, input, session, term, types}`.

pub use hangman_core as core;
pub use hangman_input as input;
pub use hangman_session as session;
pub use hangman_term as term;
pub use hangman_types as types;
