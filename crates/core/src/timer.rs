//! One-shot background countdown.
//!
//! A [`Countdown`] runs on its own thread and calls a closure once its limit
//! elapses, unless it is cancelled first. The thread waits on a channel, so
//! cancelling (or dropping the handle) wakes it immediately instead of leaving
//! a sleeper behind.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a pending countdown.
#[derive(Debug)]
pub struct Countdown {
    cancel_tx: Option<Sender<()>>,
    deadline: Instant,
}

impl Countdown {
    /// Start a countdown that runs `on_expire` after `limit`.
    ///
    /// `on_expire` runs on the countdown thread. It may race with
    /// [`cancel`](Countdown::cancel): callers that need "no callback after
    /// cancel" must re-check their own state inside the closure.
    pub fn spawn<F>(limit: Duration, on_expire: F) -> io::Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let deadline = Instant::now() + limit;

        thread::Builder::new()
            .name("hangman-countdown".into())
            .spawn(move || match cancel_rx.recv_timeout(limit) {
                Err(RecvTimeoutError::Timeout) => on_expire(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
            })?;

        Ok(Self {
            cancel_tx: Some(cancel_tx),
            deadline,
        })
    }

    /// Wake the countdown thread and let it exit without firing.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    #[cfg(test)]
    fn is_cancelled(&self) -> bool {
        self.cancel_tx.is_none()
    }

    /// Time left before the deadline (zero once it has passed).
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}
