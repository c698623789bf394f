//! Bounded and panic-guarded provider calls.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::{DecisionError, DecisionProvider, DecisionView};
use crate::core::Action;

/// Ask `provider` for a decision, giving up after `limit`.
///
/// The call runs on a helper thread. On timeout the thread is left to finish
/// on its own and its answer is dropped. A provider that panics is reported
/// as [`DecisionError::Disconnected`].
pub fn decide_with_timeout(
    provider: Arc<dyn DecisionProvider>,
    view: DecisionView,
    limit: Duration,
) -> Result<Action, DecisionError> {
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name(format!("decide-{}", view.player_name))
        .spawn(move || {
            // The receiver is gone after a timeout.
            let _ = tx.send(provider.decide(&view));
        })?;

    match rx.recv_timeout(limit) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(DecisionError::Timeout(limit)),
        Err(RecvTimeoutError::Disconnected) => Err(DecisionError::Disconnected),
    }
}

/// Ask `provider` for a decision on the calling thread.
///
/// A provider that panics is reported as [`DecisionError::Disconnected`],
/// the same as under [`decide_with_timeout`].
pub fn decide_guarded(provider: &dyn DecisionProvider, view: &DecisionView) -> Result<Action, DecisionError> {
    panic::catch_unwind(AssertUnwindSafe(|| provider.decide(view)))
        .unwrap_or(Err(DecisionError::Disconnected))
}
