//! Bounded retry loop for the packaging step.
//!
//! Attempts run back to back: no backoff, no timeout. Each attempt walks the
//! [`AttemptState`] machine and only the last failure is propagated.

use std::fmt;

use crate::cli::OutputManager;
use crate::error::ExecutionError;

/// Lifecycle of the attempt loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Nothing has run yet
    Pending,
    /// An attempt is in progress
    Running,
    /// An attempt exited successfully (terminal)
    Succeeded,
    /// An attempt failed and another one is allowed
    Retrying,
    /// The last allowed attempt failed (terminal)
    Failed,
}

impl AttemptState {
    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(self, next: AttemptState) -> bool {
        use AttemptState::*;
        matches!(
            (self, next),
            (Pending, Running)
                | (Running, Succeeded)
                | (Running, Retrying)
                | (Running, Failed)
                | (Retrying, Running)
        )
    }
}

impl fmt::Display for AttemptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttemptState::Pending => "pending",
            AttemptState::Running => "running",
            AttemptState::Succeeded => "succeeded",
            AttemptState::Retrying => "retrying",
            AttemptState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Tracks the current state and logs transitions
#[derive(Debug)]
struct AttemptTracker<'a> {
    operation_name: &'a str,
    state: AttemptState,
}

impl<'a> AttemptTracker<'a> {
    fn new(operation_name: &'a str) -> Self {
        Self {
            operation_name,
            state: AttemptState::Pending,
        }
    }

    fn advance(&mut self, next: AttemptState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid attempt transition {} -> {}",
            self.state,
            next
        );
        log::debug!("{}: {} -> {}", self.operation_name, self.state, next);
        self.state = next;
    }
}

/// Outcome of a successful retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOutcome<T> {
    /// Value returned by the successful attempt
    pub value: T,
    /// Number of attempts made, including the successful one
    pub attempts: u32,
}

/// Run `operation` up to `max_attempts` times, stopping at the first success
///
/// The closure receives the 1-based attempt number. Every failure except the
/// last is reported and retried immediately; the last one is returned wrapped
/// in [`ExecutionError::AttemptsExhausted`]. A `max_attempts` of 0 is treated
/// as 1.
pub fn retry_attempts<T, F>(
    mut operation: F,
    max_attempts: u32,
    operation_name: &str,
    output: &OutputManager,
) -> Result<RetryOutcome<T>, ExecutionError>
where
    F: FnMut(u32) -> Result<T, ExecutionError>,
{
    let max_attempts = max_attempts.max(1);
    let mut tracker = AttemptTracker::new(operation_name);

    let mut attempt = 1;

    loop {
        tracker.advance(AttemptState::Running);

        match operation(attempt) {
            Ok(value) => {
                tracker.advance(AttemptState::Succeeded);
                if attempt > 1 {
                    output.success(&format!(
                        "{} succeeded on attempt {}/{}",
                        operation_name, attempt, max_attempts
                    ));
                }
                return Ok(RetryOutcome {
                    value,
                    attempts: attempt,
                });
            }
            Err(e) if attempt < max_attempts => {
                tracker.advance(AttemptState::Retrying);
                output.warn(&format!(
                    "Attempt {}/{} failed: {}",
                    attempt, max_attempts, e
                ));
                attempt += 1;
            }
            Err(e) => {
                tracker.advance(AttemptState::Failed);
                output.error(&format!(
                    "{} failed after {} attempt(s)",
                    operation_name, attempt
                ));
                return Err(ExecutionError::AttemptsExhausted {
                    attempts: attempt,
                    last: Box::new(e),
                });
            }
        }
    }
}
