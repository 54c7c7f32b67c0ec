//! Per-operation in-flight indicator and last error.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use serde::Serialize;

/// Loading flag and error slot for one dashboard operation.
///
/// `loading` is true while at least one call of the operation is in flight.
/// Only the most recently started call can report an error: starting a call
/// clears the previous one, and failures of superseded calls are dropped.
#[derive(Debug, Default)]
pub struct CallState {
    in_flight: AtomicUsize,
    generation: AtomicU64,
    last_error: ArcSwapOption<Failure>,
}

#[derive(Debug)]
struct Failure {
    generation: u64,
    message: String,
}

impl CallState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a call as started. Loading ends when the guard drops.
    pub fn begin(&self) -> InFlight<'_> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        InFlight {
            state: self,
            generation,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn error(&self) -> Option<String> {
        let current = self.generation.load(Ordering::SeqCst);
        self.last_error
            .load_full()
            .filter(|failure| failure.generation == current)
            .map(|failure| failure.message.clone())
    }

    pub fn status(&self) -> OperationStatus {
        OperationStatus {
            loading: self.is_loading(),
            error: self.error(),
        }
    }
}

/// Guard for one in-flight call.
#[must_use = "loading ends as soon as the guard is dropped"]
pub struct InFlight<'a> {
    state: &'a CallState,
    generation: u64,
}

impl InFlight<'_> {
    /// Record the call's failure message, unless a newer call has started.
    pub fn fail(&self, message: impl Into<String>) {
        let failure = Arc::new(Failure {
            generation: self.generation,
            message: message.into(),
        });
        // Never replace a failure recorded by a newer call.
        self.state.last_error.rcu(|current| match current {
            Some(newer) if newer.generation > failure.generation => Some(newer.clone()),
            _ => Some(failure.clone()),
        });
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Serializable view of a `CallState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    pub loading: bool,
    pub error: Option<String>,
}
