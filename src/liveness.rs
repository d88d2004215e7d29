use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Generation counter used to drop results of requests that are no longer
/// wanted, e.g. after the view that issued them was replaced.
///
/// Nothing is cancelled upstream; a stale result is simply not applied.
#[derive(Debug, Clone, Default)]
pub struct Liveness {
    generation: Arc<AtomicU64>,
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request generation, making every older ticket stale.
    pub fn begin(&self) -> Ticket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// Marks every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    pub fn is_live(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }

    /// Hands `value` to `apply` only while the ticket is live.
    /// Returns whether it was applied.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            tracing::debug!(generation = self.generation, "Dropping stale result");
            false
        }
    }
}
