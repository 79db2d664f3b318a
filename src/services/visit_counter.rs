use std::sync::atomic::{AtomicU64, Ordering};

/// Counts requests to the static site. Shared through an `Arc` in the router state.
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { hits: AtomicU64::new(0) }
    }

    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn get(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
