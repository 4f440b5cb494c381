//! Shared elapsed-time counter.
//!
//! Stand-in for the free-running hardware timer: a single writer advances
//! the counter while any number of readers sample it. The simulation never
//! holds a clock; the host samples it and passes plain elapsed-seconds
//! readings into each tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cloneable handle to a shared millisecond counter.
///
/// A 64-bit atomic cannot tear, and readers only need a recent value, so
/// relaxed ordering is sufficient on both sides.
#[derive(Debug, Clone, Default)]
pub struct GameClock {
    millis: Arc<AtomicU64>,
}

impl GameClock {
    /// New clock at zero elapsed time.
    pub fn new() -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advance the counter by `ms` milliseconds. Writer side only.
    pub fn advance(&self, ms: u64) {
        self.millis.fetch_add(ms, Ordering::Relaxed);
    }

    /// Elapsed milliseconds since start or the last [`reset`](Self::reset).
    pub fn elapsed_millis(&self) -> u64 {
        self.millis.load(Ordering::Relaxed)
    }

    /// Elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_millis() as f64 / 1000.0
    }

    /// Rewind to zero for a new session.
    pub fn reset(&self) {
        self.millis.store(0, Ordering::Relaxed);
    }
}
