// Keydyn Clock Abstraction
// Millisecond wall-clock source, injectable for deterministic tests

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of millisecond timestamps for a capture session.
///
/// Sessions only ever subtract two readings from the same clock, so the
/// epoch is irrelevant as long as readings are non-decreasing.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u64;
}

/// Wall-clock time in milliseconds since the Unix epoch, the same
/// timestamp source browser hosts report (`Date.getTime()`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced clock for tests and signal-log replay.
///
/// Interior mutability lets the owner of a session move time forward
/// between handler calls without mutable access to the clock itself.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    /// Create a clock starting at the given reading
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Set the clock to an absolute reading
    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    /// Advance the clock by a delta
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
