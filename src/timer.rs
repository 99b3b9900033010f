//! Elapsed-time counter
//!
//! Native builds read std::time::Instant, a monotonic clock, so the elapsed
//! value never goes backwards.

use std::time::Instant;

/// Counts milliseconds since it was started
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start counting from now
    pub fn start() -> Self {
        Self::from_instant(Instant::now())
    }

    pub fn from_instant(start: Instant) -> Self {
        Self { start }
    }

    /// Milliseconds since the timer started
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::start()
    }
}
