//! Time source for entry timestamps.

use std::time::Instant;

/// Source of the current instant.
///
/// The cache reads the clock when an entry is written and when expiry is
/// evaluated. Swap it out to control time in tests.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
