//! Time sources for measuring a clustering pass.
//!
//! The pass only needs the distance between two readings, so a clock is a
//! monotonic timeline with an arbitrary origin. Tests inject [`FixedClock`]
//! to keep results free of timing noise.

use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Current reading, measured from an arbitrary fixed origin.
    fn now(&self) -> Duration;

    /// Milliseconds elapsed since an earlier reading, saturating at zero.
    fn elapsed_ms(&self, since: Duration) -> u64 {
        let elapsed = self.now().saturating_sub(since);
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Wall-clock time backed by [`Instant`].
///
/// # Examples
///
/// ```
/// use u_geocluster::clock::{Clock, MonotonicClock};
///
/// let clock = MonotonicClock::new();
/// let start = clock.now();
/// assert!(clock.now() >= start);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock frozen at one reading. Every measured pass takes 0 ms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub Duration);

impl Clock for FixedClock {
    fn now(&self) -> Duration {
        self.0
    }
}

/// Browser/Node time via `Date.now()`; `Instant` panics on
/// `wasm32-unknown-unknown`.
#[cfg(feature = "wasm")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DateClock;

#[cfg(feature = "wasm")]
impl Clock for DateClock {
    fn now(&self) -> Duration {
        Duration::from_secs_f64(js_sys::Date::now().max(0.0) / 1000.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
