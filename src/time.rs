//! Time abstraction for testability.
//!
//! This module provides a [`Clock`] trait that allows injecting fixed
//! clocks in tests while using the real system clock in production.
//! Placeholder expansion is evaluated against wall-clock time, so test
//! suites pin the clock instead of tolerating a time window.

use chrono::{DateTime, Local};

/// Abstraction over the local wall clock.
///
/// Implementations provide the current local date and time, allowing
/// tests to inject controlled values instead of relying on actual
/// system time.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> DateTime<Local>;
}

/// Production clock using actual system time.
///
/// This is the default clock implementation that delegates to
/// [`Local::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a fixed instant.
///
/// Useful for deterministic tests of placeholder expansion:
///
/// ```
/// use chrono::{Local, TimeZone};
/// use confweave::time::{Clock, FixedClock};
///
/// let clock = FixedClock::new(Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
/// assert_eq!(clock.now().to_rfc3339(), clock.now().to_rfc3339());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Local>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = Local::now();
        let result = clock.now();
        let after = Local::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let instant = Local.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn fixed_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FixedClock>();
    }
}
