//! Time source abstraction for the tracking number generator.

use chrono::{DateTime, Utc};

/// Wall-clock time source.
///
/// The generator folds the current instant into its hash seed, so tests
/// inject a fixed clock to get reproducible output.
///
/// # Implementations
///
/// - [`SystemClock`] - reads the OS clock
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
