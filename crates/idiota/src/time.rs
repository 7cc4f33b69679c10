use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A trait for time sources that return the current Unix time in whole
/// seconds, already truncated to the identifier's 32-bit timestamp field.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests.
///
/// # Example
///
/// ```
/// use idiota::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_secs(&self) -> u32 {
///         1_700_000_000
///     }
/// }
///
/// assert_eq!(FixedTime.current_secs(), 1_700_000_000);
/// ```
pub trait TimeSource {
    /// Returns the current Unix time in seconds, truncated to 32 bits.
    fn current_secs(&self) -> u32;
}

/// Wall-clock [`TimeSource`] backed by [`SystemTime::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_secs(&self) -> u32 {
        unix_secs(SystemTime::now())
    }
}

/// Converts a wall-clock time into a 32-bit Unix timestamp.
///
/// Sub-second precision is floored away and the signed second count is
/// truncated to its low 32 bits. The field therefore wraps in February 2106,
/// and times before the epoch wrap from the top (`-1s` becomes `u32::MAX`).
#[must_use]
pub fn unix_secs(time: SystemTime) -> u32 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as u32,
        Err(err) => {
            let before = err.duration();
            let low = (before.as_secs() as u32).wrapping_neg();
            if before.subsec_nanos() > 0 {
                low.wrapping_sub(1)
            } else {
                low
            }
        }
    }
}

/// Reinterprets a 32-bit timestamp as a wall-clock time.
#[must_use]
pub fn from_unix_secs(secs: u32) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(u64::from(secs))
}
