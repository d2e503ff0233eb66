use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::{Error, Result};

/// Default epoch: Friday, January 1, 2021 00:00:00 UTC.
///
/// The zero point of the reference configuration. All timestamps embedded in
/// IDs are measured in milliseconds forward from this instant.
pub const DEFAULT_EPOCH: Duration = Duration::from_millis(1_609_459_200_000);

/// A source of millisecond timestamps measured from a configured epoch.
///
/// This abstraction allows plugging in a monotonic timer, the raw system
/// clock, or a mocked time source in tests.
///
/// # Example
///
/// ```
/// use shortflake::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the configured epoch.
    fn current_millis(&self) -> u64;
}

/// A time source that returns elapsed time since process start, offset from
/// a user-defined epoch.
///
/// The wall clock is read exactly once, at construction, to anchor the
/// offset; every subsequent sample is derived from a monotonic timer
/// ([`Instant`]). Wall-clock adjustments (NTP steps, daylight savings)
/// therefore cannot move this clock backward, and a generator driven by it
/// never observes a clock regression.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    start: Instant,
    epoch_offset: u64, // in milliseconds
}

impl MonotonicClock {
    /// Constructs a monotonic clock using a custom epoch as the origin
    /// (t = 0), specified as a [`Duration`] since 1970-01-01 UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EpochBehind`] if the current system time is earlier
    /// than the given epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use shortflake::{DEFAULT_EPOCH, MonotonicClock, TimeSource};
    ///
    /// let clock = MonotonicClock::with_epoch(DEFAULT_EPOCH)?;
    /// let a = clock.current_millis();
    /// let b = clock.current_millis();
    /// assert!(b >= a);
    /// # Ok::<(), shortflake::Error>(())
    /// ```
    pub fn with_epoch(epoch: Duration) -> Result<Self> {
        let start = Instant::now();
        let system_now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        let offset = system_now.checked_sub(epoch).ok_or(Error::EpochBehind {
            epoch_millis: epoch.as_millis() as u64,
            now_millis: system_now.as_millis() as u64,
        })?;

        Ok(Self {
            start,
            epoch_offset: offset.as_millis() as u64,
        })
    }
}

impl TimeSource for MonotonicClock {
    /// Returns the number of milliseconds since the configured epoch, based
    /// on the elapsed monotonic time since construction.
    fn current_millis(&self) -> u64 {
        self.epoch_offset + self.start.elapsed().as_millis() as u64
    }
}

/// A time source that samples the wall clock on every call.
///
/// Unlike [`MonotonicClock`], this clock follows external adjustments: an
/// NTP step backward is reported as-is, which a generator surfaces as
/// [`Error::ClockRegression`]. Use it when IDs must track wall-clock time
/// exactly across restarts; prefer [`MonotonicClock`] otherwise.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    epoch_millis: u64,
}

impl SystemClock {
    /// Constructs a wall clock anchored at the given epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EpochBehind`] if the current system time is earlier
    /// than the given epoch.
    pub fn with_epoch(epoch: Duration) -> Result<Self> {
        let system_now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        if system_now < epoch {
            return Err(Error::EpochBehind {
                epoch_millis: epoch.as_millis() as u64,
                now_millis: system_now.as_millis() as u64,
            });
        }
        Ok(Self {
            epoch_millis: epoch.as_millis() as u64,
        })
    }
}

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_millis() as u64;
        // If the wall clock later steps behind the epoch, clamp to zero; the
        // generator's regression check turns that into an explicit error.
        now.saturating_sub(self.epoch_millis)
    }
}
