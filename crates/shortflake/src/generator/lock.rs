use core::cmp::Ordering;

use parking_lot::Mutex;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, IdGenStatus, Result, ShortId, ShortIdGenerator, TimeSource};

/// A lock-based short ID generator suitable for multi-threaded
/// environments.
///
/// The whole packed ID is guarded by a single [`Mutex`], so the
/// read-compare-update sequence over (timestamp, sequence) is one critical
/// section: two threads can never observe the same pre-update state and
/// both claim the next sequence value.
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Fair access across threads is important
///
/// ## See Also
/// - [`BasicShortIdGenerator`]
/// - [`AtomicShortIdGenerator`]
///
/// [`BasicShortIdGenerator`]: crate::BasicShortIdGenerator
/// [`AtomicShortIdGenerator`]: crate::AtomicShortIdGenerator
#[derive(Debug)]
pub struct LockShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<ID>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<ID>,
    time: T,
}

impl<ID, T> LockShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    /// Creates a new [`LockShortIdGenerator`] for `node_id`.
    ///
    /// The initial timestamp and sequence are zero; the first allocation
    /// rolls the state over to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` does not fit the
    /// layout's node bit width.
    ///
    /// # Example
    ///
    /// ```
    /// use shortflake::{
    ///     DEFAULT_EPOCH, LockShortIdGenerator, MonotonicClock, ShortIdGenerator, ShortKeyId,
    /// };
    ///
    /// let clock = MonotonicClock::with_epoch(DEFAULT_EPOCH)?;
    /// let generator: LockShortIdGenerator<ShortKeyId, _> =
    ///     LockShortIdGenerator::new(0, clock)?;
    ///
    /// let id = generator.next_id()?;
    /// # Ok::<(), shortflake::Error>(())
    /// ```
    pub fn new(node_id: u64, time: T) -> Result<Self> {
        if node_id > ID::max_node_id() {
            return Err(Error::NodeIdOutOfRange {
                node_id,
                max_node_id: ID::max_node_id(),
            });
        }
        Ok(Self::from_components(0, node_id, 0, time))
    }

    /// Creates a generator preloaded with explicit component values.
    ///
    /// Useful for tests and for controlling the starting point manually;
    /// prefer [`Self::new`] otherwise.
    pub fn from_components(timestamp: u64, node_id: u64, sequence: u64, time: T) -> Self {
        let id = ID::from_components(timestamp, node_id, sequence);
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(Mutex::new(id)),
            #[cfg(not(feature = "cache-padded"))]
            state: Mutex::new(id),
            time,
        }
    }

    /// Attempts to allocate the next ID with a single clock sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] if the sampled clock is behind
    /// the last recorded allocation. State is left untouched in that case,
    /// so allocation resumes as soon as the clock catches back up.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn poll_id(&self) -> Result<IdGenStatus<ID>> {
        let now = self.time.current_millis();

        let mut id = self.state.lock();
        let last = id.timestamp();
        match now.cmp(&last) {
            Ordering::Equal => {
                if id.has_sequence_room() {
                    *id = id.increment_sequence();
                    Ok(IdGenStatus::Ready { id: *id })
                } else {
                    Ok(IdGenStatus::Pending { yield_for: 1 })
                }
            }
            Ordering::Greater => {
                *id = id.rollover_to_timestamp(now);
                Ok(IdGenStatus::Ready { id: *id })
            }
            Ordering::Less => Err(Self::cold_clock_regression(now, last)),
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_regression(now: u64, last: u64) -> Error {
        debug_assert!(now < last);
        Error::ClockRegression {
            last_millis: last,
            now_millis: now,
        }
    }
}

impl<ID, T> ShortIdGenerator<ID, T> for LockShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    fn new(node_id: u64, time: T) -> Result<Self> {
        Self::new(node_id, time)
    }

    fn poll_id(&self) -> Result<IdGenStatus<ID>> {
        self.poll_id()
    }
}
