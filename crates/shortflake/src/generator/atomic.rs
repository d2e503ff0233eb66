use core::cmp::Ordering as CmpOrdering;
use core::marker::PhantomData;

use portable_atomic::{AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, IdGenStatus, Result, ShortId, ShortIdGenerator, TimeSource};

/// A lock-free short ID generator suitable for multi-threaded environments.
///
/// The whole packed ID lives in a single [`AtomicU64`]. Timestamp and
/// sequence are therefore updated together by one compare-and-swap: there
/// is no window where another thread can observe the two fields half
/// updated, which is what keeps (timestamp, sequence) pairs unique.
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Fair access is sacrificed for higher throughput
///
/// ## See Also
/// - [`BasicShortIdGenerator`]
/// - [`LockShortIdGenerator`]
///
/// [`BasicShortIdGenerator`]: crate::BasicShortIdGenerator
/// [`LockShortIdGenerator`]: crate::LockShortIdGenerator
#[derive(Debug)]
pub struct AtomicShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<AtomicU64>,
    #[cfg(not(feature = "cache-padded"))]
    state: AtomicU64,
    time: T,
    _id: PhantomData<ID>,
}

impl<ID, T> AtomicShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    /// Creates a new [`AtomicShortIdGenerator`] for `node_id`.
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
    ///     AtomicShortIdGenerator, DEFAULT_EPOCH, MonotonicClock, ShortIdGenerator, ShortKeyId,
    /// };
    ///
    /// let clock = MonotonicClock::with_epoch(DEFAULT_EPOCH)?;
    /// let generator: AtomicShortIdGenerator<ShortKeyId, _> =
    ///     AtomicShortIdGenerator::new(0, clock)?;
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
            state: crossbeam_utils::CachePadded::new(AtomicU64::new(id.to_raw())),
            #[cfg(not(feature = "cache-padded"))]
            state: AtomicU64::new(id.to_raw()),
            time,
            _id: PhantomData,
        }
    }

    /// Attempts to allocate the next ID with a single clock sample.
    ///
    /// A failed compare-and-swap (another thread advanced the state first)
    /// reports [`IdGenStatus::Pending`] with `yield_for: 0`, i.e. retry
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] if the sampled clock is behind
    /// the last recorded allocation. State is left untouched in that case,
    /// so allocation resumes as soon as the clock catches back up.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn poll_id(&self) -> Result<IdGenStatus<ID>> {
        let now = self.time.current_millis();

        let current_raw = self.state.load(Ordering::Relaxed);
        let current = ID::from_raw(current_raw);
        let last = current.timestamp();

        let next = match now.cmp(&last) {
            CmpOrdering::Equal => {
                if current.has_sequence_room() {
                    current.increment_sequence()
                } else {
                    return Ok(IdGenStatus::Pending { yield_for: 1 });
                }
            }
            CmpOrdering::Greater => current.rollover_to_timestamp(now),
            CmpOrdering::Less => {
                return Err(Self::cold_clock_regression(now, last));
            }
        };

        if self
            .state
            .compare_exchange(
                current_raw,
                next.to_raw(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            )
            .is_ok()
        {
            Ok(IdGenStatus::Ready { id: next })
        } else {
            // CAS failed: another thread won the race. Retry immediately.
            Ok(IdGenStatus::Pending { yield_for: 0 })
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

impl<ID, T> ShortIdGenerator<ID, T> for AtomicShortIdGenerator<ID, T>
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
