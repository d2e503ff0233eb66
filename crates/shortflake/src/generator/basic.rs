use core::cell::Cell;
use core::cmp::Ordering;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, IdGenStatus, Result, ShortId, ShortIdGenerator, TimeSource};

/// A non-concurrent short ID generator suitable for single-threaded
/// environments.
///
/// This generator is lightweight and fast, but **not thread-safe**: the
/// state lives in a [`Cell`], so the type is `!Sync` and the compiler
/// rejects shared use across threads.
///
/// ## Recommended When
/// - You're in a single-threaded environment (no shared access)
/// - You want the fastest generator
///
/// ## See Also
/// - [`LockShortIdGenerator`]
/// - [`AtomicShortIdGenerator`]
///
/// [`LockShortIdGenerator`]: crate::LockShortIdGenerator
/// [`AtomicShortIdGenerator`]: crate::AtomicShortIdGenerator
#[derive(Debug)]
pub struct BasicShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    state: Cell<ID>,
    time: T,
}

impl<ID, T> BasicShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    /// Creates a new [`BasicShortIdGenerator`] for `node_id`.
    ///
    /// The initial timestamp and sequence are zero; the first allocation
    /// rolls the state over to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` does not fit the
    /// layout's node bit width.
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
            state: Cell::new(id),
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

        let id = self.state.get();
        let last = id.timestamp();
        match now.cmp(&last) {
            Ordering::Equal => {
                if id.has_sequence_room() {
                    let next = id.increment_sequence();
                    self.state.set(next);
                    Ok(IdGenStatus::Ready { id: next })
                } else {
                    Ok(IdGenStatus::Pending { yield_for: 1 })
                }
            }
            Ordering::Greater => {
                let next = id.rollover_to_timestamp(now);
                self.state.set(next);
                Ok(IdGenStatus::Ready { id: next })
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

impl<ID, T> ShortIdGenerator<ID, T> for BasicShortIdGenerator<ID, T>
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
