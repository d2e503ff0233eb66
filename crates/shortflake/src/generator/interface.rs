use crate::{IdGenStatus, Result, ShortId, TimeSource};

/// A minimal interface for allocating short IDs.
///
/// Implementations share one algorithm and differ only in how they guard
/// the packed (timestamp, sequence) word; see [`BasicShortIdGenerator`],
/// [`LockShortIdGenerator`], and [`AtomicShortIdGenerator`].
///
/// [`BasicShortIdGenerator`]: crate::BasicShortIdGenerator
/// [`LockShortIdGenerator`]: crate::LockShortIdGenerator
/// [`AtomicShortIdGenerator`]: crate::AtomicShortIdGenerator
pub trait ShortIdGenerator<ID, T>
where
    ID: ShortId,
    T: TimeSource,
{
    /// Creates a new generator for `node_id` driven by `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` does not fit the
    /// layout's node bit width. Truncating instead would silently alias
    /// another instance's identifier space.
    ///
    /// [`Error::NodeIdOutOfRange`]: crate::Error::NodeIdOutOfRange
    fn new(node_id: u64, time: T) -> Result<Self>
    where
        Self: Sized;

    /// Attempts to allocate the next ID with a single clock sample.
    ///
    /// Returns [`IdGenStatus::Ready`] with a new ID, or
    /// [`IdGenStatus::Pending`] when the per-millisecond sequence is
    /// exhausted and the caller should re-poll after `yield_for`
    /// milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] if the sampled clock is strictly
    /// behind the last recorded allocation.
    ///
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    fn poll_id(&self) -> Result<IdGenStatus<ID>>;

    /// Allocates the next ID, blocking through sequence exhaustion.
    ///
    /// On [`IdGenStatus::Pending`], the loop yields the thread and polls
    /// again; each poll re-samples the clock, so the wait ends exactly when
    /// the clock advances past the exhausted millisecond and the sequence
    /// resets to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] immediately; a regressed clock is
    /// never retried internally because an immediate retry would observe
    /// the same stale time.
    ///
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    fn next_id(&self) -> Result<ID> {
        loop {
            match self.poll_id()? {
                IdGenStatus::Ready { id } => return Ok(id),
                IdGenStatus::Pending { .. } => std::thread::yield_now(),
            }
        }
    }
}
