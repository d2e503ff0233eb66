use crate::ShortId;

/// Outcome of a single, non-blocking allocation attempt.
///
/// - [`IdGenStatus::Ready`] carries a newly allocated ID.
/// - [`IdGenStatus::Pending`] means the current millisecond has no sequence
///   room left; the caller should wait `yield_for` milliseconds (re-sampling
///   the clock) before polling again.
///
/// Sequence exhaustion is deliberately not an error: the condition resolves
/// itself as soon as the clock ticks, so blocking wrappers absorb it and
/// only a regressed clock surfaces as a failure.
///
/// # Example
///
/// ```
/// use shortflake::{BasicShortIdGenerator, IdGenStatus, ShortKeyId, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         42
///     }
/// }
///
/// let generator: BasicShortIdGenerator<ShortKeyId, _> =
///     BasicShortIdGenerator::new(0, FixedTime)?;
/// match generator.poll_id()? {
///     IdGenStatus::Ready { id } => println!("allocated {id}"),
///     IdGenStatus::Pending { yield_for } => println!("sequence full, wait {yield_for}ms"),
/// }
/// # Ok::<(), shortflake::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus<ID: ShortId> {
    /// A unique ID was allocated and is ready to use.
    Ready {
        /// The allocated ID.
        id: ID,
    },
    /// The per-millisecond sequence is exhausted for the current tick.
    Pending {
        /// Milliseconds until the sequence has room again.
        yield_for: u64,
    },
}
