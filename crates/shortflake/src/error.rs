use thiserror::Error;

/// A result type defaulting to this crate's [`Error`].
///
/// Encoding is total, so the only runtime failure an allocation can hit is a
/// regressed clock; everything else is rejected at construction time.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `shortflake` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum Error {
    /// The sampled clock is strictly behind the last recorded allocation.
    ///
    /// This happens when the wall clock is stepped backward (e.g. an NTP
    /// correction). The in-flight allocation must fail: an immediate retry
    /// would observe the same regressed clock, so the decision to retry is
    /// left to the caller. The condition is transient and clears once the
    /// clock catches back up.
    #[error("clock moved backwards: last allocation at {last_millis}ms, clock reports {now_millis}ms")]
    ClockRegression {
        /// Timestamp of the previous allocation, in ms since the epoch.
        last_millis: u64,
        /// The regressed sample, in ms since the epoch.
        now_millis: u64,
    },

    /// The configured node id does not fit the layout's node bit width.
    ///
    /// Rejected when a generator is constructed; a silently truncated node
    /// id would alias another instance's identifier space.
    #[error("node id {node_id} exceeds maximum {max_node_id}")]
    NodeIdOutOfRange { node_id: u64, max_node_id: u64 },

    /// The system clock is behind the configured epoch.
    ///
    /// Timestamps are measured forward from the epoch, so a clock that has
    /// not yet reached it cannot produce a valid ID.
    #[error("system clock at {now_millis}ms is behind the configured epoch at {epoch_millis}ms")]
    EpochBehind { epoch_millis: u64, now_millis: u64 },
}
