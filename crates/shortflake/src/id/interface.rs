use core::fmt;
use core::hash::Hash;

/// A packed 64-bit, time-sortable identifier layout.
///
/// This trait abstracts a `timestamp`, `node`, and `sequence` partition over
/// a `u64`. Raw values compare in allocation order: the timestamp occupies
/// the most significant bits, so IDs produced later (or later within the
/// same millisecond) are numerically greater.
///
/// Types implementing `ShortId` are declared with [`define_short_id!`],
/// which derives the field masks, shifts, and accessors from the bit
/// partition.
///
/// [`define_short_id!`]: crate::define_short_id
pub trait ShortId:
    Copy + Clone + fmt::Display + PartialOrd + Ord + PartialEq + Eq + Hash + fmt::Debug
{
    /// Returns the timestamp field, in milliseconds since the epoch.
    fn timestamp(&self) -> u64;

    /// Returns the node identifier field.
    fn node_id(&self) -> u64;

    /// Returns the per-millisecond sequence field.
    fn sequence(&self) -> u64;

    /// Returns the maximum possible value for the timestamp field.
    fn max_timestamp() -> u64;

    /// Returns the maximum possible value for the node identifier field.
    fn max_node_id() -> u64;

    /// Returns the maximum possible value for the sequence field.
    fn max_sequence() -> u64;

    /// Constructs a new ID from its components.
    #[must_use]
    fn from_components(timestamp: u64, node_id: u64, sequence: u64) -> Self;

    /// Converts this ID into its raw packed representation.
    fn to_raw(&self) -> u64;

    /// Converts a raw packed value into this type.
    fn from_raw(raw: u64) -> Self;

    /// Returns true if the sequence can still be incremented within the
    /// current millisecond.
    fn has_sequence_room(&self) -> bool {
        self.sequence() < Self::max_sequence()
    }

    /// Returns a new ID with the sequence incremented.
    #[must_use]
    fn increment_sequence(&self) -> Self {
        Self::from_components(self.timestamp(), self.node_id(), self.sequence() + 1)
    }

    /// Returns a new ID for a newer timestamp with the sequence reset to
    /// zero.
    #[must_use]
    fn rollover_to_timestamp(&self, timestamp: u64) -> Self {
        Self::from_components(timestamp, self.node_id(), 0)
    }
}
