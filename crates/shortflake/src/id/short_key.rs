/// Declares a packed 64-bit short ID layout from three required components:
/// `timestamp`, `node`, and `sequence`.
///
/// The components are always laid out from **most significant bit (MSB)** to
/// **least significant bit (LSB)** in that exact order:
///
/// - `timestamp` occupies the highest bits, so raw IDs sort by time first.
/// - `sequence` occupies the lowest bits.
/// - The total number of bits **must exactly equal** 64; anything else
///   triggers a compile-time assertion failure.
///
/// ```text
/// define_short_id!(
///     <TypeName>,
///     timestamp: <bits>,
///     node: <bits>,
///     sequence: <bits>
/// );
/// ```
///
/// ## Example
///
/// ```rust
/// use shortflake::define_short_id;
///
/// define_short_id!(
///     MyId,
///     timestamp: 48,
///     node: 4,
///     sequence: 12
/// );
///
/// let id = MyId::from(1_000, 3, 7);
/// assert_eq!(id.timestamp(), 1_000);
/// assert_eq!(id.node_id(), 3);
/// assert_eq!(id.sequence(), 7);
/// ```
#[macro_export]
macro_rules! define_short_id {
    (
        $(#[$meta:meta])*
        $name:ident,
        timestamp: $timestamp_bits:expr,
        node: $node_bits:expr,
        sequence: $sequence_bits:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name {
            id: u64,
        }

        const _: () = {
            // Compile-time check: the partition _must_ cover the whole word.
            // This is to avoid aliasing surprises.
            assert!(
                $timestamp_bits + $node_bits + $sequence_bits == u64::BITS,
                "Layout must match underlying type width"
            );
        };

        impl $name {
            pub const TIMESTAMP_BITS: u64 = $timestamp_bits;
            pub const NODE_BITS: u64 = $node_bits;
            pub const SEQUENCE_BITS: u64 = $sequence_bits;

            pub const SEQUENCE_SHIFT: u64 = 0;
            pub const NODE_SHIFT: u64 = Self::SEQUENCE_SHIFT + Self::SEQUENCE_BITS;
            pub const TIMESTAMP_SHIFT: u64 = Self::NODE_SHIFT + Self::NODE_BITS;

            pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
            pub const NODE_MASK: u64 = (1 << Self::NODE_BITS) - 1;
            pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

            #[must_use]
            pub const fn from(timestamp: u64, node_id: u64, sequence: u64) -> Self {
                let t = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
                let n = (node_id & Self::NODE_MASK) << Self::NODE_SHIFT;
                let s = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
                Self { id: t | n | s }
            }

            /// Extracts the timestamp from the packed ID.
            #[must_use]
            pub const fn timestamp(&self) -> u64 {
                (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
            }

            /// Extracts the node identifier from the packed ID.
            #[must_use]
            pub const fn node_id(&self) -> u64 {
                (self.id >> Self::NODE_SHIFT) & Self::NODE_MASK
            }

            /// Extracts the sequence from the packed ID.
            #[must_use]
            pub const fn sequence(&self) -> u64 {
                (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
            }

            /// Returns the maximum representable timestamp value based on
            /// `Self::TIMESTAMP_BITS`.
            #[must_use]
            pub const fn max_timestamp() -> u64 {
                Self::TIMESTAMP_MASK
            }

            /// Returns the maximum representable node identifier based on
            /// `Self::NODE_BITS`.
            #[must_use]
            pub const fn max_node_id() -> u64 {
                Self::NODE_MASK
            }

            /// Returns the maximum representable sequence value based on
            /// `Self::SEQUENCE_BITS`.
            #[must_use]
            pub const fn max_sequence() -> u64 {
                Self::SEQUENCE_MASK
            }

            /// Converts this type into its raw packed representation.
            #[must_use]
            pub const fn to_raw(&self) -> u64 {
                self.id
            }

            /// Converts a raw packed value into this type.
            #[must_use]
            pub const fn from_raw(raw: u64) -> Self {
                Self { id: raw }
            }
        }

        impl $crate::ShortId for $name {
            fn timestamp(&self) -> u64 {
                self.timestamp()
            }

            fn node_id(&self) -> u64 {
                self.node_id()
            }

            fn sequence(&self) -> u64 {
                self.sequence()
            }

            fn max_timestamp() -> u64 {
                Self::TIMESTAMP_MASK
            }

            fn max_node_id() -> u64 {
                Self::NODE_MASK
            }

            fn max_sequence() -> u64 {
                Self::SEQUENCE_MASK
            }

            fn from_components(timestamp: u64, node_id: u64, sequence: u64) -> Self {
                debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
                debug_assert!(node_id <= Self::NODE_MASK, "node id overflow");
                debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
                Self::from(timestamp, node_id, sequence)
            }

            fn to_raw(&self) -> u64 {
                self.to_raw()
            }

            fn from_raw(raw: u64) -> Self {
                Self::from_raw(raw)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let token = $crate::Base56Ext::encode(self);
                core::fmt::Display::fmt(&token, f)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let full = core::any::type_name::<Self>();
                let name = full.rsplit("::").next().unwrap_or(full);
                let mut dbg = f.debug_struct(name);
                dbg.field("id", &format_args!("{:} (0x{:x})", self.to_raw(), self.to_raw()));
                let token = $crate::Base56Ext::encode(self);
                dbg.field("token", &token.as_str());
                dbg.field("timestamp", &format_args!("{:} (0x{:x})", self.timestamp(), self.timestamp()));
                dbg.field("node_id", &format_args!("{:} (0x{:x})", self.node_id(), self.node_id()));
                dbg.field("sequence", &format_args!("{:} (0x{:x})", self.sequence(), self.sequence()));
                dbg.finish()
            }
        }
    };
}

define_short_id!(
    /// The reference 64-bit short key layout
    ///
    /// - 47 bits timestamp (ms since [`DEFAULT_EPOCH`])
    /// - 5 bits node id
    /// - 12 bits sequence
    ///
    /// ```text
    ///  Bit Index:  63             17 16      12 11            0
    ///              +----------------+----------+---------------+
    ///  Field:      | timestamp (47) | node (5) | sequence (12) |
    ///              +----------------+----------+---------------+
    ///              |<----- MSB ------ 64 bits ------ LSB ----->|
    /// ```
    ///
    /// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
    ShortKeyId,
    timestamp: 47,
    node: 5,
    sequence: 12
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShortId;

    #[test]
    fn short_key_id_fields_and_bounds() {
        let ts = ShortKeyId::max_timestamp();
        let node = ShortKeyId::max_node_id();
        let seq = ShortKeyId::max_sequence();

        let id = ShortKeyId::from(ts, node, seq);
        assert_eq!(id.timestamp(), ts);
        assert_eq!(id.node_id(), node);
        assert_eq!(id.sequence(), seq);
        assert_eq!(<ShortKeyId as ShortId>::from_components(ts, node, seq), id);
        assert_eq!(id.to_raw(), u64::MAX);
    }

    #[test]
    fn short_key_id_low_bit_fields() {
        let id = <ShortKeyId as ShortId>::from_components(0, 0, 0);
        assert_eq!(id.timestamp(), 0);
        assert_eq!(id.node_id(), 0);
        assert_eq!(id.sequence(), 0);

        let id = <ShortKeyId as ShortId>::from_components(1, 1, 1);
        assert_eq!(id.timestamp(), 1);
        assert_eq!(id.node_id(), 1);
        assert_eq!(id.sequence(), 1);
    }

    #[test]
    fn short_key_id_packs_reference_layout() {
        // ((ts << (5 + 12)) | (node << 12) | seq), the reference bit layout.
        let id = <ShortKeyId as ShortId>::from_components(7, 1, 3);
        assert_eq!(id.to_raw(), (7 << 17) | (1 << 12) | 3);
    }

    #[test]
    fn short_key_id_orders_by_time_then_sequence() {
        let a = <ShortKeyId as ShortId>::from_components(41, 1, ShortKeyId::max_sequence());
        let b = <ShortKeyId as ShortId>::from_components(42, 1, 0);
        let c = <ShortKeyId as ShortId>::from_components(42, 1, 1);
        assert!(a < b && b < c);
    }

    #[test]
    #[should_panic(expected = "timestamp overflow")]
    fn short_key_id_timestamp_overflow_panics() {
        let ts = ShortKeyId::max_timestamp() + 1;
        let _ = <ShortKeyId as ShortId>::from_components(ts, 0, 0);
    }

    #[test]
    #[should_panic(expected = "node id overflow")]
    fn short_key_id_node_overflow_panics() {
        let node = ShortKeyId::max_node_id() + 1;
        let _ = <ShortKeyId as ShortId>::from_components(0, node, 0);
    }

    #[test]
    #[should_panic(expected = "sequence overflow")]
    fn short_key_id_sequence_overflow_panics() {
        let seq = ShortKeyId::max_sequence() + 1;
        let _ = <ShortKeyId as ShortId>::from_components(0, 0, seq);
    }

    #[test]
    fn sequence_room_and_increment() {
        let id = <ShortKeyId as ShortId>::from_components(42, 1, 0);
        assert!(id.has_sequence_room());

        let next = id.increment_sequence();
        assert_eq!(next.timestamp(), 42);
        assert_eq!(next.node_id(), 1);
        assert_eq!(next.sequence(), 1);

        let full =
            <ShortKeyId as ShortId>::from_components(42, 1, ShortKeyId::max_sequence());
        assert!(!full.has_sequence_room());
    }

    #[test]
    fn rollover_resets_sequence() {
        let id = <ShortKeyId as ShortId>::from_components(42, 3, 99);
        let rolled = id.rollover_to_timestamp(43);
        assert_eq!(rolled.timestamp(), 43);
        assert_eq!(rolled.node_id(), 3);
        assert_eq!(rolled.sequence(), 0);
    }
}
