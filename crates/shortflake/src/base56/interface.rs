use crate::{EncodedToken, ShortId};

/// Extension trait rendering IDs as base-56 tokens.
///
/// Blanket-implemented for every [`ShortId`] layout. Encoding is a pure
/// function of the packed value: it never fails and never allocates. There
/// is deliberately no decode: tokens are opaque primary keys for the
/// storage layer, not a transport format.
///
/// Because the timestamp occupies the most significant bits and the
/// alphabet is in ascending ASCII order, tokens of equal width compare
/// lexicographically in allocation order, which is what makes keys roughly
/// time-sortable in an index.
///
/// # Example
///
/// ```
/// use shortflake::{Base56Ext, ShortKeyId};
///
/// let id = ShortKeyId::from_raw(0);
/// assert_eq!(id.encode(), "22222222");
///
/// let later = ShortKeyId::from(1, 1, 0);
/// assert!(later.encode() > id.encode());
/// ```
pub trait Base56Ext: ShortId {
    /// Encodes this ID as a fixed-minimum-width base-56 token.
    fn encode(&self) -> EncodedToken {
        EncodedToken::from_u64(self.to_raw())
    }
}

impl<ID: ShortId> Base56Ext for ID {}
