use serde::{Serialize, Serializer};

use crate::EncodedToken;

/// Tokens serialize as plain strings, matching how the storage layer keys
/// records. There is no `Deserialize`: decoding a token back into an ID is
/// deliberately unsupported.
impl Serialize for EncodedToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// `#[serde(with = "...")]` helpers serializing IDs as their raw packed
/// integers.
///
/// # Example
///
/// ```
/// use serde::Serialize;
/// use shortflake::{ShortId, ShortKeyId};
///
/// #[derive(Serialize)]
/// struct Record {
///     #[serde(with = "shortflake::as_native")]
///     id: ShortKeyId,
/// }
///
/// let record = Record {
///     id: ShortKeyId::from_components(42, 1, 7),
/// };
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"id":5509127}"#);
/// ```
pub mod as_native {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::ShortId;

    /// Serializes a short ID as its raw packed integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: ShortId,
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserializes a short ID from its raw packed integer.
    ///
    /// Every `u64` is a structurally valid packed ID (the partition covers
    /// the whole word), so no range check is needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails.
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: ShortId,
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(d)?;
        Ok(ID::from_raw(raw))
    }
}
