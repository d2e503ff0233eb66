use core::marker::PhantomData;

use crate::{
    Base56Ext, DEFAULT_EPOCH, EncodedToken, LockShortIdGenerator, MonotonicClock, Result, ShortId,
    ShortIdGenerator, ShortKeyId, TimeSource,
};

/// Composes an ID generator with the base-56 encoder.
///
/// This is the one surface a URL-shortening (or any CRUD) layer consumes:
/// one call, one fixed-minimum-width token to store as a primary key. A
/// [`Error::ClockRegression`] failure means "creation temporarily
/// unavailable": the condition clears once the clock resynchronizes, so
/// callers should surface a retryable error rather than a permanent one.
///
/// # Example
///
/// ```
/// use shortflake::ShortKeyFactory;
///
/// let factory = ShortKeyFactory::for_node(1)?;
/// let token = factory.new_token()?;
/// assert!(token.len() >= 8);
/// # Ok::<(), shortflake::Error>(())
/// ```
///
/// [`Error::ClockRegression`]: crate::Error::ClockRegression
#[derive(Debug)]
pub struct TokenFactory<ID, G, T>
where
    ID: ShortId,
    G: ShortIdGenerator<ID, T>,
    T: TimeSource,
{
    generator: G,
    _id: PhantomData<ID>,
    _time: PhantomData<T>,
}

/// The reference configuration: the 47/5/12 [`ShortKeyId`] layout, a
/// lock-based generator, and a monotonic clock anchored at
/// [`DEFAULT_EPOCH`].
pub type ShortKeyFactory =
    TokenFactory<ShortKeyId, LockShortIdGenerator<ShortKeyId, MonotonicClock>, MonotonicClock>;

impl ShortKeyFactory {
    /// Creates a reference-configuration factory for `node_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] for a node id that does not fit
    /// five bits, or [`Error::EpochBehind`] if the system clock is before
    /// [`DEFAULT_EPOCH`].
    ///
    /// [`Error::NodeIdOutOfRange`]: crate::Error::NodeIdOutOfRange
    /// [`Error::EpochBehind`]: crate::Error::EpochBehind
    pub fn for_node(node_id: u64) -> Result<Self> {
        Self::new(node_id, MonotonicClock::with_epoch(DEFAULT_EPOCH)?)
    }
}

impl<ID, G, T> TokenFactory<ID, G, T>
where
    ID: ShortId,
    G: ShortIdGenerator<ID, T>,
    T: TimeSource,
{
    /// Creates a factory for `node_id` driven by `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` does not fit the
    /// layout's node bit width.
    ///
    /// [`Error::NodeIdOutOfRange`]: crate::Error::NodeIdOutOfRange
    pub fn new(node_id: u64, time: T) -> Result<Self> {
        Ok(Self::from_generator(G::new(node_id, time)?))
    }

    /// Wraps an existing generator.
    pub fn from_generator(generator: G) -> Self {
        Self {
            generator,
            _id: PhantomData,
            _time: PhantomData,
        }
    }

    /// Allocates the next ID and renders it as a token.
    ///
    /// Blocks through per-millisecond sequence exhaustion (the wait ends at
    /// the next clock tick with the sequence reset to zero).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] if the clock stepped backward
    /// since the previous allocation; no partially formed token is ever
    /// returned.
    ///
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    pub fn new_token(&self) -> Result<EncodedToken> {
        let id = self.generator.next_id()?;
        Ok(id.encode())
    }
}
