/// The base-56 alphabet: digits and letters with visually ambiguous
/// characters (`0`, `1`, `I`, `O`, `l`) removed.
///
/// The symbols are in ascending ASCII order, so tokens of equal width sort
/// lexicographically in the same order as their numeric values.
pub const ALPHABET: &[u8; 56] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";

/// The numeric base implied by [`ALPHABET`].
pub const BASE: u64 = ALPHABET.len() as u64;

/// Minimum token width. Shorter renderings are left-padded with the
/// alphabet's first character (`2`) so all small values encode to a uniform
/// width.
pub const MIN_TOKEN_LEN: usize = 8;

/// Maximum token width: the most base-56 digits a `u64` can occupy
/// (`ceil(64 / log2(56))`).
pub const MAX_TOKEN_LEN: usize = 12;

/// Encodes `value` as base-56 digits at the tail of `buf`, left-padding to
/// [`MIN_TOKEN_LEN`]. Returns the index of the first written byte.
///
/// Digits are produced least-significant first by repeated division, but
/// writing them back-to-front yields most-significant-first order without a
/// reversal pass. An input of zero produces no digits from the division
/// loop at all; the padding pass alone emits the minimum-width, all-`'2'`
/// rendering, which keeps the function total.
pub(crate) fn encode_base56(mut value: u64, buf: &mut [u8; MAX_TOKEN_LEN]) -> usize {
    let mut pos = MAX_TOKEN_LEN;
    while value > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
    }
    while MAX_TOKEN_LEN - pos < MIN_TOKEN_LEN {
        pos -= 1;
        buf[pos] = ALPHABET[0];
    }
    pos
}
