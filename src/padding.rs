//! Byte-level 10*1 padding of the final, partial rate-sized block.

use crate::word::Word;

/// Number of words in the rate portion of the state (words 0..11).
pub(crate) const WORDS_RATE: usize = 12;

/// Number of words in the capacity portion of the state (words 12..15).
pub(crate) const WORDS_CAPACITY: usize = 4;

/// Size of the rate, in bytes, for word width `W`.
pub(crate) const fn bytes_rate<W: Word>() -> usize {
    WORDS_RATE * W::BYTES
}

/// Pad `x` into a freshly allocated rate-sized buffer.
///
/// The bytes of `x` are copied verbatim, the byte immediately following them
/// is XORed with `0x01`, and the last byte of the buffer is XORed with
/// `0x80`. Callers must only pad the final, partial block of a message —
/// `x.len()` must be strictly less than the rate.
pub(crate) fn pad<W: Word>(x: &[u8]) -> Vec<u8> {
    let rate = bytes_rate::<W>();
    debug_assert!(x.len() < rate, "pad() called on a full block");

    let mut y = vec![0u8; rate];
    y[..x.len()].copy_from_slice(x);
    y[x.len()] ^= 0x01;
    *y.last_mut().expect("rate is never zero") ^= 0x80;
    y
}
