use {
    docext::docext,
    std::{fmt, ops},
};

/// A NORX state word, either 32 or 64 bits wide.
///
/// NORX is defined generically over a word size $w \in \{32, 64\}$; rather
/// than carry `w` as a runtime field and branch on it, this crate resolves
/// it at compile time by implementing `Word` for [`u32`] and [`u64`]. Every
/// permutation, padding, and duplex routine is generic over `W: Word`, so
/// the two word widths compile to independent, branch-free code paths.
#[docext]
pub trait Word:
    Copy
    + Default
    + PartialEq
    + Eq
    + fmt::Debug
    + ops::BitXor<Output = Self>
    + ops::BitXorAssign
    + ops::Not<Output = Self>
    + zeroize::Zeroize
    + 'static
{
    /// Width of the word in bytes.
    const BYTES: usize;

    /// Rotation amounts `(R0, R1, R2, R3)` used by the [quarter
    /// round](crate::permutation::g).
    const ROT: [u32; 4];

    /// The eight initialization constants `U0..U7` mixed into the capacity
    /// words during [`State::init`](crate::state::State::init).
    const INIT: [Self; 8];

    /// Rotate right by `n` bit positions.
    fn rotr(self, n: u32) -> Self;

    /// NORX's nonlinear "approximate addition": $(a \oplus b) \oplus
    /// ((a \wedge b) \ll 1)$. Used in place of integer addition so the
    /// permutation has no carry chain to leak through timing.
    fn h(a: Self, b: Self) -> Self;

    /// Decode a little-endian word from the first `Self::BYTES` bytes of
    /// `buf`.
    fn load_le(buf: &[u8]) -> Self;

    /// Encode `self` as `Self::BYTES` little-endian bytes into `out`.
    fn store_le(self, out: &mut [u8]);

    /// Widen a small integer (a round count, lane index, or parameter) into
    /// a word, for XORing into the capacity or rate.
    fn from_small(n: u32) -> Self;
}

impl Word for u32 {
    const BYTES: usize = 4;
    const ROT: [u32; 4] = [8, 11, 16, 31];
    const INIT: [Self; 8] = [
        0xA3D8D930, 0x3FA8B72C, 0xED84EB49, 0xEDCA4787, 0x335463EB, 0xF994220B, 0xBE0BF5C9,
        0xD7C49104,
    ];

    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    fn h(a: Self, b: Self) -> Self {
        (a ^ b) ^ ((a & b) << 1)
    }

    fn load_le(buf: &[u8]) -> Self {
        Self::from_le_bytes(buf[..4].try_into().expect("4-byte slice"))
    }

    fn store_le(self, out: &mut [u8]) {
        out[..4].copy_from_slice(&self.to_le_bytes());
    }

    fn from_small(n: u32) -> Self {
        n
    }
}

impl Word for u64 {
    const BYTES: usize = 8;
    const ROT: [u32; 4] = [8, 19, 40, 63];
    const INIT: [Self; 8] = [
        0xB15E641748DE5E6B,
        0xAA95E955E10F8410,
        0x28D1034441A9DD40,
        0x7F31BBF964E93BF5,
        0xB5E9E22493DFFB96,
        0xB980C852479FAFBD,
        0xDA24516BF55EAFD4,
        0x86026AE8536F1501,
    ];

    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    fn h(a: Self, b: Self) -> Self {
        (a ^ b) ^ ((a & b) << 1)
    }

    fn load_le(buf: &[u8]) -> Self {
        Self::from_le_bytes(buf[..8].try_into().expect("8-byte slice"))
    }

    fn store_le(self, out: &mut [u8]) {
        out[..8].copy_from_slice(&self.to_le_bytes());
    }

    fn from_small(n: u32) -> Self {
        n as u64
    }
}
