//! The 16-word sponge state and its parallel-mode lanes.
//!
//! Both types exist only to attach the right destruction discipline to a
//! bare `[W; 16]`: a [`State`] is wiped to all-zero words when dropped, a
//! [`Lane`] is wiped to all-one words, matching spec 4.7's "destroy SL\[i\]"
//! step. Every permutation and duplex routine operates on the plain array
//! via `.0`, so `State` and `Lane` add no overhead beyond the destructor.

use {crate::word::Word, zeroize::Zeroize};

/// The single unified sponge state, 16 words wide.
///
/// Zeroized automatically when dropped, including on early returns from
/// [`Session::aead_encrypt`](crate::session::Session::aead_encrypt) and
/// [`Session::aead_decrypt`](crate::session::Session::aead_decrypt) — the
/// state never outlives the call that produced it.
#[derive(zeroize::ZeroizeOnDrop)]
pub(crate) struct State<W: Word>(pub [W; 16]);

impl<W: Word> State<W> {
    pub(crate) fn new(words: [W; 16]) -> Self {
        Self(words)
    }
}

/// One lane of the parallel mode, also 16 words wide.
///
/// Unlike [`State`], a lane is destroyed by overwriting its words with
/// all-ones rather than zero, per spec 4.7. `zeroize` has no "one-ize"
/// primitive, so the overwrite is done by hand and each written word is
/// passed through [`std::hint::black_box`] to keep the compiler from
/// proving the write dead and eliding it.
pub(crate) struct Lane<W: Word>(pub [W; 16]);

impl<W: Word> Lane<W> {
    pub(crate) fn new(words: [W; 16]) -> Self {
        Self(words)
    }
}

impl<W: Word> Drop for Lane<W> {
    fn drop(&mut self) {
        let ones = !W::default();
        self.0 = [ones; 16];
        self.0.iter().for_each(|word| {
            std::hint::black_box(word);
        });
    }
}
