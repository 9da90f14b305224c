use {
    crate::{
        duplex,
        error::{Error, InvalidParameterKind},
        parallel,
        word::Word,
    },
    std::marker::PhantomData,
};

/// An immutable set of NORX session parameters: word width `W` (resolved at
/// compile time), round count, lane count, and tag length.
///
/// A `Session` is cheap to build and reuse across many independent
/// `aead_encrypt`/`aead_decrypt` calls; it holds no key material itself —
/// each call is handed its own nonce and key and allocates its own 16-word
/// state on the stack.
#[derive(Debug, Clone, Copy)]
pub struct Session<W: Word> {
    rounds: u8,
    lanes: u8,
    tag_bits: usize,
    _word: PhantomData<W>,
}

/// `Session` parameterized for 32-bit words.
pub type Norx32 = Session<u32>;

/// `Session` parameterized for 64-bit words.
pub type Norx64 = Session<u64>;

impl<W: Word> Session<W> {
    /// The reference `PyNORX` default round count, `4`.
    pub const DEFAULT_ROUNDS: u8 = 4;

    /// The reference default lane count, `1` (no branch/merge).
    pub const DEFAULT_LANES: u8 = 1;

    /// The reference default tag length in bits: `4w`, the full capacity.
    pub const DEFAULT_TAG_BITS: usize = 4 * W::BYTES * 8;

    /// Build a session using [`Self::DEFAULT_ROUNDS`],
    /// [`Self::DEFAULT_LANES`], and [`Self::DEFAULT_TAG_BITS`].
    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(Self::DEFAULT_ROUNDS, Self::DEFAULT_LANES, Self::DEFAULT_TAG_BITS)
    }

    /// Build a session, validating `rounds`, `lanes`, and `tag_bits` up
    /// front. Fails before any key-dependent computation runs.
    pub fn new(rounds: u8, lanes: u8, tag_bits: usize) -> Result<Self, Error> {
        if !(1..=63).contains(&rounds) {
            return Err(Error::InvalidParameter(InvalidParameterKind::Rounds));
        }
        if lanes == 0 {
            return Err(Error::UnsupportedParallelism);
        }
        let max_tag_bits = 4 * W::BYTES * 8;
        if tag_bits % 8 != 0 || tag_bits > max_tag_bits {
            return Err(Error::InvalidParameter(InvalidParameterKind::TagLength));
        }

        Ok(Self {
            rounds,
            lanes,
            tag_bits,
            _word: PhantomData,
        })
    }

    /// Number of lanes this session branches into. `1` means payload
    /// encryption runs directly on the unified state, with no branch/merge.
    pub fn lanes(&self) -> u8 {
        self.lanes
    }

    /// Tag length, in bytes.
    pub fn tag_bytes(&self) -> usize {
        self.tag_bits / 8
    }

    fn check_nonce_key(&self, nonce: &[u8], key: &[u8]) -> Result<(), Error> {
        if key.len() != 4 * W::BYTES {
            return Err(Error::InvalidParameter(InvalidParameterKind::KeyLength));
        }
        if nonce.len() != 4 * W::BYTES {
            return Err(Error::InvalidParameter(InvalidParameterKind::NonceLength));
        }
        Ok(())
    }

    /// Encrypt and authenticate `message` under `key`/`nonce`, additionally
    /// authenticating (but not encrypting) `header` and `trailer`.
    ///
    /// Returns the ciphertext concatenated with a `tag_bytes()`-long tag.
    pub fn aead_encrypt(
        &self,
        header: &[u8],
        message: &[u8],
        trailer: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>, Error> {
        self.check_nonce_key(nonce, key)?;

        let mut state = duplex::init::<W>(self.rounds, self.lanes, self.tag_bits, nonce, key);
        duplex::absorb(&mut state.0, self.rounds, header, crate::tag::HEADER);

        let mut ciphertext = if self.lanes == 1 {
            duplex::encrypt(&mut state.0, self.rounds, message)
        } else {
            let mut lanes = parallel::branch(state, self.rounds, self.lanes);
            let c = parallel::encrypt_parallel(&mut lanes, self.rounds, message);
            state = parallel::merge(lanes, self.rounds);
            c
        };

        duplex::absorb(&mut state.0, self.rounds, trailer, crate::tag::TRAILER);
        let tag = duplex::generate_tag(state, self.rounds, key, self.tag_bits);
        ciphertext.extend_from_slice(&tag);
        Ok(ciphertext)
    }

    /// Decrypt and verify `ciphertext_and_tag`, which must end with a
    /// `tag_bytes()`-long tag.
    ///
    /// Returns `(true, Some(plaintext))` on success with non-empty
    /// plaintext, `(true, None)` on success with empty plaintext, or
    /// `(false, None)` if the tag does not verify — the plaintext is never
    /// returned alongside a failed verification.
    pub fn aead_decrypt(
        &self,
        header: &[u8],
        ciphertext_and_tag: &[u8],
        trailer: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> Result<(bool, Option<Vec<u8>>), Error> {
        self.check_nonce_key(nonce, key)?;

        let tag_bytes = self.tag_bytes();
        if ciphertext_and_tag.len() < tag_bytes {
            return Err(Error::InvalidParameter(
                InvalidParameterKind::CiphertextTooShort,
            ));
        }
        let split = ciphertext_and_tag.len() - tag_bytes;
        let (ciphertext, presented_tag) = ciphertext_and_tag.split_at(split);

        let mut state = duplex::init::<W>(self.rounds, self.lanes, self.tag_bits, nonce, key);
        duplex::absorb(&mut state.0, self.rounds, header, crate::tag::HEADER);

        let plaintext = if self.lanes == 1 {
            duplex::decrypt(&mut state.0, self.rounds, ciphertext)
        } else {
            let mut lanes = parallel::branch(state, self.rounds, self.lanes);
            let m = parallel::decrypt_parallel(&mut lanes, self.rounds, ciphertext);
            state = parallel::merge(lanes, self.rounds);
            m
        };

        duplex::absorb(&mut state.0, self.rounds, trailer, crate::tag::TRAILER);
        let computed_tag = duplex::generate_tag(state, self.rounds, key, self.tag_bits);

        if constant_time_eq(presented_tag, &computed_tag) {
            Ok((true, (!plaintext.is_empty()).then_some(plaintext)))
        } else {
            Ok((false, None))
        }
    }
}

/// Compare two equal-length byte strings in data-independent time: OR the
/// XOR of every byte pair, with no early exit, so the number of loop
/// iterations (and thus the timing) never depends on where the first
/// mismatch falls.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    acc == 0
}
