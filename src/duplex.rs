//! The duplexing protocol: absorb, encrypt/decrypt, and finalize.
//!
//! Every routine here is a free function over `&mut [W; 16]` rather than a
//! method on [`State`](crate::state::State), so the same code serves both
//! the single-lane state and the raw per-lane arrays the parallel mode
//! dispatches blocks to.

use crate::{
    padding::{bytes_rate, pad, WORDS_CAPACITY, WORDS_RATE},
    permutation::f,
    state::State,
    tag,
    word::Word,
};

/// Build the initial state from a nonce, a key, and the session parameters.
///
/// Loads `N0..N3` and `K0..K3` from `nonce`/`key`, lays them out alongside
/// the width's initialization constants, mixes `(w, rounds, lanes,
/// tag_bits)` into the capacity, permutes, then re-mixes the key into the
/// capacity — the post-permutation key re-injection introduced in NORX
/// v3.0.
pub(crate) fn init<W: Word>(rounds: u8, lanes: u8, tag_bits: usize, nonce: &[u8], key: &[u8]) -> State<W> {
    let b = W::BYTES;
    let n: [W; 4] = std::array::from_fn(|i| W::load_le(&nonce[i * b..]));
    let k: [W; 4] = std::array::from_fn(|i| W::load_le(&key[i * b..]));
    let u = W::INIT;

    let mut s = [
        n[0], n[1], n[2], n[3], k[0], k[1], k[2], k[3], u[0], u[1], u[2], u[3], u[4], u[5], u[6],
        u[7],
    ];
    s[WORDS_RATE] ^= W::from_small((W::BYTES * 8) as u32);
    s[WORDS_RATE + 1] ^= W::from_small(rounds as u32);
    s[WORDS_RATE + 2] ^= W::from_small(lanes as u32);
    s[WORDS_RATE + 3] ^= W::from_small(tag_bits as u32);

    f(&mut s, rounds);
    mix_key(&mut s, &k);

    State::new(s)
}

/// Absorb `data` into `s`, XORing `domain_tag` into the capacity before each
/// block's permutation. A no-op if `data` is empty; otherwise every full
/// rate-sized block is absorbed directly and the trailing partial block
/// (possibly empty, if `data` is an exact multiple of the rate) is padded
/// first. The unconditional trailing block means an input that is an exact
/// multiple of the rate still absorbs one extra, all-padding block.
pub(crate) fn absorb<W: Word>(s: &mut [W; 16], rounds: u8, data: &[u8], domain_tag: u32) {
    if data.is_empty() {
        return;
    }

    let rate = bytes_rate::<W>();
    let tag = W::from_small(domain_tag);
    let mut offset = 0;
    while data.len() - offset >= rate {
        absorb_block(s, rounds, &data[offset..offset + rate], tag);
        offset += rate;
    }
    let padded = pad::<W>(&data[offset..]);
    absorb_block(s, rounds, &padded, tag);
}

fn absorb_block<W: Word>(s: &mut [W; 16], rounds: u8, block: &[u8], tag: W) {
    s[15] ^= tag;
    f(s, rounds);
    let b = W::BYTES;
    for (i, word) in s.iter_mut().take(WORDS_RATE).enumerate() {
        *word ^= W::load_le(&block[i * b..]);
    }
}

/// Encrypt `message` under `s`, returning the ciphertext. Empty if `message`
/// is empty.
pub(crate) fn encrypt<W: Word>(s: &mut [W; 16], rounds: u8, message: &[u8]) -> Vec<u8> {
    if message.is_empty() {
        return Vec::new();
    }

    let rate = bytes_rate::<W>();
    let mut out = Vec::with_capacity(message.len());
    let mut offset = 0;
    while message.len() - offset >= rate {
        let mut block = vec![0u8; rate];
        encrypt_block(s, rounds, &message[offset..offset + rate], &mut block);
        out.extend_from_slice(&block);
        offset += rate;
    }
    out.extend_from_slice(&encrypt_last(s, rounds, &message[offset..]));
    out
}

pub(crate) fn encrypt_block<W: Word>(s: &mut [W; 16], rounds: u8, block: &[u8], out: &mut [u8]) {
    s[15] ^= W::from_small(tag::PAYLOAD);
    f(s, rounds);
    let b = W::BYTES;
    for (i, word) in s.iter_mut().take(WORDS_RATE).enumerate() {
        *word ^= W::load_le(&block[i * b..]);
        word.store_le(&mut out[i * b..(i + 1) * b]);
    }
}

pub(crate) fn encrypt_last<W: Word>(s: &mut [W; 16], rounds: u8, partial: &[u8]) -> Vec<u8> {
    let padded = pad::<W>(partial);
    let mut out = vec![0u8; padded.len()];
    encrypt_block(s, rounds, &padded, &mut out);
    out.truncate(partial.len());
    out
}

/// Decrypt `ciphertext` under `s`, returning the plaintext. Empty if
/// `ciphertext` is empty.
pub(crate) fn decrypt<W: Word>(s: &mut [W; 16], rounds: u8, ciphertext: &[u8]) -> Vec<u8> {
    if ciphertext.is_empty() {
        return Vec::new();
    }

    let rate = bytes_rate::<W>();
    let mut out = Vec::with_capacity(ciphertext.len());
    let mut offset = 0;
    while ciphertext.len() - offset >= rate {
        let mut block = vec![0u8; rate];
        decrypt_block(s, rounds, &ciphertext[offset..offset + rate], &mut block);
        out.extend_from_slice(&block);
        offset += rate;
    }
    out.extend_from_slice(&decrypt_last(s, rounds, &ciphertext[offset..]));
    out
}

pub(crate) fn decrypt_block<W: Word>(s: &mut [W; 16], rounds: u8, block: &[u8], out: &mut [u8]) {
    s[15] ^= W::from_small(tag::PAYLOAD);
    f(s, rounds);
    let b = W::BYTES;
    for (i, word) in s.iter_mut().take(WORDS_RATE).enumerate() {
        let c = W::load_le(&block[i * b..]);
        (*word ^ c).store_le(&mut out[i * b..(i + 1) * b]);
        *word = c;
    }
}

pub(crate) fn decrypt_last<W: Word>(s: &mut [W; 16], rounds: u8, partial: &[u8]) -> Vec<u8> {
    s[15] ^= W::from_small(tag::PAYLOAD);
    f(s, rounds);

    let b = W::BYTES;
    let rate = bytes_rate::<W>();
    let mut buffer = vec![0u8; rate];
    for (i, word) in s.iter().take(WORDS_RATE).enumerate() {
        word.store_le(&mut buffer[i * b..(i + 1) * b]);
    }
    buffer[..partial.len()].copy_from_slice(partial);
    buffer[partial.len()] ^= 0x01;
    *buffer.last_mut().expect("rate is never zero") ^= 0x80;

    let mut m = vec![0u8; rate];
    for (i, word) in s.iter_mut().take(WORDS_RATE).enumerate() {
        let c = W::load_le(&buffer[i * b..]);
        (*word ^ c).store_le(&mut m[i * b..(i + 1) * b]);
        *word = c;
    }
    m.truncate(partial.len());
    m
}

/// Generate the final tag and consume the state.
///
/// Takes `State<W>` by value so that its zeroizing destructor runs
/// unconditionally once this function returns, regardless of which branch
/// produced the output.
pub(crate) fn generate_tag<W: Word>(mut state: State<W>, rounds: u8, key: &[u8], tag_bits: usize) -> Vec<u8> {
    let b = W::BYTES;
    let k: [W; 4] = std::array::from_fn(|i| W::load_le(&key[i * b..]));

    state.0[15] ^= W::from_small(tag::FINAL);
    f(&mut state.0, rounds);
    mix_key(&mut state.0, &k);
    f(&mut state.0, rounds);
    mix_key(&mut state.0, &k);

    let mut out = vec![0u8; WORDS_CAPACITY * b];
    for (i, word) in state.0.iter().skip(WORDS_RATE).enumerate() {
        word.store_le(&mut out[i * b..(i + 1) * b]);
    }
    out.truncate(tag_bits / 8);
    out
}

fn mix_key<W: Word>(s: &mut [W; 16], k: &[W; 4]) {
    s[WORDS_RATE] ^= k[0];
    s[WORDS_RATE + 1] ^= k[1];
    s[WORDS_RATE + 2] ^= k[2];
    s[WORDS_RATE + 3] ^= k[3];
}
