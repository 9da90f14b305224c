//! The parallel branch/round-robin/merge mode (spec 4.7).
//!
//! "Parallel" describes the cryptographic construction — independent lane
//! states distinguished by an XORed lane index — not runtime parallelism.
//! Lanes here are processed strictly sequentially, in a `Vec<Lane<W>>` of
//! fixed length `p` built once by [`branch`], never a map keyed by integer.

use crate::{
    padding::{bytes_rate, WORDS_RATE},
    permutation::f,
    state::{Lane, State},
    tag,
    word::Word,
};

/// Branch a post-header state into `lanes` independent lanes.
///
/// XORs the `BRANCH` tag into the capacity and permutes once, then copies
/// the result into `lanes` lanes, XORing the lane index into every rate
/// word of lanes `1..lanes` (lane 0's XOR with 0 is a no-op, but it is still
/// conceptually assigned). The incoming state is consumed and zeroized.
pub(crate) fn branch<W: Word>(mut state: State<W>, rounds: u8, lanes: u8) -> Vec<Lane<W>> {
    state.0[15] ^= W::from_small(tag::BRANCH);
    f(&mut state.0, rounds);

    (0..lanes)
        .map(|i| {
            let mut words = state.0;
            if i > 0 {
                let idx = W::from_small(i as u32);
                for word in words.iter_mut().take(WORDS_RATE) {
                    *word ^= idx;
                }
            }
            Lane::new(words)
        })
        .collect()
}

/// Round-robin-encrypt `message` across `lanes`. Block `j` (0-indexed) goes
/// to lane `j mod p`; the trailing partial block goes to lane
/// `floor(|message| / bytes_rate) mod p`.
pub(crate) fn encrypt_parallel<W: Word>(lanes: &mut [Lane<W>], rounds: u8, message: &[u8]) -> Vec<u8> {
    if message.is_empty() {
        return Vec::new();
    }

    let rate = bytes_rate::<W>();
    let p = lanes.len();
    let mut out = Vec::with_capacity(message.len());
    let mut offset = 0;
    let mut lane = 0usize;
    while message.len() - offset >= rate {
        let mut block = vec![0u8; rate];
        crate::duplex::encrypt_block(
            &mut lanes[lane % p].0,
            rounds,
            &message[offset..offset + rate],
            &mut block,
        );
        out.extend_from_slice(&block);
        offset += rate;
        lane += 1;
    }
    out.extend_from_slice(&crate::duplex::encrypt_last(
        &mut lanes[lane % p].0,
        rounds,
        &message[offset..],
    ));
    out
}

/// The decryption counterpart of [`encrypt_parallel`], with the same
/// round-robin dispatch.
pub(crate) fn decrypt_parallel<W: Word>(lanes: &mut [Lane<W>], rounds: u8, ciphertext: &[u8]) -> Vec<u8> {
    if ciphertext.is_empty() {
        return Vec::new();
    }

    let rate = bytes_rate::<W>();
    let p = lanes.len();
    let mut out = Vec::with_capacity(ciphertext.len());
    let mut offset = 0;
    let mut lane = 0usize;
    while ciphertext.len() - offset >= rate {
        let mut block = vec![0u8; rate];
        crate::duplex::decrypt_block(
            &mut lanes[lane % p].0,
            rounds,
            &ciphertext[offset..offset + rate],
            &mut block,
        );
        out.extend_from_slice(&block);
        offset += rate;
        lane += 1;
    }
    out.extend_from_slice(&crate::duplex::decrypt_last(
        &mut lanes[lane % p].0,
        rounds,
        &ciphertext[offset..],
    ));
    out
}

/// Merge `lanes` back into a single state.
///
/// Each lane is tagged with `MERGE`, permuted, and XOR-accumulated into a
/// zero state in index order; the lane is then dropped, which overwrites
/// its words with all-ones (spec 4.7's destruction step) before the next
/// lane is processed. The XOR accumulation is commutative, but the tag
/// mixing and permutation of a lane must complete before that lane's words
/// are folded in, which sequential iteration over an owned `Vec` guarantees.
pub(crate) fn merge<W: Word>(lanes: Vec<Lane<W>>, rounds: u8) -> State<W> {
    let mut s = [W::default(); 16];
    for mut lane in lanes {
        lane.0[15] ^= W::from_small(tag::MERGE);
        f(&mut lane.0, rounds);
        for (acc, word) in s.iter_mut().zip(lane.0.iter()) {
            *acc ^= *word;
        }
    }
    State::new(s)
}
