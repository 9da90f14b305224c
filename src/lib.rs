//! A literate implementation of the NORX v3.0 authenticated encryption
//! scheme.
//!
//! NORX is a sponge-style AEAD built around a 16-word permutation `F`: a
//! [`Session`] fixes the word width, round count, lane count, and tag
//! length, then [`Session::aead_encrypt`]/[`Session::aead_decrypt`] drive
//! header, payload, and trailer bytes through duplexed absorb/encrypt/
//! decrypt phases, each domain-separated by a tag XORed into the state's
//! capacity before its permutation. When more than one lane is configured,
//! payload blocks are dispatched round-robin across independent lane
//! states, which are later merged back into one.
//!
//! The word width is resolved at compile time via the [`Word`] trait,
//! implemented for [`u32`] and [`u64`] — construct a [`Norx32`] or
//! [`Norx64`] (or `Session<u32>`/`Session<u64>` directly) rather than
//! passing the width as a runtime argument.

#[cfg(test)]
mod test;

mod duplex;
mod error;
mod padding;
mod parallel;
mod permutation;
mod session;
mod state;
mod tag;
mod word;

pub use {
    error::{Error, InvalidParameterKind},
    session::{Norx32, Norx64, Session},
    word::Word,
};
