//! Domain-separation tags.
//!
//! Each duplex phase XORs a single distinguishing bit into `S[15]` before
//! running the permutation, so that header, payload, trailer, finalization,
//! branch, and merge invocations of `F` can never be confused with one
//! another even if the surrounding bytes coincide.

pub(crate) const HEADER: u32 = 0x01;
pub(crate) const PAYLOAD: u32 = 0x02;
pub(crate) const TRAILER: u32 = 0x04;
pub(crate) const FINAL: u32 = 0x08;
pub(crate) const BRANCH: u32 = 0x10;
pub(crate) const MERGE: u32 = 0x20;
