//! Tests for `pad`'s 10*1 byte-level padding.

use crate::padding::{bytes_rate, pad};

#[test]
fn pads_empty_input_32() {
    let rate = bytes_rate::<u32>();
    let padded = pad::<u32>(&[]);
    assert_eq!(padded.len(), rate);
    assert_eq!(padded[0], 0x01);
    assert_eq!(*padded.last().unwrap(), 0x80);
    assert!(padded[1..rate - 1].iter().all(|&b| b == 0));
}

#[test]
fn pads_partial_input_64() {
    let rate = bytes_rate::<u64>();
    let data = b"hello, norx";
    let padded = pad::<u64>(data);
    assert_eq!(padded.len(), rate);
    assert_eq!(&padded[..data.len()], data);
    assert_eq!(padded[data.len()], 0x01);
    assert!(padded[data.len() + 1..rate - 1].iter().all(|&b| b == 0));
    assert_eq!(*padded.last().unwrap(), 0x80);
}

#[test]
fn single_byte_short_of_full_rate_xors_both_bits_into_last_byte() {
    let rate = bytes_rate::<u32>();
    let data = vec![0xffu8; rate - 1];
    let padded = pad::<u32>(&data);
    assert_eq!(&padded[..rate - 1], data.as_slice());
    // The 0x01 padding bit and the 0x80 terminator both land on the last byte.
    assert_eq!(*padded.last().unwrap(), 0x01 ^ 0x80);
}
