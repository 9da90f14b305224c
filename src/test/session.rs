//! End-to-end tests against the public `Session` API: spec §8's invariants
//! and scenario list, plus constructor/call-time parameter validation.

use crate::{Error, InvalidParameterKind, Norx32, Norx64, Session};

#[test]
fn rejects_rounds_out_of_range() {
    assert_eq!(
        Norx64::new(0, 1, 256).unwrap_err(),
        Error::InvalidParameter(InvalidParameterKind::Rounds)
    );
    assert_eq!(
        Norx64::new(64, 1, 256).unwrap_err(),
        Error::InvalidParameter(InvalidParameterKind::Rounds)
    );
    assert!(Norx64::new(63, 1, 256).is_ok());
    assert!(Norx64::new(1, 1, 256).is_ok());
}

#[test]
fn rejects_zero_lanes_as_unsupported_parallelism() {
    assert_eq!(Norx64::new(4, 0, 256).unwrap_err(), Error::UnsupportedParallelism);
}

#[test]
fn rejects_tag_bits_not_byte_aligned_or_too_long() {
    assert_eq!(
        Norx64::new(4, 1, 255).unwrap_err(),
        Error::InvalidParameter(InvalidParameterKind::TagLength)
    );
    assert_eq!(
        Norx64::new(4, 1, 257).unwrap_err(),
        Error::InvalidParameter(InvalidParameterKind::TagLength)
    );
    assert!(Norx64::new(4, 1, 256).is_ok());
    assert!(Norx64::new(4, 1, 0).is_ok());
}

#[test]
fn rejects_mismatched_key_and_nonce_lengths_before_encrypting() {
    let session = Norx64::with_defaults().unwrap();
    let key = vec![0u8; 32];
    let short_nonce = vec![0u8; 16];
    assert_eq!(
        session
            .aead_encrypt(&[], &[], &[], &short_nonce, &key)
            .unwrap_err(),
        Error::InvalidParameter(InvalidParameterKind::NonceLength)
    );

    let short_key = vec![0u8; 16];
    let nonce = vec![0u8; 32];
    assert_eq!(
        session
            .aead_encrypt(&[], &[], &[], &nonce, &short_key)
            .unwrap_err(),
        Error::InvalidParameter(InvalidParameterKind::KeyLength)
    );
}

#[test]
fn rejects_ciphertext_shorter_than_tag_before_decrypting() {
    let session = Norx64::with_defaults().unwrap();
    let key = vec![0u8; 32];
    let nonce = vec![0u8; 32];
    assert_eq!(
        session
            .aead_decrypt(&[], &[], &[], &nonce, &key)
            .unwrap_err(),
        Error::InvalidParameter(InvalidParameterKind::CiphertextTooShort)
    );
}

#[test]
fn round_trips_for_arbitrary_inputs() {
    let session = Session::<u64>::new(4, 1, 256).unwrap();
    let key = vec![0x7a; 32];
    let nonce = vec![0x5c; 32];
    let header = b"associated header data";
    let message = b"the quick brown fox jumps over the lazy dog, several times over";
    let trailer = b"trailer bytes";

    let out = session
        .aead_encrypt(header, message, trailer, &nonce, &key)
        .unwrap();
    let (ok, plaintext) = session
        .aead_decrypt(header, &out, trailer, &nonce, &key)
        .unwrap();
    assert!(ok);
    assert_eq!(plaintext.unwrap(), message);
}

#[test]
fn round_trips_with_multiple_lanes_and_several_blocks() {
    let session = Session::<u64>::new(4, 2, 256).unwrap();
    let key = vec![0xaa; 32];
    let nonce = vec![0xbb; 32];
    let message: Vec<u8> = (0..400).map(|i| i as u8).collect();

    let out = session.aead_encrypt(&[], &message, &[], &nonce, &key).unwrap();
    let (ok, plaintext) = session.aead_decrypt(&[], &out, &[], &nonce, &key).unwrap();
    assert!(ok);
    assert_eq!(plaintext.unwrap(), message);
}

#[test]
fn corrupting_the_last_ciphertext_byte_fails_verification() {
    let session = Session::<u64>::new(4, 1, 256).unwrap();
    let key = vec![0x01; 32];
    let nonce = vec![0x02; 32];
    let message = b"some secret payload";

    let mut out = session.aead_encrypt(&[], message, &[], &nonce, &key).unwrap();
    *out.last_mut().unwrap() ^= 0x01;

    let (ok, plaintext) = session.aead_decrypt(&[], &out, &[], &nonce, &key).unwrap();
    assert!(!ok);
    assert!(plaintext.is_none());
}

#[test]
fn flipping_any_single_input_byte_breaks_verification() {
    let session = Session::<u64>::new(4, 1, 256).unwrap();
    let key = vec![0x10; 32];
    let nonce = vec![0x20; 32];
    let header = b"header";
    let message = b"message";
    let trailer = b"trailer";

    let out = session
        .aead_encrypt(header, message, trailer, &nonce, &key)
        .unwrap();

    let mut bad_header = header.to_vec();
    bad_header[0] ^= 0x01;
    assert!(!session
        .aead_decrypt(&bad_header, &out, trailer, &nonce, &key)
        .unwrap()
        .0);

    let mut bad_trailer = trailer.to_vec();
    bad_trailer[0] ^= 0x01;
    assert!(!session
        .aead_decrypt(header, &out, &bad_trailer, &nonce, &key)
        .unwrap()
        .0);

    let mut bad_nonce = nonce.clone();
    bad_nonce[0] ^= 0x01;
    assert!(!session
        .aead_decrypt(header, &out, trailer, &bad_nonce, &key)
        .unwrap()
        .0);

    let mut bad_key = key.clone();
    bad_key[0] ^= 0x01;
    assert!(!session
        .aead_decrypt(header, &out, trailer, &nonce, &bad_key)
        .unwrap()
        .0);
}

#[test]
fn empty_payload_with_non_empty_header_and_trailer_yields_tag_only_output() {
    let session = Session::<u64>::new(4, 1, 256).unwrap();
    let key = vec![0u8; 32];
    let nonce = vec![0u8; 32];

    let out = session
        .aead_encrypt(b"header", &[], b"trailer", &nonce, &key)
        .unwrap();
    assert_eq!(out.len(), session.tag_bytes());

    let (ok, plaintext) = session
        .aead_decrypt(b"header", &out, b"trailer", &nonce, &key)
        .unwrap();
    assert!(ok);
    assert!(plaintext.is_none(), "empty plaintext decrypts to None, not Some(vec![])");
}

#[test]
fn encryption_is_deterministic() {
    let session = Session::<u64>::new(4, 1, 256).unwrap();
    let key = vec![0x42; 32];
    let nonce = vec![0x24; 32];
    let message = b"determinism";

    let a = session.aead_encrypt(&[], message, &[], &nonce, &key).unwrap();
    let b = session.aead_encrypt(&[], message, &[], &nonce, &key).unwrap();
    assert_eq!(a, b);
}

#[test]
fn default_all_zero_empty_input_scenario_w64() {
    let session = Norx64::with_defaults().unwrap();
    assert_eq!(session.tag_bytes(), 32);
    let key = vec![0u8; 32];
    let nonce = vec![0u8; 32];

    let out = session.aead_encrypt(&[], &[], &[], &nonce, &key).unwrap();
    assert_eq!(out.len(), 32, "empty H/M/T must yield exactly a 32-byte tag");

    let (ok, plaintext) = session.aead_decrypt(&[], &out, &[], &nonce, &key).unwrap();
    assert!(ok);
    assert!(plaintext.is_none());
}

#[test]
fn default_all_zero_empty_input_scenario_w32() {
    let session = Norx32::with_defaults().unwrap();
    assert_eq!(session.tag_bytes(), 16);
    let key = vec![0u8; 16];
    let nonce = vec![0u8; 16];

    let out = session.aead_encrypt(&[], &[], &[], &nonce, &key).unwrap();
    assert_eq!(out.len(), 16, "empty H/M/T must yield exactly a 16-byte tag");

    let (ok, plaintext) = session.aead_decrypt(&[], &out, &[], &nonce, &key).unwrap();
    assert!(ok);
    assert!(plaintext.is_none());
}

#[test]
fn exact_rate_sized_payload_round_trips() {
    // 12 rate words * 8 bytes = 96 bytes at w=64; still implicitly absorbs
    // a padded empty trailing block per spec 4.5/4.7, but that must not be
    // observable as extra ciphertext length.
    let session = Session::<u64>::new(4, 1, 256).unwrap();
    let key = vec![0x07; 32];
    let nonce = vec![0x09; 32];
    let message = vec![0x5a; 96];

    let out = session.aead_encrypt(&[], &message, &[], &nonce, &key).unwrap();
    assert_eq!(out.len(), message.len() + session.tag_bytes());

    let (ok, plaintext) = session.aead_decrypt(&[], &out, &[], &nonce, &key).unwrap();
    assert!(ok);
    assert_eq!(plaintext.unwrap(), message);
}
