use std::fmt;

/// An error constructing a [`Session`](crate::session::Session) or calling
/// one of its AEAD methods.
///
/// Authentication failure is deliberately **not** a variant here: per spec,
/// a tag mismatch is reported through the `bool` in
/// [`Session::aead_decrypt`](crate::session::Session::aead_decrypt)'s return
/// value, not as a propagated error, so that callers cannot accidentally
/// `?`-away a failed verification and keep using the plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// One of the session or call parameters was out of range.
    InvalidParameter(InvalidParameterKind),
    /// `lanes == 0` was requested. NORX v3.0 reserves `P = 0` for
    /// "infinite parallelism", which this implementation does not support.
    UnsupportedParallelism,
}

/// The specific parameter rejected by [`Error::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameterKind {
    /// `rounds` was not in `1..=63`.
    Rounds,
    /// `tag_bits` was not a multiple of 8, or exceeded `4 * w`.
    TagLength,
    /// The supplied key was not exactly `4 * bytes_per_word` bytes.
    KeyLength,
    /// The supplied nonce was not exactly `4 * bytes_per_word` bytes.
    NonceLength,
    /// The ciphertext-plus-tag buffer was shorter than the tag itself.
    CiphertextTooShort,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(kind) => write!(f, "invalid parameter: {kind}"),
            Self::UnsupportedParallelism => {
                write!(f, "infinite parallelism (lanes = 0) is not supported")
            }
        }
    }
}

impl fmt::Display for InvalidParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rounds => "rounds must be in 1..=63",
            Self::TagLength => "tag length must be a multiple of 8 bits and at most 4w bits",
            Self::KeyLength => "key length does not match the word width",
            Self::NonceLength => "nonce length does not match the word width",
            Self::CiphertextTooShort => "ciphertext is shorter than the tag",
        };
        f.write_str(s)
    }
}

impl std::error::Error for Error {}
