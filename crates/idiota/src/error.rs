use crate::codec::DecodeError;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `idiota` can produce while decoding an identifier.
///
/// Construction and the numeric conversions are infallible; only paths that
/// ingest an external representation return this type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A binary payload was not exactly 8 bytes long.
    #[error("invalid byte length: expected 8, got {len}")]
    InvalidByteLength { len: usize },

    /// A text payload exceeded the maximum accepted length.
    #[error("invalid string length: expected at most 13, got {len}")]
    InvalidStringLength { len: usize },

    /// The text codec strategy rejected the input.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A null scalar was offered where an identifier is required.
    #[error("unable to scan null into an id")]
    NilScalar,

    /// A scalar of an unsupported shape was offered.
    #[error("unable to scan {kind} into an id")]
    UnsupportedScalarType { kind: &'static str },
}
