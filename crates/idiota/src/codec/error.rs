/// Errors raised by a [`TextCodec`](crate::TextCodec) strategy while turning
/// text back into bytes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input was empty.
    #[error("empty input")]
    Empty,

    /// The input contained a byte outside the strategy's alphabet.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    InvalidChar { byte: u8, index: usize },

    /// The decoded value does not fit in 64 bits.
    #[error("decoded value overflows 64 bits")]
    Overflow,

    /// The `bs58` decoder rejected the input.
    #[cfg(feature = "base58")]
    #[error("base58: {0}")]
    Base58(#[from] bs58::decode::Error),
}
