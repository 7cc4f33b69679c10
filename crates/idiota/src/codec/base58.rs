use crate::codec::{BINARY_LEN, DecodeError, TextCodec};

/// Variable-width base58 strategy using the Bitcoin alphabet.
///
/// Encodes the 8 raw bytes with [`bs58`], so the output length depends on the
/// value (leading zero bytes become leading `1`s) and text order does not
/// follow numeric order. Every canonical string decodes back to exactly 8
/// bytes; shorter non-canonical strings are rejected by the strict binary
/// decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Base58;

impl TextCodec for Base58 {
    const NAME: &'static str = "base58";
    // The zero id encodes as "11111111", so 8-byte scalars may be text.
    const BINARY_SCALARS: bool = false;

    fn encode(bytes: &[u8; BINARY_LEN]) -> String {
        bs58::encode(bytes).into_string()
    }

    fn decode(text: &[u8]) -> Result<Vec<u8>, DecodeError> {
        if text.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(bs58::decode(text).into_vec()?)
    }
}
