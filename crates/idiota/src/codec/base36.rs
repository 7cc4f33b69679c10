use crate::codec::{BINARY_LEN, DecodeError, MAX_TEXT_LEN, TextCodec};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;
const RADIX: u64 = 36;

/// Lookup table for base36 decoding, accepting both letter cases.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 36 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i; // uppercase letter
        }
        i += 1;
    }
    lut
};

/// Fixed-width base36 strategy.
///
/// The 8-byte binary form is read as one big-endian `u64` and written as
/// exactly [`MAX_TEXT_LEN`] lowercase digits, zero-padded on the left, so the
/// text sorts in the same order as the numeric value.
///
/// Decoding is case-insensitive and accepts shorter, unpadded input; it always
/// yields 8 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Base36;

impl TextCodec for Base36 {
    const NAME: &'static str = "base36";
    // Canonical base36 text is always 13 characters.
    const BINARY_SCALARS: bool = true;

    fn encode(bytes: &[u8; BINARY_LEN]) -> String {
        let mut buf = [b'0'; MAX_TEXT_LEN];
        encode_base36(u64::from_be_bytes(*bytes), &mut buf);
        buf.iter().map(|&b| b as char).collect()
    }

    fn decode(text: &[u8]) -> Result<Vec<u8>, DecodeError> {
        decode_base36(text).map(|raw| raw.to_be_bytes().to_vec())
    }
}

/// Writes `value` into `buf` as base36 digits, most significant first.
///
/// Positions not reached by the value keep their existing content, so `buf`
/// should be pre-filled with `b'0'`.
fn encode_base36(mut value: u64, buf: &mut [u8; MAX_TEXT_LEN]) {
    for slot in buf.iter_mut().rev() {
        if value == 0 {
            break;
        }
        *slot = ALPHABET[(value % RADIX) as usize];
        value /= RADIX;
    }
}

fn decode_base36(encoded: &[u8]) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }
    let mut acc = 0_u64;
    for (index, &byte) in encoded.iter().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(DecodeError::InvalidChar { byte, index });
        }
        acc = acc
            .checked_mul(RADIX)
            .and_then(|acc| acc.checked_add(u64::from(val)))
            .ok_or(DecodeError::Overflow)?;
    }
    Ok(acc)
}
