use crate::codec::DecodeError;

/// Size in bytes of the binary form of an identifier.
pub const BINARY_LEN: usize = 8;

/// Upper bound on the length of text accepted by any decode path.
///
/// This is the width of a 64-bit value in base 36, the smallest base used
/// for text forms. Longer inputs are rejected before the strategy runs.
pub const MAX_TEXT_LEN: usize = 13;

/// A strategy converting the 8-byte binary form of an identifier to and from
/// text.
///
/// A strategy is chosen once per deployment as the type parameter of
/// [`IotaId`](crate::IotaId); the identifier itself never depends on which
/// alphabet is in use.
///
/// # Example
///
/// ```
/// use idiota::{Base36, TextCodec};
///
/// let text = Base36::encode(&[0, 0, 0, 0, 0, 0, 0, 35]);
/// assert_eq!(text, "000000000000z");
/// assert_eq!(Base36::decode(text.as_bytes()).unwrap(), vec![0, 0, 0, 0, 0, 0, 0, 35]);
/// ```
pub trait TextCodec {
    /// Human-readable strategy name, used in diagnostics.
    const NAME: &'static str;

    /// Whether an 8-byte byte-sequence scalar is read as raw binary.
    ///
    /// Must only be `true` when no canonical text of this strategy is exactly
    /// 8 characters long, otherwise byte scalars would be ambiguous.
    const BINARY_SCALARS: bool;

    /// Encodes the big-endian binary form into text.
    fn encode(bytes: &[u8; BINARY_LEN]) -> String;

    /// Decodes text into bytes.
    ///
    /// The returned buffer is not length-checked here; callers run it through
    /// the strict binary decoder, which rejects anything but 8 bytes.
    fn decode(text: &[u8]) -> Result<Vec<u8>, DecodeError>;
}
