//! Compact, sortable 64-bit identifiers.
//!
//! An [`IotaId`] packs a 32-bit Unix timestamp (seconds) and a 32-bit random
//! field into a single `u64`:
//!
//! ```text
//!  Bit Index:  63              32 31            0
//!              +-----------------+--------------+
//!  Field:      | timestamp (32)  | random (32)  |
//!              +-----------------+--------------+
//!              |<-- MSB -- 64 bits -- LSB ----->|
//! ```
//!
//! The same value is exposed as 8 big-endian bytes, as text through a
//! [`TextCodec`] strategy ([`Base36`] by default, [`Base58`] with the `base58`
//! feature), as a JSON string (`serde` feature), and as a database [`Scalar`].
//!
//! The strategy is a type parameter chosen once per deployment, normally
//! through one of the aliases [`IotaId36`] or `IotaId58`.
//!
//! ```
//! use idiota::IotaId36;
//!
//! let id = IotaId36::from_parts(1_700_000_000, 123_456_789);
//! let text = id.encode();
//! assert_eq!(text, "1jh0y113ytr85");
//! assert_eq!(IotaId36::decode(&text).unwrap(), id);
//! assert_eq!(id.to_u64(), (1_700_000_000_u64 << 32) | 123_456_789);
//! ```

mod codec;
mod error;
mod generator;
mod id;
pub mod rand;
mod scalar;
#[cfg(feature = "serde")]
pub mod serde;
mod time;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::{GlobalRandom, RandSource, ThreadRandom, set_default_rand};
pub use crate::scalar::*;
pub use crate::time::*;
