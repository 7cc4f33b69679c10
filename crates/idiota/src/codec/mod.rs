mod base36;
#[cfg(feature = "base58")]
mod base58;
mod error;
mod interface;

pub use base36::*;
#[cfg(feature = "base58")]
pub use base58::*;
pub use error::*;
pub use interface::*;
