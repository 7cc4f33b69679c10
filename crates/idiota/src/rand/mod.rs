//! Random sources for the identifier's 32-bit random field.
//!
//! [`ThreadRandom`] is the standard source. [`GlobalRandom`] reads the
//! process-wide default, which can be replaced once at startup through
//! [`set_default_rand`] (for example with a seeded source in deterministic
//! test binaries).

mod global;
mod interface;
mod thread_random;

pub use global::*;
pub use interface::*;
pub use thread_random::*;
