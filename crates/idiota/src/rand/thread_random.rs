use crate::rand::RandSource;
use ::rand::{Rng, rng};

/// Fills the 32-bit random field from `rand::rng()`.
///
/// The generator behind it is thread-local, ChaCha-based and reseeds itself,
/// so ids built on different threads never contend for it. Nothing is stored
/// in the value, which keeps it `Send + Sync` and free to share.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand(&self) -> u32 {
        rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draws_u32_without_annotation() {
        let values: HashSet<_> = (0..32).map(|_| ThreadRandom.rand()).collect();
        let _: &HashSet<u32> = &values;
        assert!(values.len() > 1);
    }
}
