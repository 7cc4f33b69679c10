mod iota;

pub use iota::*;
