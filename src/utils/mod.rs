pub mod rng;

pub use rng::{RngStream, rng_from_seed};
