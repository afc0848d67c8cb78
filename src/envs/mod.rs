pub mod bit_flip;

pub use bit_flip::{BitFlipConfig, BitFlipEnv, BitFlipObs, compute_reward};
