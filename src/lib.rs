pub mod core;
pub mod spaces;
pub mod utils;
pub mod envs;

pub use crate::core::{Env, EnvError, Info, InfoValue, RenderFrame, Result, Step};
pub use crate::envs::{BitFlipConfig, BitFlipEnv, BitFlipObs, compute_reward};
pub use crate::spaces::{BoxSpace, DictSpace, Discrete, MultiBinary, Space};
pub use crate::utils::{RngStream, rng_from_seed};
