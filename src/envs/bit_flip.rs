use crate::core::{Env, EnvError, Info, Result, Step};
use crate::spaces::{BoxSpace, DictSpace, Discrete, MultiBinary, Space};
use crate::utils::rng::{RngStream, rng_from_seed};

/// Reward for an arbitrary pair of achieved/desired goal vectors:
/// `0.0` when they match element-wise, `-1.0` otherwise.
///
/// Hindsight relabeling rescores stored transitions against goals other
/// than the episode's own, so this is a free function rather than a method
/// on a live environment. It is generic over the element type to accept
/// both raw 0/1 bit vectors and encoded observation vectors.
pub fn compute_reward<T: PartialEq>(achieved: &[T], desired: &[T]) -> f32 {
    if achieved == desired { 0.0 } else { -1.0 }
}

/// Construction parameters for [`BitFlipEnv`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitFlipConfig {
    /// Number of bits in the state and goal vectors. Must be at least 1.
    pub bit_length: usize,
    /// Episode step budget. `None` defaults to `bit_length`; `Some(0)` means
    /// unbounded; any other value is the bound itself.
    pub max_steps: Option<u32>,
    /// Encode observation bits as -1/+1 instead of 0/1.
    pub mean_zero: bool,
}

impl Default for BitFlipConfig {
    fn default() -> Self {
        Self { bit_length: 16, max_steps: None, mean_zero: false }
    }
}

/// A snapshot of the environment's (possibly encoded) state and goal.
///
/// Both vectors are independent copies frozen at the moment of the call:
/// later steps never show through a previously returned observation, and
/// mutating an observation never touches the environment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitFlipObs {
    pub state: Vec<f32>,
    pub goal: Vec<f32>,
}

#[cfg(feature = "ndarray")]
impl BitFlipObs {
    /// Copy the state vector into an `ndarray::Array1`.
    pub fn state_array(&self) -> ndarray::Array1<f32> {
        ndarray::Array1::from_vec(self.state.clone())
    }

    /// Copy the goal vector into an `ndarray::Array1`.
    pub fn goal_array(&self) -> ndarray::Array1<f32> {
        ndarray::Array1::from_vec(self.goal.clone())
    }
}

/// Goal-conditioned bit-flip environment.
///
/// Observation: `"state"` and `"goal"` bit vectors of length `bit_length`
/// Action space: `Discrete(bit_length)`, the index of the bit to flip
/// Reward: `0.0` once the state matches the goal, `-1.0` per step otherwise
///
/// Each episode starts from a uniformly random state and a goal guaranteed
/// to differ from it in at least one position. The episode terminates when
/// the state matches the goal and truncates when the step budget runs out;
/// the driving loop is responsible for resetting afterwards (there is no
/// auto-reset).
#[derive(Debug)]
pub struct BitFlipEnv {
    bit_length: usize,
    // Resolved budget: None means unbounded.
    max_steps: Option<u32>,
    mean_zero: bool,

    state: Vec<u8>,
    goal: Vec<u8>,
    steps: u32,

    rng: RngStream,
}

impl Default for BitFlipEnv {
    fn default() -> Self {
        Self::new(16, 8_675_309).expect("16 is a valid bit length")
    }
}

impl BitFlipEnv {
    /// Create an environment over `bit_length` bits with default options
    /// (step budget of `bit_length`, 0/1 observation encoding).
    ///
    /// Fails with [`EnvError::InvalidConfiguration`] when `bit_length < 1`.
    /// Construction performs an initial reset, so the environment is ready
    /// to step immediately.
    pub fn new(bit_length: usize, seed: u64) -> Result<Self> {
        Self::with_config(BitFlipConfig { bit_length, ..BitFlipConfig::default() }, seed)
    }

    /// Create an environment from a full [`BitFlipConfig`].
    pub fn with_config(config: BitFlipConfig, seed: u64) -> Result<Self> {
        if config.bit_length < 1 {
            return Err(EnvError::InvalidConfiguration(format!(
                "bit_length must be >= 1, found {}",
                config.bit_length
            )));
        }
        let max_steps = match config.max_steps {
            None => Some(config.bit_length as u32),
            Some(0) => None,
            Some(n) => Some(n),
        };
        let mut env = Self {
            bit_length: config.bit_length,
            max_steps,
            mean_zero: config.mean_zero,
            state: Vec::new(),
            goal: Vec::new(),
            steps: 0,
            rng: rng_from_seed(seed),
        };
        let _ = env.reset(None);
        Ok(env)
    }

    /// Number of bits in the state and goal vectors.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// The resolved episode step budget; `None` means unbounded.
    pub fn max_steps(&self) -> Option<u32> {
        self.max_steps
    }

    /// The action space: one discrete action per flippable bit.
    pub fn action_space(&self) -> Discrete {
        Discrete::new(self.bit_length as u32)
    }

    /// The observation space: a `"state"` box and a `"goal"` box, bounded
    /// `[0, 1]` (or `[-1, 1]` under mean-zero encoding, so that declared
    /// bounds always match emitted values).
    pub fn observation_space(&self) -> DictSpace {
        let (low, high) = if self.mean_zero { (-1.0, 1.0) } else { (0.0, 1.0) };
        DictSpace::new()
            .with("state", BoxSpace::uniform(low, high, self.bit_length))
            .with("goal", BoxSpace::uniform(low, high, self.bit_length))
    }

    fn solved(&self) -> bool {
        self.state == self.goal
    }

    fn out_of_steps(&self) -> bool {
        self.max_steps.is_some_and(|limit| self.steps >= limit)
    }

    // Observation-only encoding; internal storage stays 0/1.
    fn encode(&self, bits: &[u8]) -> Vec<f32> {
        if self.mean_zero {
            bits.iter().map(|&b| (f32::from(b) - 0.5) / 0.5).collect()
        } else {
            bits.iter().map(|&b| f32::from(b)).collect()
        }
    }

    fn observation(&self) -> BitFlipObs {
        BitFlipObs {
            state: self.encode(&self.state),
            goal: self.encode(&self.goal),
        }
    }
}

impl Env for BitFlipEnv {
    type Obs = BitFlipObs;
    type Act = u32;

    fn reset(&mut self, seed: Option<u64>) -> (Self::Obs, Info) {
        if let Some(s) = seed {
            self.rng = rng_from_seed(s);
        }
        self.steps = 0;
        let bits = MultiBinary::new(self.bit_length);
        self.state = bits.sample(&mut self.rng);
        // Resample the goal until it differs from the initial state in at
        // least one position; the expected number of retries is 2^-bit_length.
        self.goal = bits.sample(&mut self.rng);
        while self.goal == self.state {
            self.goal = bits.sample(&mut self.rng);
        }
        (self.observation(), Info::new())
    }

    fn step(&mut self, action: Self::Act) -> Result<Step<Self::Obs>> {
        let index = action as usize;
        if index >= self.bit_length {
            return Err(EnvError::InvalidAction(format!(
                "action {action} out of range for {} bits",
                self.bit_length
            )));
        }
        self.state[index] = 1 - self.state[index];
        self.steps += 1;

        let terminated = self.solved();
        let truncated = self.out_of_steps();
        let reward = compute_reward(&self.state, &self.goal);
        Ok(Step::new(self.observation(), reward, terminated, truncated, Info::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(bit_length: usize, state: &[u8], goal: &[u8]) -> BitFlipEnv {
        let mut env = BitFlipEnv::new(bit_length, 42).expect("valid bit length");
        env.state = state.to_vec();
        env.goal = goal.to_vec();
        env
    }

    #[test]
    fn flips_the_requested_bit() {
        let mut env = env_with(1, &[0], &[1]);
        env.step(0).unwrap();
        assert_eq!(env.state, vec![1]);
    }

    #[test]
    fn flips_only_the_requested_bit() {
        let mut env = env_with(2, &[0, 0], &[1, 1]);
        env.step(1).unwrap();
        assert_eq!(env.state, vec![0, 1]);
    }

    #[test]
    fn mismatch_rewards_minus_one() {
        let mut env = env_with(2, &[0, 0], &[1, 0]);
        let s = env.step(1).unwrap();
        assert_eq!(s.reward, -1.0);
        assert!(!s.terminated);
    }

    #[test]
    fn match_rewards_zero_and_terminates() {
        let mut env = env_with(2, &[0, 0], &[1, 0]);
        let s = env.step(0).unwrap();
        assert_eq!(s.reward, 0.0);
        assert!(s.terminated);
    }

    #[test]
    fn solves_in_two_steps() {
        let mut env = env_with(2, &[0, 0], &[1, 1]);

        let s = env.step(0).unwrap();
        assert_eq!(s.reward, -1.0);
        assert!(!s.terminated);
        assert!(!s.truncated);

        let s = env.step(1).unwrap();
        assert_eq!(s.reward, 0.0);
        assert!(s.terminated);
    }

    #[test]
    fn truncates_when_budget_runs_out() {
        let config = BitFlipConfig { bit_length: 4, max_steps: Some(2), mean_zero: false };
        let mut env = BitFlipEnv::with_config(config, 42).unwrap();
        env.state = vec![0, 0, 0, 0];
        env.goal = vec![1, 1, 1, 1];

        let s = env.step(0).unwrap();
        assert!(!s.truncated);

        // Second flip of the same bit returns to the initial state.
        let s = env.step(0).unwrap();
        assert!(s.truncated);
        assert!(!s.terminated);
        assert_eq!(s.reward, -1.0);
    }

    #[test]
    fn budget_defaults_to_bit_length() {
        let env = BitFlipEnv::new(3, 0).unwrap();
        assert_eq!(env.max_steps(), Some(3));
    }

    #[test]
    fn explicit_zero_budget_means_unbounded() {
        let config = BitFlipConfig { bit_length: 2, max_steps: Some(0), mean_zero: false };
        let mut env = BitFlipEnv::with_config(config, 0).unwrap();
        assert_eq!(env.max_steps(), None);

        env.state = vec![0, 0];
        env.goal = vec![1, 1];
        // Toggling one bit can never reach a goal two flips away.
        for _ in 0..10 {
            let s = env.step(0).unwrap();
            assert!(!s.truncated);
            assert!(!s.terminated);
        }
    }

    #[test]
    fn explicit_budget_is_kept() {
        let config = BitFlipConfig { bit_length: 2, max_steps: Some(7), mean_zero: false };
        let env = BitFlipEnv::with_config(config, 0).unwrap();
        assert_eq!(env.max_steps(), Some(7));
    }

    #[test]
    fn mean_zero_encodes_bits_as_plus_minus_one() {
        let config = BitFlipConfig { bit_length: 4, max_steps: None, mean_zero: true };
        let mut env = BitFlipEnv::with_config(config, 1).unwrap();
        env.state = vec![0, 1, 0, 1];
        env.goal = vec![1, 1, 0, 0];

        let obs = env.observation();
        assert_eq!(obs.state, vec![-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(obs.goal, vec![1.0, 1.0, -1.0, -1.0]);
        // Storage itself is untouched by the encoding.
        assert_eq!(env.state, vec![0, 1, 0, 1]);
    }

    #[test]
    fn invalid_action_leaves_the_environment_untouched() {
        let mut env = env_with(3, &[0, 1, 0], &[1, 1, 1]);
        let err = env.step(3).unwrap_err();
        assert!(matches!(err, EnvError::InvalidAction(_)));
        assert_eq!(env.state, vec![0, 1, 0]);
        assert_eq!(env.steps, 0);
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn observation_arrays_match_the_vectors() {
        let mut env = BitFlipEnv::new(4, 3).unwrap();
        let (obs, _info) = env.reset(None);
        assert_eq!(obs.state_array().to_vec(), obs.state);
        assert_eq!(obs.goal_array().to_vec(), obs.goal);
    }

    #[test]
    fn reward_relabeling_accepts_arbitrary_pairs() {
        assert_eq!(compute_reward(&[0u8, 1, 1], &[0u8, 1, 1]), 0.0);
        assert_eq!(compute_reward(&[0u8, 1, 1], &[0u8, 1, 0]), -1.0);
        // Encoded observation vectors work the same way.
        assert_eq!(compute_reward(&[-1.0f32, 1.0], &[-1.0f32, 1.0]), 0.0);
        assert_eq!(compute_reward(&[-1.0f32, 1.0], &[1.0f32, 1.0]), -1.0);
    }
}
