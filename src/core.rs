// Core environment contract: trait, step result, info map, errors.

/// A small ordered map carried alongside observations and step results.
///
/// The bit-flip environment itself always returns an empty map (the slot is
/// reserved for future diagnostics), but the type supports the usual
/// insert/get surface so drivers can attach their own data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Info {
    entries: Vec<(String, InfoValue)>,
}

impl Info {
    /// Create an empty info map.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a value, replacing any existing entry under the same key.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: InfoValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InfoValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Value types allowed in an [`Info`] map.
#[derive(Clone, Debug, PartialEq)]
pub enum InfoValue {
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl From<bool> for InfoValue { fn from(v: bool) -> Self { InfoValue::Bool(v) } }
impl From<i64> for InfoValue { fn from(v: i64) -> Self { InfoValue::I64(v) } }
impl From<i32> for InfoValue { fn from(v: i32) -> Self { InfoValue::I64(v as i64) } }
impl From<f64> for InfoValue { fn from(v: f64) -> Self { InfoValue::F64(v) } }
impl From<f32> for InfoValue { fn from(v: f32) -> Self { InfoValue::F64(v as f64) } }
impl From<&str> for InfoValue { fn from(v: &str) -> Self { InfoValue::Str(v.to_string()) } }
impl From<String> for InfoValue { fn from(v: String) -> Self { InfoValue::Str(v) } }

/// A frame produced by [`Env::render`].
///
/// The bit-flip environment renders nothing (the trait default of `None`
/// applies); the type exists for the trait seam.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderFrame {
    /// Textual representation of the current state.
    Text(String),
}

/// The result of advancing an environment by one step.
///
/// `terminated` and `truncated` split the legacy single `done` flag:
/// `terminated` means the task itself ended (goal reached), `truncated`
/// means an external limit cut the episode short (step budget). An episode
/// is over when either is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<Obs> {
    pub observation: Obs,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl<Obs> Step<Obs> {
    pub fn new(observation: Obs, reward: f32, terminated: bool, truncated: bool, info: Info) -> Self {
        Self { observation, reward, terminated, truncated, info }
    }

    /// Whether the episode ended on this step, for either reason.
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Errors surfaced by environment construction and stepping.
///
/// Both variants indicate caller mistakes; nothing here is retried or
/// recovered internally.
#[derive(thiserror::Error, Debug)]
pub enum EnvError {
    /// Rejected at construction; no partially-built environment is produced.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The action is not a member of the environment's action space.
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

/// Convenience alias for results using [`EnvError`].
pub type Result<T> = std::result::Result<T, EnvError>;

/// Core environment trait, following the Gymnasium lifecycle.
pub trait Env {
    type Obs;
    type Act;

    /// Reset to a fresh initial state and return the first observation.
    /// Implementations reseed their internal RNG when `seed` is provided.
    fn reset(&mut self, seed: Option<u64>) -> (Self::Obs, Info);

    /// Apply an action and advance by one step.
    ///
    /// Fails with [`EnvError::InvalidAction`] when the action is not a
    /// member of the action space; the environment is left untouched in
    /// that case.
    fn step(&mut self, action: Self::Act) -> Result<Step<Self::Obs>>;

    /// Render the current state, if the environment supports it.
    fn render(&self) -> Option<RenderFrame> {
        None
    }

    /// Release any external resources.
    fn close(&mut self) {}
}
