//! Action and observation space types.

pub mod space;

use rand::Rng;

pub use space::Space;

/// A discrete space of integers in `[0, n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discrete {
    n: u32,
}

impl Discrete {
    pub fn new(n: u32) -> Self {
        assert!(n > 0, "Discrete space requires n > 0");
        Self { n }
    }

    pub fn n(&self) -> u32 {
        self.n
    }
}

impl Space for Discrete {
    type Element = u32;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        if self.n == 1 {
            return 0;
        }
        rng.gen_range(0..self.n)
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        *elem < self.n
    }
}

/// A fixed-length binary vector space of size `n`.
/// Elements are vectors of 0/1 values (`u8`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiBinary {
    n: usize,
}

impl MultiBinary {
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "MultiBinary requires n > 0");
        Self { n }
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl Space for MultiBinary {
    type Element = Vec<u8>;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        // Each bit is an independent fair coin flip.
        (0..self.n).map(|_| rng.gen_bool(0.5) as u8).collect()
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        elem.len() == self.n && elem.iter().all(|&b| b == 0 || b == 1)
    }
}

/// A box space of runtime length with per-dimension inclusive bounds.
/// Elements are `Vec<f32>` of the same length as the bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
}

impl BoxSpace {
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Self {
        assert_eq!(low.len(), high.len(), "low and high must have the same length");
        assert!(!low.is_empty(), "BoxSpace requires at least one dimension");
        for (i, (l, h)) in low.iter().zip(high.iter()).enumerate() {
            assert!(l <= h, "low[{i}] > high[{i}]");
        }
        Self { low, high }
    }

    /// A box with the same `[low, high]` bound in every one of `n` dimensions.
    pub fn uniform(low: f32, high: f32, n: usize) -> Self {
        Self::new(vec![low; n], vec![high; n])
    }

    pub fn low(&self) -> &[f32] {
        &self.low
    }

    pub fn high(&self) -> &[f32] {
        &self.high
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }
}

impl Space for BoxSpace {
    type Element = Vec<f32>;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(&l, &h)| if l == h { l } else { rng.gen_range(l..=h) })
            .collect()
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        elem.len() == self.low.len()
            && elem
                .iter()
                .zip(self.low.iter().zip(self.high.iter()))
                .all(|(&v, (&l, &h))| l <= v && v <= h)
    }
}

/// An ordered collection of named [`BoxSpace`] subspaces.
///
/// This models a dictionary-valued observation contract (e.g. a `"state"`
/// box plus a `"goal"` box). Entries keep insertion order; elements are
/// name/vector pairs in the same order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DictSpace {
    entries: Vec<(String, BoxSpace)>,
}

impl DictSpace {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builder-style insertion, keeping declaration order.
    pub fn with<K: Into<String>>(mut self, name: K, space: BoxSpace) -> Self {
        self.entries.push((name.into(), space));
        self
    }

    /// Look up a subspace by name.
    pub fn get(&self, name: &str) -> Option<&BoxSpace> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, s)| s)
    }

    /// Iterate over named subspaces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoxSpace)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Space for DictSpace {
    type Element = Vec<(String, Vec<f32>)>;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        self.entries
            .iter()
            .map(|(k, s)| (k.clone(), s.sample(rng)))
            .collect()
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        elem.len() == self.entries.len()
            && elem
                .iter()
                .zip(self.entries.iter())
                .all(|((name, v), (k, s))| name == k && s.contains(v))
    }
}
