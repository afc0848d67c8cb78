use rand::Rng;

/// Trait implemented by all spaces.
///
/// `Element` is the value type living in the space: `u32` for [`Discrete`],
/// `Vec<u8>` for [`MultiBinary`], and so on.
///
/// [`Discrete`]: crate::spaces::Discrete
/// [`MultiBinary`]: crate::spaces::MultiBinary
pub trait Space {
    type Element;

    /// Draw a uniform sample from the space using the provided RNG.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element;

    /// Whether the given element is a member of the space.
    fn contains(&self, elem: &Self::Element) -> bool;
}
