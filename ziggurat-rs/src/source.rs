//! Uniform random sources the sampler can draw from

use rand::RngCore;

/// A generator of uniformly distributed integers in `[MIN, MAX]`.
pub trait UniformSource {
    const MIN: u32 = 0;
    const MAX: u32 = u32::MAX;

    fn next_u32(&mut self) -> u32;

    /// Map one draw onto `[0, 1)`.
    #[inline]
    fn half_open(&mut self) -> f64 {
        (self.next_u32() as f64 - Self::MIN as f64) / (Self::MAX as f64 - Self::MIN as f64 + 1.0)
    }
}

impl<S: UniformSource> UniformSource for &mut S {
    const MIN: u32 = S::MIN;
    const MAX: u32 = S::MAX;

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore>(pub R);

impl<R: RngCore> UniformSource for RngSource<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

impl<R: RngCore> From<R> for RngSource<R> {
    fn from(rng: R) -> Self {
        Self(rng)
    }
}
