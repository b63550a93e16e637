//! Standard normal vectors with a mean shift along one axis

use crate::{
    error::{GeneratorError, Result},
    model::ShiftModel,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, trace, warn};
use ziggurat_rs::{RngSource, UniformSource, ZigguratSampler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Idle,
    HasVector,
}

/// Emits vectors whose entries are independent N(0, 1) draws, except the
/// entry at the shift axis which is drawn from N(mean_shift, 1).
///
/// Holds at most one vector at a time. [`produce_next`] replaces it and
/// [`release`] drops it.
///
/// [`produce_next`]: ShiftedGaussianVectorGenerator::produce_next
/// [`release`]: ShiftedGaussianVectorGenerator::release
#[derive(Debug)]
pub struct ShiftedGaussianVectorGenerator<S: UniformSource> {
    source: S,
    sampler: ZigguratSampler,
    model: Option<ShiftModel>,
    current: Option<Vec<f64>>,
}

/// Generator backed by a seeded `StdRng`.
pub type SeededGenerator = ShiftedGaussianVectorGenerator<RngSource<StdRng>>;

impl SeededGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngSource(StdRng::seed_from_u64(seed)))
    }
}

impl<S: UniformSource> ShiftedGaussianVectorGenerator<S> {
    /// Unconfigured generator. [`produce_next`](Self::produce_next) fails
    /// until a shift model is set.
    pub fn new(source: S) -> Self {
        Self {
            source,
            sampler: ZigguratSampler::standard(),
            model: None,
            current: None,
        }
    }

    pub fn with_shift_model(
        source: S,
        mean_shift: f64,
        dimension: usize,
        shift_axis: usize,
    ) -> Result<Self> {
        let mut generator = Self::new(source);
        generator.set_shift_model(mean_shift, dimension, shift_axis)?;
        Ok(generator)
    }

    /// Replace the shift model. A rejected model leaves the old one in place.
    pub fn set_shift_model(
        &mut self,
        mean_shift: f64,
        dimension: usize,
        shift_axis: usize,
    ) -> Result<()> {
        match ShiftModel::new(mean_shift, dimension, shift_axis) {
            Ok(model) => {
                debug!(mean_shift, dimension, shift_axis, "shift model set");
                self.model = Some(model);
                Ok(())
            }
            Err(e) => {
                warn!(%e, "rejected shift model");
                Err(e)
            }
        }
    }

    #[inline]
    pub fn shift_model(&self) -> Option<&ShiftModel> {
        self.model.as_ref()
    }

    /// Draw a fresh vector and make it the current one.
    pub fn produce_next(&mut self) -> Result<&[f64]> {
        trace!("entering produce_next");
        let model = self.model.ok_or(GeneratorError::Unconfigured)?;

        let mut vector = vec![0.0f64; model.dimension()];
        self.sampler.fill(&mut vector, &mut self.source);
        vector[model.shift_axis()] += model.mean_shift();

        let vector = self.current.insert(vector).as_slice();
        trace!("leaving produce_next");
        Ok(vector)
    }

    /// Drop the current vector, if any.
    pub fn release(&mut self) {
        trace!(held = self.current.is_some(), "release");
        self.current = None;
    }

    #[inline]
    pub fn current(&self) -> Option<&[f64]> {
        self.current.as_deref()
    }

    /// Hand the current vector to the caller, leaving the generator idle.
    pub fn take_current(&mut self) -> Option<Vec<f64>> {
        self.current.take()
    }

    #[inline]
    pub fn has_vector(&self) -> bool {
        self.current.is_some()
    }

    pub fn state(&self) -> GeneratorState {
        if self.has_vector() {
            GeneratorState::HasVector
        } else {
            GeneratorState::Idle
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
