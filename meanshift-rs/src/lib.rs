//! # Mean-shift data generator
//!
//! Streams feature vectors drawn from a standard normal distribution whose
//! mean is moved along a single axis. Two generators with different shifts
//! make a synthetic two-sample discrimination problem.
//!
//! ```
//! use meanshift_rs::SeededGenerator;
//!
//! let mut g = SeededGenerator::from_seed(42);
//! g.set_shift_model(2.0, 3, 0).unwrap();
//! let v = g.produce_next().unwrap();
//! assert_eq!(v.len(), 3);
//! g.release();
//! ```

mod error;
mod generator;
mod model;

pub use error::{GeneratorError, Result};
pub use generator::{GeneratorState, SeededGenerator, ShiftedGaussianVectorGenerator};
pub use model::ShiftModel;
