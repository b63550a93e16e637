//! Shift model configuration.

use crate::error::{GeneratorError, Result};

/// Dimension of the generated vectors and the shift applied to one of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftModel {
    mean_shift: f64,
    dimension: usize,
    shift_axis: usize,
}

impl ShiftModel {
    /// Fails unless `shift_axis < dimension`.
    pub fn new(mean_shift: f64, dimension: usize, shift_axis: usize) -> Result<Self> {
        if shift_axis >= dimension {
            return Err(GeneratorError::InvalidConfiguration {
                mean_shift,
                dimension,
                shift_axis,
            });
        }
        Ok(Self {
            mean_shift,
            dimension,
            shift_axis,
        })
    }

    #[inline]
    pub fn mean_shift(&self) -> f64 {
        self.mean_shift
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn shift_axis(&self) -> usize {
        self.shift_axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_must_be_below_dimension() {
        assert_eq!(
            ShiftModel::new(1.5, 3, 3),
            Err(GeneratorError::InvalidConfiguration {
                mean_shift: 1.5,
                dimension: 3,
                shift_axis: 3,
            })
        );
        assert!(ShiftModel::new(1.5, 3, 7).is_err());
        assert!(ShiftModel::new(1.5, 0, 0).is_err());
    }

    #[test]
    fn test_getters() {
        let m = ShiftModel::new(-2.0, 3, 2).unwrap();
        assert_eq!(m.mean_shift(), -2.0);
        assert_eq!(m.dimension(), 3);
        assert_eq!(m.shift_axis(), 2);
    }

    #[test]
    fn test_error_message() {
        let err = ShiftModel::new(0.5, 2, 4).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("(0.5, 2, 4)"), "{}", msg);
    }
}
