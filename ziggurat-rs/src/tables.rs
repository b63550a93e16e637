//! Rectangle tables for the normal Ziggurat
//!
//! Segment 0 is the base rectangle plus the tail beyond `R`. Every other
//! segment `i` is the rectangle whose top-right corner is `(x[i], y[i])`.
//! All segments share the same area `A`.

use crate::constants::{BLOCK_COUNT, NOR_SECTION_AREA, UINT32_TO_UNIT, ZIGGURAT_NOR_R};
use std::sync::LazyLock;

/// Process-wide table set. Depends only on `BLOCK_COUNT`, `R` and `A`.
pub static NORMAL_TABLES: LazyLock<ZigguratTables> = LazyLock::new(ZigguratTables::build);

/// Gaussian density without its normalisation constant, `e^(-x^2/2)`.
#[inline]
pub fn gaussian_pdf_denorm(x: f64) -> f64 {
    (-(x * x) / 2.0).exp()
}

/// Inverse of [`gaussian_pdf_denorm`] on `(0, 1]`.
#[inline]
pub fn gaussian_pdf_denorm_inv(y: f64) -> f64 {
    (-2.0 * y.ln()).sqrt()
}

#[derive(Debug, Clone)]
pub struct ZigguratTables {
    pub r: f64,
    pub a: f64,
    pub uint32_to_unit: f64,
    pub a_div_y0: f64,
    pub x: [f64; BLOCK_COUNT],
    pub y: [f64; BLOCK_COUNT],
    /// Fraction of each segment lying entirely under the curve, scaled to
    /// `[0, u32::MAX]` so the fast path is a single integer compare.
    pub x_comp: [u32; BLOCK_COUNT],
}

impl ZigguratTables {
    fn build() -> Self {
        let r = ZIGGURAT_NOR_R;
        let a = NOR_SECTION_AREA;

        let mut x = [0.0f64; BLOCK_COUNT];
        let mut y = [0.0f64; BLOCK_COUNT];

        // B0 carries the tail, so B1 shares its right edge but is shorter.
        x[0] = r;
        y[0] = gaussian_pdf_denorm(r);
        x[1] = r;
        y[1] = y[0] + a / x[1];

        for i in 2..BLOCK_COUNT {
            x[i] = gaussian_pdf_denorm_inv(y[i - 1]);
            y[i] = y[i - 1] + a / x[i];
        }

        let mut x_comp = [0u32; BLOCK_COUNT];
        x_comp[0] = ((r * y[0] / a) * u32::MAX as f64) as u32;
        for i in 1..BLOCK_COUNT - 1 {
            x_comp[i] = ((x[i + 1] / x[i]) * u32::MAX as f64) as u32;
        }
        // Notional x[BLOCK_COUNT] is zero, so the top segment has no inner box.
        x_comp[BLOCK_COUNT - 1] = 0;

        Self {
            r,
            a,
            uint32_to_unit: UINT32_TO_UNIT,
            a_div_y0: a / y[0],
            x,
            y,
            x_comp,
        }
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        BLOCK_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tables_shape() {
        let t = &*NORMAL_TABLES;
        assert_eq!(t.block_count(), 128);
        assert_eq!(t.x[0], t.x[1]);
        for i in 1..BLOCK_COUNT {
            assert!(t.x[i].is_finite() && t.x[i] > 0.0);
            assert!(t.y[i] > t.y[i - 1], "y must grow at segment {}", i);
        }
        for i in 2..BLOCK_COUNT {
            assert!(t.x[i] < t.x[i - 1], "x must shrink at segment {}", i);
        }
        assert!(t.y[BLOCK_COUNT - 1] < 1.0);
        assert_abs_diff_eq!(t.y[BLOCK_COUNT - 1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_base_segment_constants() {
        let t = &*NORMAL_TABLES;
        assert_abs_diff_eq!(t.a_div_y0, 3.7130862467, epsilon = 1e-8);
        // Roughly 92.7% of the base segment is the rectangle, the rest is tail.
        let frac = t.x_comp[0] as f64 / u32::MAX as f64;
        assert_abs_diff_eq!(frac, 0.9271586026, epsilon = 1e-8);
        assert_eq!(t.x_comp[BLOCK_COUNT - 1], 0);
    }

    #[test]
    fn test_pdf_inverse() {
        for &x in &[0.1, 0.5, 1.0, 2.0, 3.4] {
            assert_abs_diff_eq!(gaussian_pdf_denorm_inv(gaussian_pdf_denorm(x)), x, epsilon = 1e-12);
        }
    }
}
