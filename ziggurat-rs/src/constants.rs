//! Constants for the 128-segment Ziggurat

/// Number of segments the positive half of the density is split into.
pub const BLOCK_COUNT: usize = 128;

/// Right hand x coord of the base rectangle, and so the left edge of the tail.
pub const ZIGGURAT_NOR_R: f64 = 3.442619855899;

/// Area of every segment, pre-computed for 128 blocks.
pub const NOR_SECTION_AREA: f64 = 9.91256303526217e-3;

/// Scales a `u32` in `[0, u32::MAX]` onto `[0, 1]`.
pub const UINT32_TO_UNIT: f64 = 1.0 / u32::MAX as f64;
