//! Seed mask construction
//!
//! The transforms follow one mask convention throughout: 0.0 at seed
//! locations, 1.0 everywhere else, with the field initialized to `v * mask`
//! for a large `v`. Seeds therefore start at zero distance and the
//! background relaxes downward. These helpers build exactly that mask so the
//! convention cannot be inverted by accident.

/// Unit seed mask over a 2D grid: 0.0 at each `(row, col)` seed, 1.0 elsewhere
///
/// Seed coordinates must lie within `height` x `width`.
pub fn seed_mask_2d(height: usize, width: usize, seeds: &[(usize, usize)]) -> Vec<f32> {
    let mut mask = vec![1.0f32; height * width];
    for &(h, w) in seeds {
        mask[h * width + w] = 0.0;
    }
    mask
}

/// Unit seed mask over a 3D grid: 0.0 at each `(depth, row, col)` seed, 1.0 elsewhere
///
/// Seed coordinates must lie within `depth` x `height` x `width`.
pub fn seed_mask_3d(
    depth: usize,
    height: usize,
    width: usize,
    seeds: &[(usize, usize, usize)],
) -> Vec<f32> {
    let mut mask = vec![1.0f32; depth * height * width];
    for &(d, h, w) in seeds {
        mask[(d * height + h) * width + w] = 0.0;
    }
    mask
}
