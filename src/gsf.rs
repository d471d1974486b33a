//! Signed geodesic distance and geodesic symmetric filtering
//!
//! Compositions of the plain transforms. The signed distance runs the
//! transform against the mask and against its complement and subtracts, so
//! the field is negative inside the seeded region and positive outside. GSF
//! thresholds that signed field at +/- theta and rebuilds a signed distance
//! from the two thresholded masks.
//!
//! These operations take the blend weight `lamb` in [0, 1] and derive
//! `l_grad = lamb`, `l_eucl = 1 - lamb`.

use crate::geodesic2d::generalised_geodesic2d;
use crate::geodesic3d::generalised_geodesic3d;
use crate::utils::elementwise::{complement, subtract, threshold_above};

/// Signed 2D geodesic distance: `D(mask) - D(1 - mask)`
///
/// Negative at and around the seeds (mask 0.0), positive in the background.
#[allow(clippy::too_many_arguments)]
pub fn signed_generalised_geodesic2d(
    image: &[f32], mask: &[f32],
    channels: usize, height: usize, width: usize,
    v: f32, lamb: f32, iterations: usize,
) -> Vec<f32> {
    let inside = generalised_geodesic2d(
        image, mask, channels, height, width, v, lamb, 1.0 - lamb, iterations,
    );
    let outside = generalised_geodesic2d(
        image, &complement(mask), channels, height, width, v, lamb, 1.0 - lamb, iterations,
    );
    subtract(&inside, &outside)
}

/// Signed 3D geodesic distance: `D(mask) - D(1 - mask)`
#[allow(clippy::too_many_arguments)]
pub fn signed_generalised_geodesic3d(
    image: &[f32], mask: &[f32],
    channels: usize, depth: usize, height: usize, width: usize,
    spacing: [f32; 3],
    v: f32, lamb: f32, iterations: usize,
) -> Vec<f32> {
    let inside = generalised_geodesic3d(
        image, mask, channels, depth, height, width, spacing, v, lamb, 1.0 - lamb, iterations,
    );
    let outside = generalised_geodesic3d(
        image, &complement(mask), channels, depth, height, width, spacing, v, lamb,
        1.0 - lamb, iterations,
    );
    subtract(&inside, &outside)
}

/// 2D geodesic symmetric filtering
///
/// Thresholds the signed field at `+theta` and `-theta` and returns
/// `signed(above -theta) - signed(complement(above +theta))`, a smoothed
/// signed indicator whose zero crossing tracks the regularised boundary.
#[allow(clippy::too_many_arguments)]
pub fn gsf2d(
    image: &[f32], mask: &[f32],
    channels: usize, height: usize, width: usize,
    theta: f32, v: f32, lamb: f32, iterations: usize,
) -> Vec<f32> {
    let signed =
        signed_generalised_geodesic2d(image, mask, channels, height, width, v, lamb, iterations);
    let upper = threshold_above(&signed, theta);
    let lower = threshold_above(&signed, -theta);

    let d_upper = signed_generalised_geodesic2d(
        image, &complement(&upper), channels, height, width, v, lamb, iterations,
    );
    let d_lower = signed_generalised_geodesic2d(
        image, &lower, channels, height, width, v, lamb, iterations,
    );
    subtract(&d_lower, &d_upper)
}

/// 3D geodesic symmetric filtering
#[allow(clippy::too_many_arguments)]
pub fn gsf3d(
    image: &[f32], mask: &[f32],
    channels: usize, depth: usize, height: usize, width: usize,
    spacing: [f32; 3],
    theta: f32, v: f32, lamb: f32, iterations: usize,
) -> Vec<f32> {
    let signed = signed_generalised_geodesic3d(
        image, mask, channels, depth, height, width, spacing, v, lamb, iterations,
    );
    let upper = threshold_above(&signed, theta);
    let lower = threshold_above(&signed, -theta);

    let d_upper = signed_generalised_geodesic3d(
        image, &complement(&upper), channels, depth, height, width, spacing, v, lamb, iterations,
    );
    let d_lower = signed_generalised_geodesic3d(
        image, &lower, channels, depth, height, width, spacing, v, lamb, iterations,
    );
    subtract(&d_lower, &d_upper)
}
