//! 2D generalised geodesic distance transform
//!
//! Raster-scan approximation of geodesic distance: each pass relaxes the
//! field along the row axis (top-bottom, then bottom-top) against the three
//! nearest neighbors in the adjacent row, and the driver alternates row and
//! column passes by transposing the arrays between them.

use crate::distance::{l1_distance, l1_distance_planar};
use crate::utils::elementwise::scale;
use crate::utils::parallel::for_each_indexed;
use crate::utils::transpose::transpose_hw;

const SQRT2: f32 = std::f32::consts::SQRT_2;

/// One forward + backward relaxation pass along the row axis
///
/// `image` is a contiguous [C, H, W] buffer and `distance` a [H, W] buffer
/// updated in place. Every pixel takes the minimum of its current value and
/// `distance[neighbor] + l_eucl * step + l_grad * intensity_l1` over the
/// three neighbors `{w-1, w, w+1}` of the adjacent row, with out-of-range
/// columns skipped.
///
/// Rows are strictly ordered within one direction; columns relax
/// independently and in parallel.
pub fn geodesic_updown_pass(
    image: &[f32],
    distance: &mut [f32],
    channels: usize, height: usize, width: usize,
    l_grad: f32, l_eucl: f32,
) {
    if height == 0 || width == 0 {
        return;
    }
    let plane = height * width;
    // Diagonal step, orthogonal step, diagonal step
    let local_dist = [SQRT2, 1.0, SQRT2];

    // Top-bottom
    for h in 1..height {
        let (done, rest) = distance.split_at_mut(h * width);
        let prev = &done[(h - 1) * width..];
        let row = &mut rest[..width];
        relax_row(
            image, prev, row, h, h - 1,
            channels, width, plane, &local_dist, l_grad, l_eucl,
        );
    }

    // Bottom-top
    for h in (0..height - 1).rev() {
        let (head, tail) = distance.split_at_mut((h + 1) * width);
        let row = &mut head[h * width..];
        let next = &tail[..width];
        relax_row(
            image, next, row, h, h + 1,
            channels, width, plane, &local_dist, l_grad, l_eucl,
        );
    }
}

/// Relax one row against its already-finalized neighbor row
#[allow(clippy::too_many_arguments)]
fn relax_row(
    image: &[f32],
    neighbor: &[f32],
    row: &mut [f32],
    h: usize, h_n: usize,
    channels: usize, width: usize, plane: usize,
    local_dist: &[f32; 3],
    l_grad: f32, l_eucl: f32,
) {
    let width_i = width as isize;
    for_each_indexed(row, |w, dist| {
        let p = h * width + w;
        let mut best = *dist;
        for (w_i, &step) in local_dist.iter().enumerate() {
            let w_n = w as isize + w_i as isize - 1;
            if w_n < 0 || w_n >= width_i {
                continue;
            }
            let w_n = w_n as usize;
            let q = h_n * width + w_n;
            let l_dist = if channels == 1 {
                l1_distance(image[p], image[q])
            } else {
                l1_distance_planar(image, p, q, channels, plane)
            };
            let candidate = neighbor[w_n] + l_eucl * step + l_grad * l_dist;
            if candidate < best {
                best = candidate;
            }
        }
        *dist = best;
    });
}

/// Generalised geodesic distance over a [C, H, W] image
///
/// Initializes the field to `v * mask` and runs `iterations` rotation
/// cycles, each a row pass followed by a column pass on the transposed
/// arrays. The image transpose is loop-invariant and computed once.
///
/// # Arguments
/// * `image` - Contiguous [C, H, W] intensities
/// * `mask` - [H, W] soft seed indicator, 0.0 at seeds and 1.0 elsewhere
/// * `channels`, `height`, `width` - Array dimensions
/// * `v` - Initial non-seed distance (large sentinel, e.g. 1e10)
/// * `l_grad` - Weight of the intensity L1 term
/// * `l_eucl` - Weight of the spatial step term
/// * `iterations` - Number of rotation cycles
///
/// # Returns
/// The relaxed [H, W] distance field
#[allow(clippy::too_many_arguments)]
pub fn generalised_geodesic2d(
    image: &[f32], mask: &[f32],
    channels: usize, height: usize, width: usize,
    v: f32, l_grad: f32, l_eucl: f32, iterations: usize,
) -> Vec<f32> {
    log::debug!(
        "generalised_geodesic2d: {}x{}x{}, l_grad={}, l_eucl={}, iterations={}",
        channels, height, width, l_grad, l_eucl, iterations
    );

    let mut distance = scale(mask, v);
    if distance.is_empty() {
        return distance;
    }
    let image_t = transpose_hw(image, channels, height, width);

    for _ in 0..iterations {
        geodesic_updown_pass(image, &mut distance, channels, height, width, l_grad, l_eucl);

        distance = transpose_hw(&distance, 1, height, width);
        geodesic_updown_pass(&image_t, &mut distance, channels, width, height, l_grad, l_eucl);
        distance = transpose_hw(&distance, 1, width, height);
    }

    distance
}
