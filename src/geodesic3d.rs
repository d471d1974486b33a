//! 3D generalised geodesic distance transform with anisotropic spacing
//!
//! Same raster-scan pattern as 2D: each pass relaxes the field along the
//! depth axis against the 3x3 in-plane neighborhood of the adjacent plane,
//! and the driver cycles the swept axis through depth, height and width,
//! permuting the spacing vector in lock-step with each transpose.

use crate::distance::{l1_distance, l1_distance_planar};
use crate::utils::elementwise::scale;
use crate::utils::parallel::for_each_indexed;
use crate::utils::transpose::{transpose_dh, transpose_dw};

/// One forward + backward relaxation pass along the depth axis
///
/// `image` is a contiguous [C, D, H, W] buffer and `distance` a [D, H, W]
/// buffer updated in place. Every voxel relaxes against the 3x3 in-plane
/// window of the adjacent plane, each in-plane axis clipped independently.
/// The step weight for offset `(dh, dw)` is
/// `spacing[0] + |dh| * spacing[1] + |dw| * spacing[2]`.
///
/// Planes are strictly ordered within one direction; in-plane positions
/// relax independently and in parallel.
#[allow(clippy::too_many_arguments)]
pub fn geodesic_frontback_pass(
    image: &[f32],
    distance: &mut [f32],
    channels: usize, depth: usize, height: usize, width: usize,
    spacing: [f32; 3],
    l_grad: f32, l_eucl: f32,
) {
    if depth == 0 || height == 0 || width == 0 {
        return;
    }
    let plane = height * width;
    let volume = depth * plane;

    // 3x3 step weights for the current axis order
    let mut local_dist = [0.0f32; 9];
    for h_i in 0..3 {
        for w_i in 0..3 {
            local_dist[h_i * 3 + w_i] = spacing[0]
                + (h_i as f32 - 1.0).abs() * spacing[1]
                + (w_i as f32 - 1.0).abs() * spacing[2];
        }
    }

    // Front-back
    for d in 1..depth {
        let (done, rest) = distance.split_at_mut(d * plane);
        let prev = &done[(d - 1) * plane..];
        let current = &mut rest[..plane];
        relax_plane(
            image, prev, current, d, d - 1,
            channels, height, width, volume, &local_dist, l_grad, l_eucl,
        );
    }

    // Back-front
    for d in (0..depth - 1).rev() {
        let (head, tail) = distance.split_at_mut((d + 1) * plane);
        let current = &mut head[d * plane..];
        let next = &tail[..plane];
        relax_plane(
            image, next, current, d, d + 1,
            channels, height, width, volume, &local_dist, l_grad, l_eucl,
        );
    }
}

/// Relax one plane against its already-finalized neighbor plane
#[allow(clippy::too_many_arguments)]
fn relax_plane(
    image: &[f32],
    neighbor: &[f32],
    current: &mut [f32],
    d: usize, d_n: usize,
    channels: usize, height: usize, width: usize, volume: usize,
    local_dist: &[f32; 9],
    l_grad: f32, l_eucl: f32,
) {
    let height_i = height as isize;
    let width_i = width as isize;
    for_each_indexed(current, |idx, dist| {
        let h = idx / width;
        let w = idx % width;
        let p = (d * height + h) * width + w;
        let mut best = *dist;
        for h_i in 0..3usize {
            let h_n = h as isize + h_i as isize - 1;
            if h_n < 0 || h_n >= height_i {
                continue;
            }
            let h_n = h_n as usize;
            for w_i in 0..3usize {
                let w_n = w as isize + w_i as isize - 1;
                if w_n < 0 || w_n >= width_i {
                    continue;
                }
                let w_n = w_n as usize;
                let q = (d_n * height + h_n) * width + w_n;
                let l_dist = if channels == 1 {
                    l1_distance(image[p], image[q])
                } else {
                    l1_distance_planar(image, p, q, channels, volume)
                };
                let candidate =
                    neighbor[h_n * width + w_n] + l_eucl * local_dist[h_i * 3 + w_i] + l_grad * l_dist;
                if candidate < best {
                    best = candidate;
                }
            }
        }
        *dist = best;
    });
}

/// Generalised geodesic distance over a [C, D, H, W] volume
///
/// Initializes the field to `v * mask` and runs `iterations` rotation
/// cycles: a depth sweep, a height sweep on depth<->height transposed
/// arrays with spacing `[s1, s0, s2]`, and a width sweep on depth<->width
/// transposed arrays with spacing `[s2, s1, s0]`, transposing the field back
/// after each. The two image transposes are loop-invariant and computed
/// once.
///
/// # Arguments
/// * `image` - Contiguous [C, D, H, W] intensities
/// * `mask` - [D, H, W] soft seed indicator, 0.0 at seeds and 1.0 elsewhere
/// * `channels`, `depth`, `height`, `width` - Array dimensions
/// * `spacing` - Physical voxel extent along depth, height, width
/// * `v` - Initial non-seed distance (large sentinel, e.g. 1e10)
/// * `l_grad` - Weight of the intensity L1 term
/// * `l_eucl` - Weight of the spatial step term
/// * `iterations` - Number of rotation cycles
///
/// # Returns
/// The relaxed [D, H, W] distance field
#[allow(clippy::too_many_arguments)]
pub fn generalised_geodesic3d(
    image: &[f32], mask: &[f32],
    channels: usize, depth: usize, height: usize, width: usize,
    spacing: [f32; 3],
    v: f32, l_grad: f32, l_eucl: f32, iterations: usize,
) -> Vec<f32> {
    log::debug!(
        "generalised_geodesic3d: {}x{}x{}x{}, spacing={:?}, l_grad={}, l_eucl={}, iterations={}",
        channels, depth, height, width, spacing, l_grad, l_eucl, iterations
    );

    let mut distance = scale(mask, v);
    if distance.is_empty() {
        return distance;
    }
    let image_dh = transpose_dh(image, channels, depth, height, width);
    let image_dw = transpose_dw(image, channels, depth, height, width);

    for _ in 0..iterations {
        // Sweep along depth
        geodesic_frontback_pass(
            image, &mut distance,
            channels, depth, height, width, spacing, l_grad, l_eucl,
        );

        // Sweep along height: depth <-> height, spacing follows
        distance = transpose_dh(&distance, 1, depth, height, width);
        geodesic_frontback_pass(
            &image_dh, &mut distance,
            channels, height, depth, width,
            [spacing[1], spacing[0], spacing[2]], l_grad, l_eucl,
        );
        distance = transpose_dh(&distance, 1, height, depth, width);

        // Sweep along width: depth <-> width, spacing follows
        distance = transpose_dw(&distance, 1, depth, height, width);
        geodesic_frontback_pass(
            &image_dw, &mut distance,
            channels, width, height, depth,
            [spacing[2], spacing[1], spacing[0]], l_grad, l_eucl,
        );
        distance = transpose_dw(&distance, 1, width, height, depth);
    }

    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mask::seed_mask_3d;

    #[test]
    fn test_zero_mask_stays_zero() {
        let image: Vec<f32> = (0..27).map(|i| (i as f32 * 0.3).cos()).collect();
        let mask = vec![0.0f32; 27];
        let dist =
            generalised_geodesic3d(&image, &mask, 1, 3, 3, 3, [1.0; 3], 1e10, 0.5, 0.5, 2);
        for (i, &d) in dist.iter().enumerate() {
            assert_eq!(d, 0.0, "all-seed mask must give zero field, got {} at {}", d, i);
        }
    }

    #[test]
    fn test_all_ones_mask_keeps_v() {
        let image = vec![0.0f32; 27];
        let mask = vec![1.0f32; 27];
        let v = 3.25;
        let dist = generalised_geodesic3d(&image, &mask, 1, 3, 3, 3, [1.0; 3], v, 0.0, 1.0, 2);
        for (i, &d) in dist.iter().enumerate() {
            assert_eq!(d, v, "seedless mask must keep v, got {} at {}", d, i);
        }
    }

    #[test]
    fn test_center_seed_unit_spacing_is_l1() {
        // With unit spacing and no gradient term, a step along the swept axis
        // with in-plane offset (dh, dw) costs 1 + |dh| + |dw|, so the relaxed
        // field is exactly the L1 distance from the seed
        let n = 5;
        let image = vec![0.0f32; n * n * n];
        let mask = seed_mask_3d(n, n, n, &[(2, 2, 2)]);
        let dist =
            generalised_geodesic3d(&image, &mask, 1, n, n, n, [1.0; 3], 1e10, 0.0, 1.0, 2);

        for d in 0..n {
            for h in 0..n {
                for w in 0..n {
                    let expected = (d as f32 - 2.0).abs()
                        + (h as f32 - 2.0).abs()
                        + (w as f32 - 2.0).abs();
                    let got = dist[(d * n + h) * n + w];
                    assert!(
                        (got - expected).abs() < 1e-4,
                        "L1 field wrong at ({}, {}, {}): got {}, expected {}",
                        d, h, w, got, expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_center_seed_anisotropic_spacing() {
        // Spacing [2, 1, 1] doubles the cost of every depth step, giving the
        // weighted L1 distance 2|dd| + |dh| + |dw|
        let n = 5;
        let image = vec![0.0f32; n * n * n];
        let mask = seed_mask_3d(n, n, n, &[(2, 2, 2)]);
        let dist = generalised_geodesic3d(
            &image, &mask, 1, n, n, n, [2.0, 1.0, 1.0], 1e10, 0.0, 1.0, 2,
        );

        for d in 0..n {
            for h in 0..n {
                for w in 0..n {
                    let expected = 2.0 * (d as f32 - 2.0).abs()
                        + (h as f32 - 2.0).abs()
                        + (w as f32 - 2.0).abs();
                    let got = dist[(d * n + h) * n + w];
                    assert!(
                        (got - expected).abs() < 1e-4,
                        "weighted L1 field wrong at ({}, {}, {}): got {}, expected {}",
                        d, h, w, got, expected
                    );
                }
            }
        }
        // Spot-check the far corner: 2*2 + 2 + 2
        assert!((dist[0] - 8.0).abs() < 1e-4, "corner should be 8, got {}", dist[0]);
    }

    #[test]
    fn test_multichannel_constant_extra_channel_is_noop() {
        // A constant second channel adds nothing to the L1 term
        let (d, h, w) = (3, 4, 4);
        let volume = d * h * w;
        let base: Vec<f32> = (0..volume).map(|i| (i as f32 * 0.11).sin()).collect();
        let mut two_channel = base.clone();
        two_channel.extend(std::iter::repeat(0.75).take(volume));

        let mask = seed_mask_3d(d, h, w, &[(1, 2, 1)]);
        let one = generalised_geodesic3d(
            &base, &mask, 1, d, h, w, [1.0, 1.0, 1.0], 1e10, 0.8, 0.2, 2,
        );
        let two = generalised_geodesic3d(
            &two_channel, &mask, 2, d, h, w, [1.0, 1.0, 1.0], 1e10, 0.8, 0.2, 2,
        );
        for i in 0..volume {
            assert_eq!(
                one[i], two[i],
                "constant extra channel changed the field at {}",
                i
            );
        }
    }
}
