//! Channel intensity distance primitives
//!
//! The gradient term of the geodesic path cost is the L1 distance between
//! the per-channel intensities of two locations.

/// L1 distance between two scalar intensities
#[inline]
pub fn l1_distance(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

/// L1 distance between two locations of a planar multi-channel buffer
///
/// `buf` holds `channels` planes of `plane_stride` elements each; `p` and
/// `q` are within-plane offsets. Returns
/// `sum_c |buf[c*stride + p] - buf[c*stride + q]|`.
#[inline]
pub fn l1_distance_planar(
    buf: &[f32],
    p: usize,
    q: usize,
    channels: usize,
    plane_stride: usize,
) -> f32 {
    let mut acc = 0.0f32;
    for c in 0..channels {
        let base = c * plane_stride;
        acc += (buf[base + p] - buf[base + q]).abs();
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1_distance_scalar() {
        assert_eq!(l1_distance(3.0, 1.0), 2.0);
        assert_eq!(l1_distance(1.0, 3.0), 2.0);
        assert_eq!(l1_distance(-1.5, 1.5), 3.0);
        assert_eq!(l1_distance(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_planar_matches_scalar_for_one_channel() {
        let buf = vec![0.5, 2.0, -1.0, 4.0];
        for p in 0..buf.len() {
            for q in 0..buf.len() {
                let planar = l1_distance_planar(&buf, p, q, 1, buf.len());
                let scalar = l1_distance(buf[p], buf[q]);
                assert_eq!(
                    planar, scalar,
                    "single-channel planar L1 diverged at ({}, {})",
                    p, q
                );
            }
        }
    }

    #[test]
    fn test_planar_accumulates_channels() {
        // Two channels over a 2x2 plane
        let buf = vec![
            1.0, 2.0, 3.0, 4.0, // channel 0
            10.0, 20.0, 30.0, 40.0, // channel 1
        ];
        let d = l1_distance_planar(&buf, 0, 3, 2, 4);
        assert!((d - 33.0).abs() < 1e-6, "expected 33, got {}", d);
    }
}
