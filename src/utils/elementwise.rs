//! Element-wise field kernels
//!
//! Dense element-wise operations used by the distance initializer and the
//! signed/GSF compositions. When the `simd` feature is enabled, these use
//! 128-bit SIMD (f32x4) which is compatible with both native SSE/NEON and
//! WASM SIMD.
//!
//! All operations have scalar fallbacks when SIMD is disabled, with
//! identical numeric results.

#[cfg(feature = "simd")]
use wide::{f32x4, CmpGt};

/// SIMD lane width (4 for f32x4)
#[cfg(feature = "simd")]
pub const SIMD_WIDTH: usize = 4;

#[cfg(not(feature = "simd"))]
pub const SIMD_WIDTH: usize = 1;

// ============================================================================
// Scale (distance initializer)
// ============================================================================

/// Compute out[i] = k * x[i]
#[cfg(feature = "simd")]
#[inline]
pub fn scale(x: &[f32], k: f32) -> Vec<f32> {
    let n = x.len();
    let chunks = n / SIMD_WIDTH;
    let remainder = n % SIMD_WIDTH;

    let mut out = vec![0.0f32; n];
    let vk = f32x4::splat(k);

    // Process 4 elements at a time
    for i in 0..chunks {
        let idx = i * SIMD_WIDTH;
        let vx = f32x4::from(&x[idx..idx + SIMD_WIDTH]);
        let result = vk * vx;
        out[idx..idx + SIMD_WIDTH].copy_from_slice(result.as_array_ref());
    }

    // Handle remainder
    let start = chunks * SIMD_WIDTH;
    for i in 0..remainder {
        out[start + i] = k * x[start + i];
    }

    out
}

#[cfg(not(feature = "simd"))]
#[inline]
pub fn scale(x: &[f32], k: f32) -> Vec<f32> {
    x.iter().map(|&xi| k * xi).collect()
}

// ============================================================================
// Subtract (signed distance)
// ============================================================================

/// Compute out[i] = a[i] - b[i]
#[cfg(feature = "simd")]
#[inline]
pub fn subtract(a: &[f32], b: &[f32]) -> Vec<f32> {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / SIMD_WIDTH;
    let remainder = n % SIMD_WIDTH;

    let mut out = vec![0.0f32; n];

    for i in 0..chunks {
        let idx = i * SIMD_WIDTH;
        let va = f32x4::from(&a[idx..idx + SIMD_WIDTH]);
        let vb = f32x4::from(&b[idx..idx + SIMD_WIDTH]);
        let result = va - vb;
        out[idx..idx + SIMD_WIDTH].copy_from_slice(result.as_array_ref());
    }

    let start = chunks * SIMD_WIDTH;
    for i in 0..remainder {
        out[start + i] = a[start + i] - b[start + i];
    }

    out
}

#[cfg(not(feature = "simd"))]
#[inline]
pub fn subtract(a: &[f32], b: &[f32]) -> Vec<f32> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(&ai, &bi)| ai - bi).collect()
}

// ============================================================================
// Complement (mask inversion)
// ============================================================================

/// Compute out[i] = 1 - x[i]
#[cfg(feature = "simd")]
#[inline]
pub fn complement(x: &[f32]) -> Vec<f32> {
    let n = x.len();
    let chunks = n / SIMD_WIDTH;
    let remainder = n % SIMD_WIDTH;

    let mut out = vec![0.0f32; n];

    for i in 0..chunks {
        let idx = i * SIMD_WIDTH;
        let vx = f32x4::from(&x[idx..idx + SIMD_WIDTH]);
        let result = f32x4::ONE - vx;
        out[idx..idx + SIMD_WIDTH].copy_from_slice(result.as_array_ref());
    }

    let start = chunks * SIMD_WIDTH;
    for i in 0..remainder {
        out[start + i] = 1.0 - x[start + i];
    }

    out
}

#[cfg(not(feature = "simd"))]
#[inline]
pub fn complement(x: &[f32]) -> Vec<f32> {
    x.iter().map(|&xi| 1.0 - xi).collect()
}

// ============================================================================
// Threshold (GSF mask extraction)
// ============================================================================

/// Compute out[i] = 1.0 where x[i] > t, else 0.0 (strict comparison)
#[cfg(feature = "simd")]
#[inline]
pub fn threshold_above(x: &[f32], t: f32) -> Vec<f32> {
    let n = x.len();
    let chunks = n / SIMD_WIDTH;
    let remainder = n % SIMD_WIDTH;

    let mut out = vec![0.0f32; n];
    let vt = f32x4::splat(t);

    for i in 0..chunks {
        let idx = i * SIMD_WIDTH;
        let vx = f32x4::from(&x[idx..idx + SIMD_WIDTH]);
        let result = vx.cmp_gt(vt).blend(f32x4::ONE, f32x4::ZERO);
        out[idx..idx + SIMD_WIDTH].copy_from_slice(result.as_array_ref());
    }

    let start = chunks * SIMD_WIDTH;
    for i in 0..remainder {
        out[start + i] = if x[start + i] > t { 1.0 } else { 0.0 };
    }

    out
}

#[cfg(not(feature = "simd"))]
#[inline]
pub fn threshold_above(x: &[f32], t: f32) -> Vec<f32> {
    x.iter().map(|&xi| if xi > t { 1.0 } else { 0.0 }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Odd length so the SIMD build exercises the remainder path too.
    const LEN: usize = 23;

    fn ramp() -> Vec<f32> {
        (0..LEN).map(|i| i as f32 * 0.5 - 3.0).collect()
    }

    #[test]
    fn test_scale() {
        let x = ramp();
        let out = scale(&x, 2.5);
        assert_eq!(out.len(), x.len());
        for i in 0..x.len() {
            assert_eq!(out[i], 2.5 * x[i], "scale mismatch at {}", i);
        }
    }

    #[test]
    fn test_scale_by_zero_clears() {
        let x = ramp();
        let out = scale(&x, 0.0);
        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, 0.0, "scale by 0 left {} at index {}", v, i);
        }
    }

    #[test]
    fn test_subtract() {
        let a = ramp();
        let b: Vec<f32> = (0..LEN).map(|i| (i as f32).cos()).collect();
        let out = subtract(&a, &b);
        for i in 0..LEN {
            assert_eq!(out[i], a[i] - b[i], "subtract mismatch at {}", i);
        }
    }

    #[test]
    fn test_complement_of_unit_mask() {
        let mut mask = vec![1.0f32; LEN];
        mask[4] = 0.0;
        mask[11] = 0.0;
        let inv = complement(&mask);
        for i in 0..LEN {
            assert_eq!(inv[i], 1.0 - mask[i], "complement mismatch at {}", i);
        }
        // Twice is the identity
        let back = complement(&inv);
        assert_eq!(back, mask);
    }

    #[test]
    fn test_threshold_above_is_strict() {
        let x = vec![-1.0, 0.0, 0.5, 1.0, 2.0];
        let out = threshold_above(&x, 0.5);
        assert_eq!(out, vec![0.0, 0.0, 0.0, 1.0, 1.0]);

        let neg = threshold_above(&x, -0.5);
        assert_eq!(neg, vec![0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_threshold_alternating_lanes() {
        // Alternating above/below across two full SIMD chunks plus a
        // remainder element: every lane of the comparison mask must select
        // independently
        let x: Vec<f32> = (0..9).map(|i| if i % 2 == 0 { 2.0 } else { -2.0 }).collect();
        let out = threshold_above(&x, 0.0);
        for (i, &v) in out.iter().enumerate() {
            let expected = if i % 2 == 0 { 1.0 } else { 0.0 };
            assert_eq!(v, expected, "lane selection wrong at {}", i);
        }
    }

    #[test]
    fn test_threshold_ramp_is_binary() {
        let x = ramp();
        let out = threshold_above(&x, 0.25);
        for (i, &v) in out.iter().enumerate() {
            assert!(v == 0.0 || v == 1.0, "non-binary {} at index {}", v, i);
            assert_eq!(v, if x[i] > 0.25 { 1.0 } else { 0.0 }, "wrong bit at {}", i);
        }
    }
}
