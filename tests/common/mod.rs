//! Common helpers for the integration tests
#![allow(dead_code)]

/// Maximum absolute element-wise difference between two fields
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "field lengths differ: {} vs {}", a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| (ai - bi).abs())
        .fold(0.0f32, f32::max)
}

/// Assert two fields agree element-wise within `tol`
pub fn assert_fields_close(actual: &[f32], expected: &[f32], tol: f32, label: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: field lengths differ",
        label
    );
    for i in 0..actual.len() {
        assert!(
            (actual[i] - expected[i]).abs() <= tol,
            "{}: mismatch at {}: got {}, expected {} (tol {})",
            label, i, actual[i], expected[i], tol
        );
    }
}

/// Deterministic smooth test image of the given flat length
pub fn synth_image(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (i as f32 * 0.17).sin() * 0.5 + (i as f32 * 0.031).cos() * 0.25)
        .collect()
}
