//! Axis transposition with re-contiguous output
//!
//! The rotation drivers change which spatial axis is swept by physically
//! transposing the arrays between passes, so a sweep always walks contiguous
//! memory. Each function writes a fresh contiguous buffer in channel-major
//! order and is its own inverse when called with the output's (swapped)
//! dimensions.

/// Swap the spatial axes of a [C, H, W] buffer, returning [C, W, H]
pub fn transpose_hw(buf: &[f32], channels: usize, height: usize, width: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; buf.len()];
    let plane = height * width;
    for c in 0..channels {
        let base = c * plane;
        for h in 0..height {
            let src_row = base + h * width;
            for w in 0..width {
                out[base + w * height + h] = buf[src_row + w];
            }
        }
    }
    out
}

/// Swap depth and height of a [C, D, H, W] buffer, returning [C, H, D, W]
///
/// Rows along the width axis stay contiguous and are block-copied.
pub fn transpose_dh(
    buf: &[f32],
    channels: usize,
    depth: usize,
    height: usize,
    width: usize,
) -> Vec<f32> {
    let mut out = vec![0.0f32; buf.len()];
    let volume = depth * height * width;
    for c in 0..channels {
        let base = c * volume;
        for d in 0..depth {
            for h in 0..height {
                let src = base + (d * height + h) * width;
                let dst = base + (h * depth + d) * width;
                out[dst..dst + width].copy_from_slice(&buf[src..src + width]);
            }
        }
    }
    out
}

/// Swap depth and width of a [C, D, H, W] buffer, returning [C, W, H, D]
pub fn transpose_dw(
    buf: &[f32],
    channels: usize,
    depth: usize,
    height: usize,
    width: usize,
) -> Vec<f32> {
    let mut out = vec![0.0f32; buf.len()];
    let volume = depth * height * width;
    for c in 0..channels {
        let base = c * volume;
        for d in 0..depth {
            for h in 0..height {
                let src = base + (d * height + h) * width;
                for w in 0..width {
                    out[base + (w * height + h) * depth + d] = buf[src + w];
                }
            }
        }
    }
    out
}
