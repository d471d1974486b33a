//! Parallel-for seam for the sweep kernels
//!
//! Relaxation along the swept axis is strictly sequential, but every element
//! of one row (2D) or plane (3D) relaxes independently. With the `parallel`
//! feature this inner loop runs on the rayon pool; without it the same body
//! runs sequentially. Results are identical either way since elements never
//! read each other.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Apply `op` to every element of `data` together with its index
///
/// `op` receives `(index, &mut element)` and must not depend on any other
/// element of `data`.
#[cfg(feature = "parallel")]
#[inline]
pub fn for_each_indexed<F>(data: &mut [f32], op: F)
where
    F: Fn(usize, &mut f32) + Sync + Send,
{
    data.par_iter_mut()
        .enumerate()
        .for_each(|(idx, value)| op(idx, value));
}

#[cfg(not(feature = "parallel"))]
#[inline]
pub fn for_each_indexed<F>(data: &mut [f32], op: F)
where
    F: Fn(usize, &mut f32) + Sync + Send,
{
    for (idx, value) in data.iter_mut().enumerate() {
        op(idx, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_indexed_sees_every_index() {
        let mut data = vec![0.0f32; 137];
        for_each_indexed(&mut data, |idx, value| {
            *value = idx as f32;
        });
        for (idx, &value) in data.iter().enumerate() {
            assert_eq!(value, idx as f32, "index {} not visited", idx);
        }
    }

    #[test]
    fn test_for_each_indexed_reads_captured_slice() {
        let source: Vec<f32> = (0..64).map(|i| (i as f32) * 0.5).collect();
        let mut data = vec![0.0f32; 64];
        for_each_indexed(&mut data, |idx, value| {
            *value = source[idx] * 2.0;
        });
        for idx in 0..64 {
            assert_eq!(data[idx], idx as f32, "captured read wrong at {}", idx);
        }
    }
}
