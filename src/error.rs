//! Error types for the validated array boundary
//!
//! The sweep kernels are total over well-formed inputs and return plain
//! values; shape and parameter validation happens once at the `tensor`
//! boundary and surfaces through these types.

use thiserror::Error;

/// Errors reported by the validated entry points in [`crate::tensor`]
#[derive(Error, Debug)]
pub enum GeodisError {
    /// Batch dimension of image or mask is not 1
    #[error("batch dimension must be 1, got {0}")]
    BatchSize(usize),

    /// Mask carries more than one channel
    #[error("mask must have a single channel, got {0}")]
    MaskChannels(usize),

    /// Image and mask spatial extents differ
    #[error("image spatial shape {image:?} does not match mask spatial shape {mask:?}")]
    SpatialMismatch { image: Vec<usize>, mask: Vec<usize> },

    /// A spacing component is zero, negative or not finite
    #[error("spacing components must be positive, got {0:?}")]
    NonPositiveSpacing([f32; 3]),

    /// Blend weight outside the unit interval
    #[error("lamb must lie in [0, 1], got {0}")]
    LambOutOfRange(f32),

    /// Output reconstruction failed
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GeodisError>;
