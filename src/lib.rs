//! geodis-core: generalised geodesic distance transforms
//!
//! Raster-scan approximation of geodesic distance over dense f32 arrays,
//! blending spatial step length with per-channel intensity dissimilarity.
//! 2D operates on [1, C, H, W] arrays, 3D on [1, C, D, H, W] with
//! anisotropic voxel spacing. Used as a seed-propagation building block for
//! interactive segmentation.
//!
//! # Modules
//! - `tensor`: validated `ndarray` entry points (start here)
//! - `geodesic2d` / `geodesic3d`: raster-scan sweep kernels over flat slices
//! - `gsf`: signed distance and geodesic symmetric filtering
//! - `distance`: channel intensity distance primitives
//! - `utils`: element-wise kernels, seed masks, transposes, parallel seam
//! - `error`: boundary error types
//!
//! Mask convention throughout: 0.0 at seed locations, 1.0 elsewhere, with
//! the field initialized to `v * mask` for a large `v` (e.g. 1e10).

// Core primitives
pub mod distance;
pub mod error;

// Transform kernels and drivers
pub mod geodesic2d;
pub mod geodesic3d;
pub mod gsf;

// Validated boundary
pub mod tensor;

pub mod utils;

pub use error::{GeodisError, Result};
pub use tensor::{
    generalised_geodesic2d, generalised_geodesic3d, gsf2d, gsf3d,
    signed_generalised_geodesic2d, signed_generalised_geodesic3d,
};
