//! Shared helpers for the geodesic transforms
//!
//! This module provides the supporting machinery around the sweep kernels:
//! - Element-wise field kernels (SIMD-accelerated with the `simd` feature)
//! - Seed mask construction
//! - Axis transposition between rotation passes
//! - The parallel-for seam used inside each sweep

pub mod elementwise;
pub mod mask;
pub mod parallel;
pub mod transpose;

pub use elementwise::*;
pub use mask::*;
pub use parallel::*;
pub use transpose::*;
