//! Validated array entry points
//!
//! The sweep kernels trust their dimension arguments. This boundary accepts
//! `ndarray` views in the [1, C, H, W] / [1, C, D, H, W] layout, validates
//! the contract once (batch 1, single-channel mask, matching spatial
//! extents, positive spacing), makes non-contiguous views contiguous, and
//! hands flat slices to the kernels.

use std::borrow::Cow;

use ndarray::{Array4, Array5, ArrayView, ArrayView4, ArrayView5, Dimension};

use crate::error::{GeodisError, Result};
use crate::{geodesic2d, geodesic3d, gsf};

/// Borrow a view's data in logical order, copying only if non-contiguous
fn flat_view<'a, D: Dimension>(view: &ArrayView<'a, f32, D>) -> Cow<'a, [f32]> {
    match view.to_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(view.iter().copied().collect()),
    }
}

fn check_2d(image: &ArrayView4<'_, f32>, mask: &ArrayView4<'_, f32>) -> Result<()> {
    let (ib, _ic, ih, iw) = image.dim();
    let (mb, mc, mh, mw) = mask.dim();
    if ib != 1 {
        return Err(GeodisError::BatchSize(ib));
    }
    if mb != 1 {
        return Err(GeodisError::BatchSize(mb));
    }
    if mc != 1 {
        return Err(GeodisError::MaskChannels(mc));
    }
    if (ih, iw) != (mh, mw) {
        return Err(GeodisError::SpatialMismatch {
            image: vec![ih, iw],
            mask: vec![mh, mw],
        });
    }
    Ok(())
}

fn check_3d(image: &ArrayView5<'_, f32>, mask: &ArrayView5<'_, f32>) -> Result<()> {
    let (ib, _ic, id, ih, iw) = image.dim();
    let (mb, mc, md, mh, mw) = mask.dim();
    if ib != 1 {
        return Err(GeodisError::BatchSize(ib));
    }
    if mb != 1 {
        return Err(GeodisError::BatchSize(mb));
    }
    if mc != 1 {
        return Err(GeodisError::MaskChannels(mc));
    }
    if (id, ih, iw) != (md, mh, mw) {
        return Err(GeodisError::SpatialMismatch {
            image: vec![id, ih, iw],
            mask: vec![md, mh, mw],
        });
    }
    Ok(())
}

fn check_spacing(spacing: [f32; 3]) -> Result<()> {
    if spacing.iter().any(|&s| !(s > 0.0)) {
        return Err(GeodisError::NonPositiveSpacing(spacing));
    }
    Ok(())
}

fn check_lamb(lamb: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&lamb) {
        return Err(GeodisError::LambOutOfRange(lamb));
    }
    Ok(())
}

/// Generalised geodesic distance over a [1, C, H, W] image view
///
/// `mask` is [1, 1, H, W] with 0.0 at seeds and 1.0 elsewhere; the field
/// starts at `v * mask`. Returns the [1, 1, H, W] distance field.
pub fn generalised_geodesic2d(
    image: ArrayView4<'_, f32>, mask: ArrayView4<'_, f32>,
    v: f32, l_grad: f32, l_eucl: f32, iterations: usize,
) -> Result<Array4<f32>> {
    check_2d(&image, &mask)?;
    let (_, channels, height, width) = image.dim();
    let image_flat = flat_view(&image);
    let mask_flat = flat_view(&mask);
    let out = geodesic2d::generalised_geodesic2d(
        &image_flat, &mask_flat, channels, height, width, v, l_grad, l_eucl, iterations,
    );
    Ok(Array4::from_shape_vec((1, 1, height, width), out)?)
}

/// Generalised geodesic distance over a [1, C, D, H, W] volume view
///
/// `mask` is [1, 1, D, H, W] with 0.0 at seeds and 1.0 elsewhere; `spacing`
/// is the physical voxel extent along depth, height, width. Returns the
/// [1, 1, D, H, W] distance field.
pub fn generalised_geodesic3d(
    image: ArrayView5<'_, f32>, mask: ArrayView5<'_, f32>,
    spacing: [f32; 3],
    v: f32, l_grad: f32, l_eucl: f32, iterations: usize,
) -> Result<Array5<f32>> {
    check_3d(&image, &mask)?;
    check_spacing(spacing)?;
    let (_, channels, depth, height, width) = image.dim();
    let image_flat = flat_view(&image);
    let mask_flat = flat_view(&mask);
    let out = geodesic3d::generalised_geodesic3d(
        &image_flat, &mask_flat, channels, depth, height, width, spacing, v, l_grad, l_eucl,
        iterations,
    );
    Ok(Array5::from_shape_vec((1, 1, depth, height, width), out)?)
}

/// Signed geodesic distance `D(mask) - D(1 - mask)` over a 2D view
///
/// `lamb` in [0, 1] blends the intensity term (`l_grad = lamb`) against the
/// spatial term (`l_eucl = 1 - lamb`).
pub fn signed_generalised_geodesic2d(
    image: ArrayView4<'_, f32>, mask: ArrayView4<'_, f32>,
    v: f32, lamb: f32, iterations: usize,
) -> Result<Array4<f32>> {
    check_2d(&image, &mask)?;
    check_lamb(lamb)?;
    let (_, channels, height, width) = image.dim();
    let image_flat = flat_view(&image);
    let mask_flat = flat_view(&mask);
    let out = gsf::signed_generalised_geodesic2d(
        &image_flat, &mask_flat, channels, height, width, v, lamb, iterations,
    );
    Ok(Array4::from_shape_vec((1, 1, height, width), out)?)
}

/// Signed geodesic distance `D(mask) - D(1 - mask)` over a 3D view
pub fn signed_generalised_geodesic3d(
    image: ArrayView5<'_, f32>, mask: ArrayView5<'_, f32>,
    spacing: [f32; 3],
    v: f32, lamb: f32, iterations: usize,
) -> Result<Array5<f32>> {
    check_3d(&image, &mask)?;
    check_spacing(spacing)?;
    check_lamb(lamb)?;
    let (_, channels, depth, height, width) = image.dim();
    let image_flat = flat_view(&image);
    let mask_flat = flat_view(&mask);
    let out = gsf::signed_generalised_geodesic3d(
        &image_flat, &mask_flat, channels, depth, height, width, spacing, v, lamb, iterations,
    );
    Ok(Array5::from_shape_vec((1, 1, depth, height, width), out)?)
}

/// Geodesic symmetric filtering over a 2D view
///
/// Thresholds the signed field at `+/- theta` and rebuilds a signed distance
/// from the thresholded masks.
pub fn gsf2d(
    image: ArrayView4<'_, f32>, mask: ArrayView4<'_, f32>,
    theta: f32, v: f32, lamb: f32, iterations: usize,
) -> Result<Array4<f32>> {
    check_2d(&image, &mask)?;
    check_lamb(lamb)?;
    let (_, channels, height, width) = image.dim();
    let image_flat = flat_view(&image);
    let mask_flat = flat_view(&mask);
    let out = gsf::gsf2d(
        &image_flat, &mask_flat, channels, height, width, theta, v, lamb, iterations,
    );
    Ok(Array4::from_shape_vec((1, 1, height, width), out)?)
}

/// Geodesic symmetric filtering over a 3D view
pub fn gsf3d(
    image: ArrayView5<'_, f32>, mask: ArrayView5<'_, f32>,
    spacing: [f32; 3],
    theta: f32, v: f32, lamb: f32, iterations: usize,
) -> Result<Array5<f32>> {
    check_3d(&image, &mask)?;
    check_spacing(spacing)?;
    check_lamb(lamb)?;
    let (_, channels, depth, height, width) = image.dim();
    let image_flat = flat_view(&image);
    let mask_flat = flat_view(&mask);
    let out = gsf::gsf3d(
        &image_flat, &mask_flat, channels, depth, height, width, spacing, theta, v, lamb,
        iterations,
    );
    Ok(Array5::from_shape_vec((1, 1, depth, height, width), out)?)
}
