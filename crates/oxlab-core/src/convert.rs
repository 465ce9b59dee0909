//! Tensor-level color conversions
//!
//! Every function takes any 4-D `f64` array (owned, view, or strided view)
//! shaped `(batch, row, column, 3)` and returns a freshly allocated batch of
//! the same shape. Inputs are never modified; use
//! [`Conversion::apply_in_place`](crate::Conversion::apply_in_place) to
//! overwrite a buffer explicitly.
//!
//! Values outside the expected domain are not rejected. They produce
//! whatever the arithmetic gives, which may be NaN.
//!
//! # Panics
//!
//! All functions panic if the channel axis does not have length 3. Use
//! [`check_batch`](crate::check_batch) to validate untrusted tensors first.

use ndarray::{ArrayBase, Data, Ix4};

use crate::batch::{ImageBatch, map_pixels};
use crate::math::{RGB_TO_XYZ, XYZ_TO_RGB};
use crate::{pixel, simd};

/// Linear RGB → XYZ (white Y = 1). No clamping.
pub fn rgb_to_xyz<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::matrix_multiply_vec3_batch(&RGB_TO_XYZ.m, src, dst);
    })
}

/// XYZ → linear RGB. No clamping.
pub fn xyz_to_rgb<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::matrix_multiply_vec3_batch(&XYZ_TO_RGB.m, src, dst);
    })
}

/// XYZ → CIE Lab, normalized against D65
pub fn xyz_to_lab<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::xyz_to_lab);
    })
}

/// CIE Lab → XYZ, the inverse of [`xyz_to_lab`]
///
/// Lightness round trips exactly. Below `L = κ·ε` a*/b* come back only to
/// about 3e-4, since κ/116 is not exactly the 7.787 slope of the forward
/// curve.
pub fn lab_to_xyz<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::lab_to_xyz);
    })
}

/// Linear RGB → Lab; identical to `xyz_to_lab(&rgb_to_xyz(images))`
pub fn rgb_to_lab<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::rgb_to_lab);
    })
}

/// Lab → linear RGB; identical to `xyz_to_rgb(&lab_to_xyz(images))`
pub fn lab_to_rgb<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::lab_to_rgb);
    })
}

/// sRGB gamma decode, scaled to [0, 100]
pub fn linearize<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::linearize_batch(src.as_flattened(), dst.as_flattened_mut());
    })
}

/// Inverse of [`linearize`]; the result is clamped to [0, 1]
pub fn delinearize<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::delinearize_batch(src.as_flattened(), dst.as_flattened_mut());
    })
}

/// Encoded sRGB → XYZ on the [0, 100] scale
pub fn srgb_to_xyz<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::srgb_to_xyz);
    })
}

/// XYZ on the [0, 100] scale → encoded sRGB, clamped to [0, 1]
pub fn xyz_to_srgb<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::xyz_to_srgb);
    })
}

/// Encoded sRGB → Lab
pub fn srgb_to_lab<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::srgb_to_lab);
    })
}

/// Lab → encoded sRGB, clamped to [0, 1]
pub fn lab_to_srgb<S>(images: &ArrayBase<S, Ix4>) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    map_pixels(images, |src, dst| {
        simd::transform_pixels_batch(src, dst, pixel::lab_to_srgb);
    })
}
