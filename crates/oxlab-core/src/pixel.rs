//! Single-pixel conversions on `[f64; 3]`
//!
//! Each function is the per-pixel body of the tensor conversion with the
//! same name in [`crate::convert`]. Composite conversions chain the simple
//! ones without clamping in between.

use crate::color::{Lab, Rgb, Xyz};
use crate::math::{XYZ_SCALE, delinearize as delin, linearize as lin};

/// Linear RGB → XYZ
#[inline]
pub fn rgb_to_xyz(px: [f64; 3]) -> [f64; 3] {
    Xyz::from_linear_rgb(Rgb::from_array(px)).to_array()
}

/// XYZ → linear RGB
#[inline]
pub fn xyz_to_rgb(px: [f64; 3]) -> [f64; 3] {
    Xyz::from_array(px).to_linear_rgb().to_array()
}

/// XYZ → Lab (D65)
#[inline]
pub fn xyz_to_lab(px: [f64; 3]) -> [f64; 3] {
    Lab::from_xyz(Xyz::from_array(px)).to_array()
}

/// Lab (D65) → XYZ
///
/// Inverse of [`xyz_to_lab`] except that below `L = κ·ε` the a*/b* channels
/// come back only to about 3e-4.
#[inline]
pub fn lab_to_xyz(px: [f64; 3]) -> [f64; 3] {
    Lab::from_array(px).to_xyz().to_array()
}

/// Linear RGB → Lab
#[inline]
pub fn rgb_to_lab(px: [f64; 3]) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(px))
}

/// Lab → linear RGB
#[inline]
pub fn lab_to_rgb(px: [f64; 3]) -> [f64; 3] {
    xyz_to_rgb(lab_to_xyz(px))
}

/// Encoded sRGB → linear RGB on the [0, 100] scale
#[inline]
pub fn linearize(px: [f64; 3]) -> [f64; 3] {
    px.map(lin)
}

/// Linear RGB on the [0, 100] scale → encoded sRGB in [0, 1]
#[inline]
pub fn delinearize(px: [f64; 3]) -> [f64; 3] {
    px.map(delin)
}

/// Encoded sRGB → XYZ on the [0, 100] scale
#[inline]
pub fn srgb_to_xyz(px: [f64; 3]) -> [f64; 3] {
    rgb_to_xyz(linearize(px))
}

/// XYZ on the [0, 100] scale → encoded sRGB in [0, 1]
#[inline]
pub fn xyz_to_srgb(px: [f64; 3]) -> [f64; 3] {
    delinearize(xyz_to_rgb(px))
}

/// Encoded sRGB → Lab
#[inline]
pub fn srgb_to_lab(px: [f64; 3]) -> [f64; 3] {
    xyz_to_lab(srgb_to_xyz(px).map(|c| c / XYZ_SCALE))
}

/// Lab → encoded sRGB in [0, 1]
#[inline]
pub fn lab_to_srgb(px: [f64; 3]) -> [f64; 3] {
    xyz_to_srgb(lab_to_xyz(px).map(|c| c * XYZ_SCALE))
}
