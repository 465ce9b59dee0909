//! # oxlab - batched sRGB / XYZ / Lab conversions
//!
//! Converts `(batch, row, column, 3)` image tensors between RGB, CIE XYZ and
//! CIE L\*a\*b\* (D65). Every conversion is a pure, per-pixel function: it
//! reads the input tensor and returns a new one of the same shape.
//!
//! ## Conversions
//!
//! | Function | From | To |
//! |---|---|---|
//! | [`rgb_to_xyz`] / [`xyz_to_rgb`] | linear RGB | XYZ (white Y = 1) |
//! | [`xyz_to_lab`] / [`lab_to_xyz`] | XYZ | Lab |
//! | [`rgb_to_lab`] / [`lab_to_rgb`] | linear RGB | Lab |
//! | [`linearize`] / [`delinearize`] | sRGB [0, 1] | linear RGB [0, 100] |
//! | [`srgb_to_xyz`] / [`xyz_to_srgb`] | sRGB [0, 1] | XYZ [0, 100] |
//! | [`srgb_to_lab`] / [`lab_to_srgb`] | sRGB [0, 1] | Lab |
//!
//! Only the functions that produce sRGB clamp their output.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::Array4;
//! use oxlab_core::{rgb_to_lab, lab_to_rgb};
//!
//! let images = Array4::<f64>::from_elem((2, 4, 4, 3), 0.5);
//! let lab = rgb_to_lab(&images);
//! let back = lab_to_rgb(&lab);
//!
//! assert_eq!(lab.shape(), images.shape());
//! assert!((back[[0, 0, 0, 0]] - 0.5).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): split pixel work across the rayon thread pool.

pub mod batch;
pub mod color;
pub mod convert;
pub mod error;
pub mod math;
pub mod pixel;
pub mod simd;
pub mod transform;

pub use batch::{CHANNELS, ImageBatch, batch_from_vec, check_batch};
pub use color::{D65, EPSILON, KAPPA, Lab, Rgb, WhitePoint, Xyz};
pub use convert::{
    delinearize, lab_to_rgb, lab_to_srgb, lab_to_xyz, linearize, rgb_to_lab, rgb_to_xyz,
    srgb_to_lab, srgb_to_xyz, xyz_to_lab, xyz_to_rgb, xyz_to_srgb,
};
pub use error::{Error, Result};
pub use math::{Matrix3x3, RGB_TO_XYZ, XYZ_SCALE, XYZ_TO_RGB};
pub use transform::{ColorSpace, Conversion};

/// Version of oxlab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
