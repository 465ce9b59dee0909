//! Mathematical building blocks for the conversions
//!
//! - 3x3 matrix operations and the RGB↔XYZ matrices
//! - sRGB transfer function evaluation

pub mod gamma;
pub mod matrix;

pub use gamma::{XYZ_SCALE, delinearize, linearize, srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{Matrix3x3, RGB_TO_XYZ, XYZ_TO_RGB};
