//! Per-pixel color types and conversions
//!
//! This module provides:
//! - CIE XYZ color space
//! - CIELAB (L*a*b*) color space and its piecewise constants
//! - RGB primitives (encoded and linear)
//! - The D65 reference white

pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use lab::{EPSILON, KAPPA, Lab, lab_f, lab_f_inv};
pub use rgb::Rgb;
pub use white_point::{D65, WhitePoint};
pub use xyz::Xyz;
