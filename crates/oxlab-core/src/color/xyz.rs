//! CIE XYZ Color Space
//!
//! XYZ sits between RGB and Lab in every conversion chain here.

use crate::color::{Rgb, WhitePoint};
use crate::math::{RGB_TO_XYZ, XYZ_TO_RGB};

/// CIE 1931 XYZ color coordinates
///
/// Y represents luminance. The core conversions keep the white point at
/// Y = 1.0; the gamma-aware path scales it to 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Linear RGB → XYZ. No clamping.
    #[inline]
    pub fn from_linear_rgb(rgb: Rgb) -> Self {
        Self::from_array(RGB_TO_XYZ.multiply_vec(rgb.to_array()))
    }

    /// XYZ → linear RGB. No clamping.
    #[inline]
    pub fn to_linear_rgb(&self) -> Rgb {
        Rgb::from_array(XYZ_TO_RGB.multiply_vec(self.to_array()))
    }

    /// Divide each component by the matching white point component
    #[inline]
    pub(crate) fn relative_to(&self, white: &WhitePoint) -> Self {
        Self {
            x: self.x / white.xyz.x,
            y: self.y / white.xyz.y,
            z: self.z / white.xyz.z,
        }
    }

    /// Multiply each component by the matching white point component
    #[inline]
    pub(crate) fn absolute_from(&self, white: &WhitePoint) -> Self {
        Self {
            x: self.x * white.xyz.x,
            y: self.y * white.xyz.y,
            z: self.z * white.xyz.z,
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}
