//! Reference white point
//!
//! XYZ of the illuminant that Lab normalizes against, with Y = 1.0. Only
//! D65 is defined.

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

impl WhitePoint {
    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Xyz::new(x, y, z),
        }
    }

    /// Components as an array, in X, Y, Z order
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        self.xyz.to_array()
    }
}

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// The only illuminant the conversions use.
pub const D65: WhitePoint = WhitePoint::new(0.950456, 1.0, 1.088754);
