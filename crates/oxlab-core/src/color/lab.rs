//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! The cube-root nonlinearity has infinite slope at zero, so near-black
//! values go through a linear segment instead. One constant regime is used
//! throughout: `EPSILON` and `KAPPA` from CIE, with the `7.787·t + 16/116`
//! linear segment inside `f`.

use crate::color::{D65, Xyz};

/// Cutoff between the linear and cube-root regions, in white-relative XYZ
pub const EPSILON: f64 = 0.008856;

/// Slope of lightness in the linear region
pub const KAPPA: f64 = 903.3;

/// Slope of the linear segment of `f`
pub const LINEAR_SLOPE: f64 = 7.787;

/// Offset of the linear segment of `f`
pub const LINEAR_OFFSET: f64 = 16.0 / 116.0;

/// Lightness at which the inverse switches to the cube branch (κ·ε)
pub const LIGHTNESS_THRESHOLD: f64 = KAPPA * EPSILON;

/// Value of `f` at the top of its linear segment (≈ ε^(1/3))
///
/// The inverse of `f` switches branches here.
pub const F_THRESHOLD: f64 = LINEAR_SLOPE * EPSILON + LINEAR_OFFSET;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ, normalized against D65
    pub fn from_xyz(xyz: Xyz) -> Self {
        let rel = xyz.relative_to(&D65);

        let fx = lab_f(rel.x);
        let fy = lab_f(rel.y);
        let fz = lab_f(rel.z);

        let l = if rel.y > EPSILON {
            116.0 * fy - 16.0
        } else {
            KAPPA * rel.y
        };

        Self {
            l,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to XYZ, scaled by D65
    ///
    /// Below `L = κ·ε` lightness comes back through `L / κ`, and κ/116 is not
    /// exactly the 7.787 slope of `f`, so a*/b* of such colors round trip
    /// through XYZ only to about 3e-4.
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let yr = if self.l > LIGHTNESS_THRESHOLD {
            fy * fy * fy
        } else {
            self.l / KAPPA
        };

        Xyz::new(lab_f_inv(fx), yr, lab_f_inv(fz)).absolute_from(&D65)
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
pub fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + LINEAR_OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
pub fn lab_f_inv(t: f64) -> f64 {
    if t > F_THRESHOLD {
        t * t * t
    } else {
        (t - LINEAR_OFFSET) / LINEAR_SLOPE
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
