//! Conversion descriptors
//!
//! A [`Conversion`] names one of the tensor conversions as a value, so a host
//! that tracks the color space of its buffers can look up the conversion
//! between two tags, invert it, or apply it in place.

use std::fmt;

use ndarray::{ArrayBase, Data, DataMut, Ix4};

use crate::batch::{ImageBatch, map_pixels_in_place};
use crate::{convert, pixel};

/// Color space a batch holds
///
/// Not stored in the tensor; callers track it alongside their buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// RGB, linear for the core conversions or sRGB-encoded for the gamma-aware ones
    Rgb,
    /// CIE 1931 XYZ
    Xyz,
    /// CIE L*a*b* relative to D65
    Lab,
}

impl ColorSpace {
    /// Number of channels for this color space
    pub fn channels(&self) -> usize {
        3
    }

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Xyz => "XYZ",
            Self::Lab => "Lab",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the batch conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// [`convert::rgb_to_xyz`]
    RgbToXyz,
    /// [`convert::xyz_to_rgb`]
    XyzToRgb,
    /// [`convert::xyz_to_lab`]
    XyzToLab,
    /// [`convert::lab_to_xyz`]
    LabToXyz,
    /// [`convert::rgb_to_lab`]
    RgbToLab,
    /// [`convert::lab_to_rgb`]
    LabToRgb,
    /// [`convert::linearize`]
    Linearize,
    /// [`convert::delinearize`]
    Delinearize,
    /// [`convert::srgb_to_xyz`]
    SrgbToXyz,
    /// [`convert::xyz_to_srgb`]
    XyzToSrgb,
    /// [`convert::srgb_to_lab`]
    SrgbToLab,
    /// [`convert::lab_to_srgb`]
    LabToSrgb,
}

impl Conversion {
    /// Every conversion, in declaration order
    pub const ALL: [Conversion; 12] = [
        Self::RgbToXyz,
        Self::XyzToRgb,
        Self::XyzToLab,
        Self::LabToXyz,
        Self::RgbToLab,
        Self::LabToRgb,
        Self::Linearize,
        Self::Delinearize,
        Self::SrgbToXyz,
        Self::XyzToSrgb,
        Self::SrgbToLab,
        Self::LabToSrgb,
    ];

    /// Core (gamma-free) conversion between two color spaces
    ///
    /// Returns `None` when `from == to`.
    pub fn between(from: ColorSpace, to: ColorSpace) -> Option<Self> {
        use ColorSpace::*;

        match (from, to) {
            (Rgb, Xyz) => Some(Self::RgbToXyz),
            (Xyz, Rgb) => Some(Self::XyzToRgb),
            (Xyz, Lab) => Some(Self::XyzToLab),
            (Lab, Xyz) => Some(Self::LabToXyz),
            (Rgb, Lab) => Some(Self::RgbToLab),
            (Lab, Rgb) => Some(Self::LabToRgb),
            _ => None,
        }
    }

    /// Color space the input batch is expected to hold
    pub fn source(&self) -> ColorSpace {
        match self {
            Self::RgbToXyz
            | Self::RgbToLab
            | Self::Linearize
            | Self::Delinearize
            | Self::SrgbToXyz
            | Self::SrgbToLab => ColorSpace::Rgb,
            Self::XyzToRgb | Self::XyzToLab | Self::XyzToSrgb => ColorSpace::Xyz,
            Self::LabToXyz | Self::LabToRgb | Self::LabToSrgb => ColorSpace::Lab,
        }
    }

    /// Color space the output batch holds
    pub fn target(&self) -> ColorSpace {
        match self {
            Self::XyzToRgb
            | Self::LabToRgb
            | Self::Linearize
            | Self::Delinearize
            | Self::XyzToSrgb
            | Self::LabToSrgb => ColorSpace::Rgb,
            Self::RgbToXyz | Self::LabToXyz | Self::SrgbToXyz => ColorSpace::Xyz,
            Self::XyzToLab | Self::RgbToLab | Self::SrgbToLab => ColorSpace::Lab,
        }
    }

    /// The conversion that undoes this one
    pub fn inverse(&self) -> Self {
        match self {
            Self::RgbToXyz => Self::XyzToRgb,
            Self::XyzToRgb => Self::RgbToXyz,
            Self::XyzToLab => Self::LabToXyz,
            Self::LabToXyz => Self::XyzToLab,
            Self::RgbToLab => Self::LabToRgb,
            Self::LabToRgb => Self::RgbToLab,
            Self::Linearize => Self::Delinearize,
            Self::Delinearize => Self::Linearize,
            Self::SrgbToXyz => Self::XyzToSrgb,
            Self::XyzToSrgb => Self::SrgbToXyz,
            Self::SrgbToLab => Self::LabToSrgb,
            Self::LabToSrgb => Self::SrgbToLab,
        }
    }

    /// Whether the output is clamped to [0, 1]
    pub fn clamps(&self) -> bool {
        matches!(self, Self::Delinearize | Self::XyzToSrgb | Self::LabToSrgb)
    }

    /// Per-pixel form of this conversion
    pub fn pixel_fn(&self) -> fn([f64; 3]) -> [f64; 3] {
        match self {
            Self::RgbToXyz => pixel::rgb_to_xyz,
            Self::XyzToRgb => pixel::xyz_to_rgb,
            Self::XyzToLab => pixel::xyz_to_lab,
            Self::LabToXyz => pixel::lab_to_xyz,
            Self::RgbToLab => pixel::rgb_to_lab,
            Self::LabToRgb => pixel::lab_to_rgb,
            Self::Linearize => pixel::linearize,
            Self::Delinearize => pixel::delinearize,
            Self::SrgbToXyz => pixel::srgb_to_xyz,
            Self::XyzToSrgb => pixel::xyz_to_srgb,
            Self::SrgbToLab => pixel::srgb_to_lab,
            Self::LabToSrgb => pixel::lab_to_srgb,
        }
    }

    /// Convert a batch, returning a new one
    ///
    /// # Panics
    ///
    /// Panics if the channel axis does not have length 3.
    pub fn apply<S>(&self, images: &ArrayBase<S, Ix4>) -> ImageBatch
    where
        S: Data<Elem = f64>,
    {
        match self {
            Self::RgbToXyz => convert::rgb_to_xyz(images),
            Self::XyzToRgb => convert::xyz_to_rgb(images),
            Self::XyzToLab => convert::xyz_to_lab(images),
            Self::LabToXyz => convert::lab_to_xyz(images),
            Self::RgbToLab => convert::rgb_to_lab(images),
            Self::LabToRgb => convert::lab_to_rgb(images),
            Self::Linearize => convert::linearize(images),
            Self::Delinearize => convert::delinearize(images),
            Self::SrgbToXyz => convert::srgb_to_xyz(images),
            Self::XyzToSrgb => convert::xyz_to_srgb(images),
            Self::SrgbToLab => convert::srgb_to_lab(images),
            Self::LabToSrgb => convert::lab_to_srgb(images),
        }
    }

    /// Convert a batch by overwriting it
    ///
    /// Writes the same values [`apply`](Self::apply) would return. Any other
    /// binding to the buffer observes the change.
    ///
    /// # Panics
    ///
    /// Panics if the channel axis does not have length 3.
    pub fn apply_in_place<S>(&self, images: &mut ArrayBase<S, Ix4>)
    where
        S: DataMut<Elem = f64>,
    {
        map_pixels_in_place(images, self.pixel_fn());
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gamma = matches!(
            self,
            Self::SrgbToXyz | Self::XyzToSrgb | Self::SrgbToLab | Self::LabToSrgb
        );
        match self {
            Self::Linearize => f.write_str("sRGB→linear RGB"),
            Self::Delinearize => f.write_str("linear RGB→sRGB"),
            _ if gamma && self.source() == ColorSpace::Rgb => write!(f, "sRGB→{}", self.target()),
            _ if gamma => write!(f, "{}→sRGB", self.source()),
            _ => write!(f, "{}→{}", self.source(), self.target()),
        }
    }
}
