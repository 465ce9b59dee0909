//! Reference implementation wrappers
//!
//! Runs the same conversions through `palette` so oxlab can be checked
//! against an independent implementation.

use ndarray::{ArrayBase, Axis, Data, Ix4, Zip};
use oxlab_core::ImageBatch;
use palette::white_point::D65;
use palette::{FromColor, Lab, LinSrgb, Srgb, Xyz};

/// Encoded sRGB → Lab using palette
pub fn palette_srgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_linear();
    let lab = Lab::<D65, f64>::from_color(linear);
    [lab.l, lab.a, lab.b]
}

/// Linear RGB → Lab using palette
pub fn palette_linear_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let lab = Lab::<D65, f64>::from_color(LinSrgb::new(rgb[0], rgb[1], rgb[2]));
    [lab.l, lab.a, lab.b]
}

/// Linear RGB → XYZ (white Y = 1) using palette
pub fn palette_linear_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let xyz = Xyz::<D65, f64>::from_color(LinSrgb::new(rgb[0], rgb[1], rgb[2]));
    [xyz.x, xyz.y, xyz.z]
}

/// Lab → encoded sRGB using palette, unclamped
pub fn palette_lab_to_srgb(lab: [f64; 3]) -> [f64; 3] {
    let rgb = Srgb::<f64>::from_linear(LinSrgb::from_color(Lab::<D65, f64>::new(
        lab[0], lab[1], lab[2],
    )));
    [rgb.red, rgb.green, rgb.blue]
}

/// Apply a per-pixel reference function to a whole batch
pub fn map_reference<S>(images: &ArrayBase<S, Ix4>, f: fn([f64; 3]) -> [f64; 3]) -> ImageBatch
where
    S: Data<Elem = f64>,
{
    let mut out = ImageBatch::zeros(images.raw_dim());
    Zip::from(out.lanes_mut(Axis(3)))
        .and(images.lanes(Axis(3)))
        .for_each(|mut dst, src| {
            let px = f([src[0], src[1], src[2]]);
            dst[0] = px[0];
            dst[1] = px[1];
            dst[2] = px[2];
        });
    out
}
