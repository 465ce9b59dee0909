//! Test pattern generation
//!
//! Builds `(batch, row, column, 3)` tensors for the conversion tests. Every
//! image in a batch gets the same pattern unless the pattern is random.

use ndarray::Array4;
use oxlab_core::ImageBatch;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Horizontal gray gradient black to white
    GradientH,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Very dark values around the Lab linear-branch threshold
    Shadows,
    /// Uniform random values in [0, 1) with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// All zeros (black)
    Black,
    /// All ones (white)
    White,
}

impl TestPattern {
    /// Every deterministic pattern plus one seeded random pattern
    pub const ALL: [TestPattern; 8] = [
        TestPattern::GradientH,
        TestPattern::ColorCube,
        TestPattern::HueRamp,
        TestPattern::Shadows,
        TestPattern::Random(42),
        TestPattern::SkinTones,
        TestPattern::Black,
        TestPattern::White,
    ];
}

/// Generate a pattern as encoded sRGB values in [0, 1]
///
/// `shape` is `(batch, height, width)`.
pub fn generate_pattern(pattern: TestPattern, shape: (usize, usize, usize)) -> ImageBatch {
    let (batch, height, width) = shape;
    let mut images = Array4::<f64>::zeros((batch, height, width, 3));

    if let TestPattern::Random(seed) = pattern {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        images.mapv_inplace(|_| rng.r#gen::<f64>());
        return images;
    }

    let pixel_count = height * width;
    for ((_, y, x, c), value) in images.indexed_iter_mut() {
        let i = y * width + x;
        let t = i as f64 / pixel_count.max(1) as f64;
        *value = match pattern {
            TestPattern::GradientH => x as f64 / width.max(1) as f64,
            TestPattern::ColorCube => ((i % 8) >> c & 1) as f64,
            TestPattern::HueRamp => hsl_to_rgb(t * 360.0, 1.0, 0.5)[c],
            TestPattern::Shadows => 0.12 * t,
            TestPattern::SkinTones => SKIN_TONES[i % SKIN_TONES.len()][c] as f64 / 255.0,
            TestPattern::Black => 0.0,
            TestPattern::White => 1.0,
            TestPattern::Random(_) => unreachable!(),
        };
    }

    images
}

/// Seeded random Lab batch with L in [0, 100] and a, b in [-100, 100]
pub fn random_lab(seed: u64, shape: (usize, usize, usize)) -> ImageBatch {
    let (batch, height, width) = shape;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array4::from_shape_fn((batch, height, width, 3), |(_, _, _, c)| {
        if c == 0 {
            rng.gen_range(0.0..100.0)
        } else {
            rng.gen_range(-100.0..100.0)
        }
    })
}

/// Seeded random batch with every value in `range`
pub fn random_uniform(
    seed: u64,
    shape: (usize, usize, usize),
    range: std::ops::Range<f64>,
) -> ImageBatch {
    let (batch, height, width) = shape;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array4::from_shape_fn((batch, height, width, 3), |_| rng.gen_range(range.clone()))
}

const SKIN_TONES: [[u8; 3]; 6] = [
    [255, 224, 189],
    [241, 194, 125],
    [224, 172, 105],
    [198, 134, 66],
    [141, 85, 36],
    [89, 47, 42],
];

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Standard test sizes as `(batch, height, width)`
pub mod sizes {
    pub const TINY: (usize, usize, usize) = (1, 8, 8);
    pub const SMALL: (usize, usize, usize) = (2, 32, 32);
    pub const MEDIUM: (usize, usize, usize) = (4, 128, 128);
}
