//! sRGB transfer function
//!
//! The IEC 61966-2-1 piecewise curve. The scalar functions work on the
//! [0, 1] scale; [`linearize`] and [`delinearize`] add the ×100 scaling used
//! by the gamma-aware XYZ path.

/// Encoded value below which the decode curve is linear
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value below which the encode curve is linear
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear segment
pub const LINEAR_SCALE: f64 = 12.92;

const POWER_OFFSET: f64 = 0.055;
const POWER_SCALE: f64 = 1.055;
const POWER_EXP: f64 = 2.4;

/// Magnitude of the gamma-aware XYZ scale (white Y = 100)
pub const XYZ_SCALE: f64 = 100.0;

/// sRGB gamma decode (encoded → linear)
///
/// Converts sRGB-encoded value [0,1] to linear light [0,1].
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded > DECODE_THRESHOLD {
        ((encoded + POWER_OFFSET) / POWER_SCALE).powf(POWER_EXP)
    } else {
        encoded / LINEAR_SCALE
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light [0,1] to sRGB-encoded value. Not clamped.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear > ENCODE_THRESHOLD {
        POWER_SCALE * linear.powf(1.0 / POWER_EXP) - POWER_OFFSET
    } else {
        linear * LINEAR_SCALE
    }
}

/// Decode one channel and scale to the [0, 100] magnitude
#[inline]
pub fn linearize(encoded: f64) -> f64 {
    srgb_gamma_decode(encoded) * XYZ_SCALE
}

/// Inverse of [`linearize`], clamped to [0, 1]
///
/// Inputs far outside the expected range are clamped, never rejected.
/// NaN stays NaN.
#[inline]
pub fn delinearize(linear: f64) -> f64 {
    srgb_gamma_encode(linear / XYZ_SCALE).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encode_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = srgb_gamma_encode(srgb_gamma_decode(v));
            assert!((v - back).abs() < 1e-9, "{v} -> {back}");
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(srgb_gamma_decode(0.0), 0.0);
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < 1e-12);
        // Mid gray (0.5) is about 21.4% linear light
        assert!((srgb_gamma_decode(0.5) - 0.214041).abs() < 1e-5);
    }

    #[test]
    fn test_linear_segment() {
        assert!((srgb_gamma_decode(0.04) - 0.04 / 12.92).abs() < 1e-15);
        assert!((srgb_gamma_encode(0.003) - 0.003 * 12.92).abs() < 1e-15);
    }

    #[test]
    fn test_segments_meet() {
        let below = srgb_gamma_decode(DECODE_THRESHOLD);
        let above = srgb_gamma_decode(DECODE_THRESHOLD + 1e-12);
        assert!((below - above).abs() < 1e-6);

        let below = srgb_gamma_encode(ENCODE_THRESHOLD);
        let above = srgb_gamma_encode(ENCODE_THRESHOLD + 1e-12);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_linearize_scale() {
        assert!((linearize(1.0) - 100.0).abs() < 1e-10);
        assert!((delinearize(100.0) - 1.0).abs() < 1e-10);
        assert!((delinearize(linearize(0.73)) - 0.73).abs() < 1e-9);
    }

    #[test]
    fn test_delinearize_clamps() {
        assert_eq!(delinearize(1e6), 1.0);
        assert_eq!(delinearize(-1e6), 0.0);
        assert!(delinearize(f64::NAN).is_nan());
    }
}
