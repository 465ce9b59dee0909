//! Known-value tests
//!
//! Lab values for common colors, computed with the D65 white point and the
//! 0.008856 / 903.3 threshold constants.

use oxlab_core::{
    D65, EPSILON, KAPPA, RGB_TO_XYZ, XYZ_TO_RGB, lab_to_xyz, rgb_to_lab, rgb_to_xyz, srgb_to_lab,
    xyz_to_lab,
};
use oxlab_tests::{init_tracing, pixel_at, pixel_row};

#[test]
fn test_white_and_black() -> anyhow::Result<()> {
    init_tracing();

    let lab = rgb_to_lab(&pixel_row(&[[1.0, 1.0, 1.0], [0.0, 0.0, 0.0]])?);

    let white = pixel_at(&lab, 0);
    assert!((white[0] - 100.0).abs() < 1e-3, "white L = {}", white[0]);
    assert!(white[1].abs() < 0.01, "white a = {}", white[1]);
    assert!(white[2].abs() < 0.01, "white b = {}", white[2]);

    assert_eq!(pixel_at(&lab, 1), [0.0, 0.0, 0.0]);
    Ok(())
}

#[test]
fn test_d65_white_point() -> anyhow::Result<()> {
    let lab = xyz_to_lab(&pixel_row(&[D65.to_array()])?);
    assert_eq!(pixel_at(&lab, 0), [100.0, 0.0, 0.0]);

    let xyz = lab_to_xyz(&lab);
    let back = pixel_at(&xyz, 0);
    for (a, b) in back.iter().zip(D65.to_array()) {
        assert!((a - b).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn test_srgb_lab_table() -> anyhow::Result<()> {
    init_tracing();

    // [R, G, B] encoded, expected Lab
    let cases: [([f64; 3], [f64; 3]); 6] = [
        ([1.0, 1.0, 1.0], [100.0, 0.0026, -0.0047]),
        ([128.0 / 255.0; 3], [53.5850, 0.0016, -0.0028]),
        ([1.0, 0.0, 0.0], [53.2408, 80.0945, 67.2019]),
        ([0.0, 1.0, 0.0], [87.7347, -86.1809, 83.1771]),
        ([0.0, 0.0, 1.0], [32.2969, 79.1896, -107.8649]),
        ([1.0, 1.0, 0.0], [97.1392, -21.5514, 94.4756]),
    ];

    let input: Vec<[f64; 3]> = cases.iter().map(|(rgb, _)| *rgb).collect();
    let lab = srgb_to_lab(&pixel_row(&input)?);

    for (i, (rgb, expected)) in cases.iter().enumerate() {
        let got = pixel_at(&lab, i);
        eprintln!("{:?} -> {:?} (expected {:?})", rgb, got, expected);
        for c in 0..3 {
            assert!(
                (got[c] - expected[c]).abs() < 1e-3,
                "{:?} channel {}: {} vs {}",
                rgb,
                c,
                got[c],
                expected[c]
            );
        }
    }
    Ok(())
}

#[test]
fn test_primaries_match_matrix_columns() -> anyhow::Result<()> {
    let xyz = rgb_to_xyz(&pixel_row(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])?);
    for col in 0..3 {
        let px = pixel_at(&xyz, col);
        for row in 0..3 {
            assert_eq!(px[row], RGB_TO_XYZ.m[row][col]);
        }
    }
    Ok(())
}

#[test]
fn test_matrices_are_inverses() {
    let product = RGB_TO_XYZ.multiply(&XYZ_TO_RGB);
    assert!(product.is_identity(1e-4), "{:?}", product);
}

#[test]
fn test_dark_pixels_use_linear_branch() -> anyhow::Result<()> {
    // Y below epsilon: L = kappa * Y
    let y = EPSILON / 2.0;
    let lab = xyz_to_lab(&pixel_row(&[[y * D65.xyz.x, y, y * D65.xyz.z]])?);
    let px = pixel_at(&lab, 0);
    assert!((px[0] - KAPPA * y).abs() < 1e-9, "L = {}", px[0]);
    assert!(px[1].abs() < 1e-9 && px[2].abs() < 1e-9);
    Ok(())
}

#[test]
fn test_lightness_continuous_at_threshold() -> anyhow::Result<()> {
    let below = EPSILON * (1.0 - 1e-9);
    let above = EPSILON * (1.0 + 1e-9);
    let lab = xyz_to_lab(&pixel_row(&[[0.0, below, 0.0], [0.0, above, 0.0]])?);
    let (l_below, l_above) = (pixel_at(&lab, 0)[0], pixel_at(&lab, 1)[0]);
    assert!((l_below - l_above).abs() < 1e-3, "{} vs {}", l_below, l_above);
    Ok(())
}

#[test]
fn test_a_star_contributes_to_x() -> anyhow::Result<()> {
    let xyz = lab_to_xyz(&pixel_row(&[[50.0, 0.0, 0.0], [50.0, 40.0, 0.0]])?);
    let neutral = pixel_at(&xyz, 0);
    let reddish = pixel_at(&xyz, 1);

    assert!(reddish[0] > neutral[0] * 1.2, "{:?} vs {:?}", reddish, neutral);
    assert_eq!(reddish[1], neutral[1]);
    assert_eq!(reddish[2], neutral[2]);
    Ok(())
}
