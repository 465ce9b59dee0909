//! Tensor layout tests: shapes, views, purity and in-place application

use ndarray::{Array4, Axis, s};
use oxlab_core::{
    ColorSpace, Conversion, Error, batch_from_vec, check_batch, delinearize, lab_to_rgb,
    lab_to_xyz, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
};
use oxlab_tests::{TestPattern, generate_pattern, init_tracing, random_lab, random_uniform};

#[test]
fn test_shape_preserved_for_all_conversions() {
    init_tracing();

    for b in [1, 3, 17] {
        for h in [1, 3, 17] {
            for w in [1, 3, 17] {
                let images = random_uniform((b * 100 + h * 10 + w) as u64, (b, h, w), 0.0..1.0);
                for conv in Conversion::ALL {
                    let out = conv.apply(&images);
                    assert_eq!(out.shape(), &[b, h, w, 3], "{} on {:?}", conv, (b, h, w));
                }
            }
        }
    }
}

#[test]
fn test_inputs_are_not_mutated() {
    let rgb = random_uniform(21, (2, 8, 8), 0.0..1.0);
    let snapshot = rgb.clone();

    for conv in Conversion::ALL {
        let _ = conv.apply(&rgb);
        assert_eq!(rgb, snapshot, "{} wrote to its input", conv);
    }
}

#[test]
fn test_views_match_owned() {
    let images = random_uniform(22, (3, 10, 12), 0.0..1.0);

    let views = [
        images.slice(s![.., ..;2, .., ..]),
        images.slice(s![1.., .., ..;-1, ..]),
        images.slice(s![..;2, 3..7, 1..;3, ..]),
    ];

    for view in &views {
        let owned = view.to_owned();
        for conv in Conversion::ALL {
            assert_eq!(conv.apply(view), conv.apply(&owned), "{}", conv);
        }
    }
}

#[test]
fn test_permuted_axes_match_owned() {
    // Row-major (width, height) swap through a transposed view
    let images = random_uniform(23, (2, 5, 7), 0.0..1.0);
    let transposed = images.view().permuted_axes([0, 2, 1, 3]);
    assert!(transposed.as_slice().is_none());

    let expected = rgb_to_lab(&transposed.to_owned());
    assert_eq!(rgb_to_lab(&transposed), expected);
}

#[test]
fn test_apply_in_place_matches_apply() {
    let rgb = random_uniform(24, (2, 16, 16), 0.0..1.0);
    let lab = random_lab(25, (2, 16, 16));

    for conv in Conversion::ALL {
        let input = if conv.source() == ColorSpace::Lab { &lab } else { &rgb };

        let mut buffer = input.clone();
        conv.apply_in_place(&mut buffer);
        assert_eq!(buffer, conv.apply(input), "{}", conv);
    }
}

#[test]
fn test_apply_in_place_on_single_image() {
    let mut images = generate_pattern(TestPattern::HueRamp, (3, 4, 4));
    let untouched = images.clone();

    let expected = rgb_to_xyz(&images.index_axis(Axis(0), 1).insert_axis(Axis(0)));
    {
        let mut second = images.slice_mut(s![1..2, .., .., ..]);
        Conversion::RgbToXyz.apply_in_place(&mut second);
    }

    assert_eq!(images.slice(s![1..2, .., .., ..]), expected);
    assert_eq!(images.slice(s![0, .., .., ..]), untouched.slice(s![0, .., .., ..]));
    assert_eq!(images.slice(s![2, .., .., ..]), untouched.slice(s![2, .., .., ..]));
}

#[test]
fn test_batch_members_are_independent() {
    // Converting a batch equals converting each image alone
    let images = random_uniform(26, (4, 6, 6), -0.1..1.1);
    let whole = rgb_to_lab(&images);

    for (i, image) in images.axis_iter(Axis(0)).enumerate() {
        let single = rgb_to_lab(&image.insert_axis(Axis(0)));
        assert_eq!(single.index_axis(Axis(0), 0), whole.index_axis(Axis(0), i));
    }
}

#[test]
fn test_empty_batch() {
    let empty = Array4::<f64>::zeros((0, 4, 4, 3));
    for conv in Conversion::ALL {
        assert_eq!(conv.apply(&empty).shape(), &[0, 4, 4, 3]);
    }

    let zero_width = Array4::<f64>::zeros((2, 3, 0, 3));
    assert_eq!(rgb_to_lab(&zero_width).shape(), &[2, 3, 0, 3]);
}

#[test]
fn test_out_of_domain_values_propagate() {
    let mut images = Array4::<f64>::from_elem((1, 1, 3, 3), 0.5);
    images[[0, 0, 0, 0]] = f64::NAN;
    images[[0, 0, 1, 1]] = -2.0;
    images[[0, 0, 2, 2]] = 1e6;

    let xyz = rgb_to_xyz(&images);
    assert!(xyz[[0, 0, 0, 0]].is_nan());
    assert!(xyz[[0, 0, 1, 1]] < 0.0);
    assert!(xyz[[0, 0, 2, 2]] > 1e5);

    let back = xyz_to_rgb(&xyz);
    assert!((back[[0, 0, 1, 1]] + 2.0).abs() < 1e-9);

    // Only the sRGB outputs clamp
    let clamped = delinearize(&(images.mapv(|v| v * 1e6)));
    assert!(clamped.iter().filter(|v| !v.is_nan()).all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn test_lab_chain_matches_direct() {
    let lab = random_lab(27, (2, 9, 9));
    assert_eq!(lab_to_rgb(&lab), xyz_to_rgb(&lab_to_xyz(&lab)));
    assert_eq!(xyz_to_lab(&lab_to_xyz(&lab)).shape(), lab.shape());
}

#[test]
fn test_check_batch_rejects_wrong_channels() {
    let four = Array4::<f64>::zeros((1, 2, 2, 4));
    match check_batch(&four) {
        Err(Error::ChannelCount { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 4);
        }
        other => panic!("expected ChannelCount, got {:?}", other),
    }

    assert!(check_batch(&Array4::<f64>::zeros((1, 2, 2, 3))).is_ok());
}

#[test]
#[should_panic(expected = "3 channels")]
fn test_conversion_panics_on_wrong_channels() {
    let two = Array4::<f64>::zeros((1, 2, 2, 2));
    let _ = rgb_to_lab(&two);
}

#[test]
#[should_panic(expected = "3 channels")]
fn test_in_place_panics_on_wrong_channels() {
    let mut four = Array4::<f64>::zeros((1, 2, 2, 4));
    Conversion::LabToSrgb.apply_in_place(&mut four);
}

#[test]
fn test_batch_from_vec() -> anyhow::Result<()> {
    let images = batch_from_vec((2, 1, 2), (0..12).map(f64::from).collect())?;
    assert_eq!(images.shape(), &[2, 1, 2, 3]);
    assert_eq!(images[[1, 0, 1, 2]], 11.0);

    let err = batch_from_vec((2, 2, 2), vec![0.0; 12]).unwrap_err();
    assert!(matches!(err, Error::Shape(_)));
    assert!(err.to_string().starts_with("Shape error"));
    Ok(())
}

#[test]
fn test_conversion_lookup() {
    use ColorSpace::*;

    for from in [Rgb, Xyz, Lab] {
        for to in [Rgb, Xyz, Lab] {
            match Conversion::between(from, to) {
                Some(conv) => {
                    assert_ne!(from, to);
                    assert_eq!((conv.source(), conv.target()), (from, to));
                    assert!(!conv.clamps());
                }
                None => assert_eq!(from, to),
            }
        }
    }
}
