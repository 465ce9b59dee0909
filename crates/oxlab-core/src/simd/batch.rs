//! SIMD-optimized batch pixel transforms
//!
//! These functions run a per-pixel function over whole pixel slices.

use multiversion::multiversion;

/// Transform a buffer of pixels into a separate output buffer
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn transform_pixels_batch<F>(src: &[[f64; 3]], dst: &mut [[f64; 3]], transform_fn: F)
where
    F: Fn([f64; 3]) -> [f64; 3],
{
    assert!(dst.len() >= src.len());

    for (inp, out) in src.iter().zip(dst.iter_mut()) {
        *out = transform_fn(*inp);
    }
}

/// Transform a buffer of pixels, overwriting each with its result
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn transform_pixels_in_place<F>(data: &mut [[f64; 3]], transform_fn: F)
where
    F: Fn([f64; 3]) -> [f64; 3],
{
    for px in data.iter_mut() {
        *px = transform_fn(*px);
    }
}
