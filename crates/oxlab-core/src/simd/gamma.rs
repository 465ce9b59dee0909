//! SIMD-optimized transfer function operations
//!
//! The transfer function is applied to every channel independently, so the
//! kernels work on flat value slices.

use multiversion::multiversion;

use crate::math::gamma;

/// Apply [`gamma::linearize`] to a batch of values
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn linearize_batch(input: &[f64], output: &mut [f64]) {
    assert!(output.len() >= input.len());

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = gamma::linearize(*inp);
    }
}

/// Apply [`gamma::delinearize`] to a batch of values
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn delinearize_batch(input: &[f64], output: &mut [f64]) {
    assert!(output.len() >= input.len());

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = gamma::delinearize(*inp);
    }
}
