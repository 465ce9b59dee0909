//! SIMD-optimized matrix operations
//!
//! Matrix-vector multiplication is the whole of the RGB↔XYZ step.

use multiversion::multiversion;

/// Multiply a 3x3 matrix by a batch of 3-element vectors
///
/// The matrix is row-major; each output is `matrix × input`. The arithmetic
/// is term-for-term the same as [`Matrix3x3::multiply_vec`], so batch and
/// per-pixel results agree bit for bit.
///
/// [`Matrix3x3::multiply_vec`]: crate::math::Matrix3x3::multiply_vec
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn matrix_multiply_vec3_batch(
    matrix: &[[f64; 3]; 3],
    input: &[[f64; 3]],
    output: &mut [[f64; 3]],
) {
    assert!(output.len() >= input.len());

    // Extract matrix elements for better register allocation
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m02 = matrix[0][2];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];
    let m12 = matrix[1][2];
    let m20 = matrix[2][0];
    let m21 = matrix[2][1];
    let m22 = matrix[2][2];

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        let c0 = inp[0];
        let c1 = inp[1];
        let c2 = inp[2];

        out[0] = m00 * c0 + m01 * c1 + m02 * c2;
        out[1] = m10 * c0 + m11 * c1 + m12 * c2;
        out[2] = m20 * c0 + m21 * c1 + m22 * c2;
    }
}
