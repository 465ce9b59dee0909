//! # oxlab-tests
//!
//! Reference and property testing for oxlab.
//!
//! This crate provides:
//! - Accuracy measurements using deltaE2000
//! - Seeded test batches
//! - `palette` wrappers used as an independent reference
//!
//! ## Test Categories
//!
//! 1. **Reference values**: white, black, primaries, the D65 white point
//! 2. **Round trips**: each conversion against its inverse on random batches
//! 3. **Parity**: sRGB → Lab against palette
//! 4. **Layout**: shapes, strided views, in-place application

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_lab_batches, delta_e_2000, max_abs_diff, max_rel_diff};
pub use patterns::{TestPattern, generate_pattern, random_lab, random_uniform};

/// Install a test-friendly tracing subscriber
///
/// Honors `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a `(1, 1, n, 3)` batch from a list of pixels
pub fn pixel_row(pixels: &[[f64; 3]]) -> anyhow::Result<oxlab_core::ImageBatch> {
    let data = pixels.iter().flatten().copied().collect();
    Ok(oxlab_core::batch_from_vec((1, 1, pixels.len()), data)?)
}

/// Read pixel `i` of a `(1, 1, n, 3)` batch
pub fn pixel_at(images: &oxlab_core::ImageBatch, i: usize) -> [f64; 3] {
    [images[[0, 0, i, 0]], images[[0, 0, i, 1]], images[[0, 0, i, 2]]]
}
