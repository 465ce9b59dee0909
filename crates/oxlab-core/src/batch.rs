//! Image batch tensors and the pixel-map driver
//!
//! An image batch is a `(batch, row, column, channel)` tensor with exactly
//! three channels. Contiguous tensors are viewed as `[[f64; 3]]` pixel slices
//! and handed to the SIMD kernels in chunks; anything else (transposed or
//! sliced views) is walked lane by lane along the channel axis.

use bytemuck::{cast_slice, cast_slice_mut};
use ndarray::{Array4, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, DataMut, Ix4, Zip};
use tracing::{debug, trace};

use crate::simd;
use crate::{Error, Result};

/// Owned `(batch, row, column, channel)` tensor of `f64` samples
pub type ImageBatch = Array4<f64>;

/// Channels per pixel
pub const CHANNELS: usize = 3;

/// Pixels handed to a kernel per call (and per rayon task)
const CHUNK_PIXELS: usize = 4096;

/// Wrap a flat, row-major pixel buffer as an image batch
///
/// `shape` is `(batch, height, width)`; `data` must hold
/// `batch * height * width * 3` values.
pub fn batch_from_vec(shape: (usize, usize, usize), data: Vec<f64>) -> Result<ImageBatch> {
    let (batch, height, width) = shape;
    Ok(Array4::from_shape_vec((batch, height, width, CHANNELS), data)?)
}

/// Check that the channel axis holds exactly three components
pub fn check_batch<S>(images: &ArrayBase<S, Ix4>) -> Result<()>
where
    S: Data<Elem = f64>,
{
    let actual = images.len_of(Axis(3));
    if actual != CHANNELS {
        return Err(Error::ChannelCount {
            expected: CHANNELS,
            actual,
        });
    }
    Ok(())
}

fn assert_channels<S>(images: &ArrayBase<S, Ix4>) -> (usize, usize, usize)
where
    S: Data<Elem = f64>,
{
    let (batch, height, width, channels) = images.dim();
    assert_eq!(
        channels, CHANNELS,
        "image batch must have {CHANNELS} channels, got {channels}"
    );
    (batch, height, width)
}

fn run_chunks<K>(src: &[[f64; 3]], dst: &mut [[f64; 3]], kernel: &K)
where
    K: Fn(&[[f64; 3]], &mut [[f64; 3]]) + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        src.par_chunks(CHUNK_PIXELS)
            .zip(dst.par_chunks_mut(CHUNK_PIXELS))
            .for_each(|(s, d)| kernel(s, d));
    }

    #[cfg(not(feature = "parallel"))]
    for (s, d) in src.chunks(CHUNK_PIXELS).zip(dst.chunks_mut(CHUNK_PIXELS)) {
        kernel(s, d);
    }
}

/// Run a slice kernel over every pixel of `images`, returning a new batch
///
/// The input is never written to.
///
/// # Panics
///
/// Panics if the channel axis does not have length 3.
pub(crate) fn map_pixels<S, K>(images: &ArrayBase<S, Ix4>, kernel: K) -> ImageBatch
where
    S: Data<Elem = f64>,
    K: Fn(&[[f64; 3]], &mut [[f64; 3]]) + Sync,
{
    let (batch, height, width) = assert_channels(images);
    trace!(batch, height, width, simd = simd::active_features(), "map_pixels");

    let mut out = Array4::<f64>::zeros(images.raw_dim());

    let contiguous = match (images.as_slice(), out.as_slice_mut()) {
        (Some(src), Some(dst)) => {
            run_chunks(cast_slice(src), cast_slice_mut(dst), &kernel);
            true
        }
        _ => false,
    };

    if !contiguous {
        debug!(batch, height, width, "strided input, mapping channel lanes");

        let lanes = Zip::from(out.lanes_mut(Axis(3))).and(images.lanes(Axis(3)));
        let apply = |mut dst: ArrayViewMut1<'_, f64>, src: ArrayView1<'_, f64>| {
            let mut px = [[0.0; 3]];
            kernel(&[[src[0], src[1], src[2]]], &mut px);
            dst[0] = px[0][0];
            dst[1] = px[0][1];
            dst[2] = px[0][2];
        };

        #[cfg(feature = "parallel")]
        lanes.par_for_each(apply);
        #[cfg(not(feature = "parallel"))]
        lanes.for_each(apply);
    }

    out
}

/// Apply a per-pixel function to `images`, overwriting it
///
/// # Panics
///
/// Panics if the channel axis does not have length 3.
pub(crate) fn map_pixels_in_place<S, F>(images: &mut ArrayBase<S, Ix4>, pixel: F)
where
    S: DataMut<Elem = f64>,
    F: Fn([f64; 3]) -> [f64; 3] + Sync,
{
    let (batch, height, width) = assert_channels(images);
    trace!(batch, height, width, "map_pixels_in_place");

    let contiguous = match images.as_slice_mut() {
        Some(data) => {
            let pixels: &mut [[f64; 3]] = cast_slice_mut(data);

            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;

                pixels
                    .par_chunks_mut(CHUNK_PIXELS)
                    .for_each(|chunk| simd::transform_pixels_in_place(chunk, &pixel));
            }

            #[cfg(not(feature = "parallel"))]
            for chunk in pixels.chunks_mut(CHUNK_PIXELS) {
                simd::transform_pixels_in_place(chunk, &pixel);
            }

            true
        }
        None => false,
    };

    if !contiguous {
        debug!(batch, height, width, "strided buffer, mapping channel lanes in place");

        let lanes = Zip::from(images.lanes_mut(Axis(3)));
        let apply = |mut lane: ArrayViewMut1<'_, f64>| {
            let px = pixel([lane[0], lane[1], lane[2]]);
            lane[0] = px[0];
            lane[1] = px[1];
            lane[2] = px[2];
        };

        #[cfg(feature = "parallel")]
        lanes.par_for_each(apply);
        #[cfg(not(feature = "parallel"))]
        lanes.for_each(apply);
    }
}
