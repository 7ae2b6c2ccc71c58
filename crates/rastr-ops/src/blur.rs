//! 3x3 uniform box blur.
//!
//! A read-before-write stencil: every interior output sample is the
//! truncated average of the 3x3 neighborhood of that channel in the
//! *original* image. The one-pixel border passes through unchanged -
//! no zero padding, no clamping.
//!
//! [`box_blur_3x3`] is the default form and keeps source and
//! destination separate, so rows are independent work units and the
//! output is bit-exact regardless of scheduling. [`box_blur_3x3_in_place`]
//! updates a single buffer row by row; rows below the current one read
//! already-blurred neighbors, which makes it an approximation of the
//! stencil, not an equivalent. It exists for callers that cannot afford
//! the second buffer and is labeled accordingly.

use crate::{OpsError, OpsResult, expect_len};
use rayon::prelude::*;
use tracing::debug;

const KERNEL_WEIGHT: f32 = 1.0 / 9.0;

/// Applies a 3x3 box blur, reading `src` and writing `dst`.
///
/// One output row per work unit; every worker reads only the immutable
/// source, so the result is deterministic.
///
/// # Example
///
/// ```rust
/// use rastr_ops::blur::box_blur_3x3;
///
/// let src = vec![128u8; 8 * 8 * 3];
/// let mut dst = vec![0u8; src.len()];
/// box_blur_3x3(&src, &mut dst, 8, 8, 3).unwrap();
/// // a uniform image blurs to itself
/// assert_eq!(dst, src);
/// ```
///
/// # Errors
///
/// Returns an error if `src` does not match the dimensions or `dst`
/// has a different length than `src`.
pub fn box_blur_3x3(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
) -> OpsResult<()> {
    expect_len(src.len(), width, height, channels)?;
    if dst.len() != src.len() {
        return Err(OpsError::SizeMismatch(format!(
            "destination holds {} samples, source {}",
            dst.len(),
            src.len()
        )));
    }

    debug!(width, height, channels, "box blur (two-buffer)");

    let row_len = width * channels;
    dst.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
        let src_row = &src[y * row_len..(y + 1) * row_len];

        // top and bottom border rows pass through
        if y == 0 || y == height - 1 {
            row.copy_from_slice(src_row);
            return;
        }

        // left and right border columns pass through
        row[..channels].copy_from_slice(&src_row[..channels]);
        row[(width - 1) * channels..].copy_from_slice(&src_row[(width - 1) * channels..]);

        for x in 1..width - 1 {
            for ch in 0..channels {
                let mut acc = 0.0f32;
                for ky in 0..3 {
                    for kx in 0..3 {
                        let s = ((y + ky - 1) * width + (x + kx - 1)) * channels + ch;
                        acc += src[s] as f32 * KERNEL_WEIGHT;
                    }
                }
                row[x * channels + ch] = acc as u8;
            }
        }
    });

    Ok(())
}

/// Applies the 3x3 box blur to a single buffer, row by row.
///
/// Approximate mode: interior rows read neighbors that earlier rows of
/// the same pass have already overwritten, so the output differs from
/// [`box_blur_3x3`] wherever the blur changes a pixel that is itself a
/// neighbor. Prefer the two-buffer form unless the extra allocation is
/// prohibitive.
///
/// # Errors
///
/// Returns an error if the buffer length does not match the dimensions.
pub fn box_blur_3x3_in_place(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
) -> OpsResult<()> {
    expect_len(data.len(), width, height, channels)?;

    debug!(width, height, channels, "box blur (in-place, approximate)");

    if width < 3 || height < 3 {
        // every pixel is border
        return Ok(());
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for ch in 0..channels {
                let mut acc = 0.0f32;
                for ky in 0..3 {
                    for kx in 0..3 {
                        let s = ((y + ky - 1) * width + (x + kx - 1)) * channels + ch;
                        acc += data[s] as f32 * KERNEL_WEIGHT;
                    }
                }
                data[(y * width + x) * channels + ch] = acc as u8;
            }
        }
    }

    Ok(())
}
