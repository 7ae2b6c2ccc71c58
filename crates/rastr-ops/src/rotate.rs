//! 90-degree clockwise rotation.
//!
//! The rotated image has swapped dimensions (new width = old height),
//! but the same flat length, so the rotation is computed into a scratch
//! buffer and copied back over the caller's buffer once every worker
//! has joined. The caller swaps its own width/height after the call.

use crate::{OpsError, OpsResult, expect_len};
use rayon::prelude::*;
use tracing::debug;

/// Rotates the buffer 90 degrees clockwise in place.
///
/// Source pixel `(x, y)` lands at column `height - 1 - y`, row `x` of
/// the rotated image. Each *destination* row copies exactly one source
/// column, so destination rows are independent work units with
/// disjoint write targets.
///
/// # Example
///
/// ```rust
/// use rastr_ops::rotate::rotate_90_cw;
///
/// // 2x1 image: [A, B] becomes the 1x2 image [A / B]
/// let mut data = vec![1, 1, 1, 2, 2, 2];
/// rotate_90_cw(&mut data, 2, 1, 3).unwrap();
/// assert_eq!(data, vec![1, 1, 1, 2, 2, 2]);
///
/// // 1x2 image: [A / B] becomes the 2x1 image [B, A]
/// let mut data = vec![1, 1, 1, 2, 2, 2];
/// rotate_90_cw(&mut data, 1, 2, 3).unwrap();
/// assert_eq!(data, vec![2, 2, 2, 1, 1, 1]);
/// ```
///
/// # Errors
///
/// Returns [`OpsError::AllocationFailed`] if the scratch buffer cannot
/// be reserved; the caller's buffer is left untouched in that case.
/// Returns [`OpsError::InvalidDimensions`] if the buffer length does
/// not match the dimensions.
pub fn rotate_90_cw(data: &mut [u8], width: usize, height: usize, channels: usize) -> OpsResult<()> {
    expect_len(data.len(), width, height, channels)?;

    let len = data.len();
    let mut scratch: Vec<u8> = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|_| OpsError::AllocationFailed { requested: len })?;
    scratch.resize(len, 0);

    debug!(width, height, channels, "rotate 90 cw into {} byte scratch", len);

    let new_w = height;
    let src: &[u8] = data;

    scratch
        .par_chunks_mut(new_w * channels)
        .enumerate()
        .for_each(|(ny, row)| {
            // destination row ny is source column ny, walked bottom-up
            for nx in 0..new_w {
                let sy = height - 1 - nx;
                let sx = ny;
                let s = (sy * width + sx) * channels;
                row[nx * channels..(nx + 1) * channels].copy_from_slice(&src[s..s + channels]);
            }
        });

    data.copy_from_slice(&scratch);
    Ok(())
}
