//! Per-sample color inversion.

use crate::{OpsResult, expect_len};
use rayon::prelude::*;

/// Inverts every sample in place: `s` becomes `255 - s`.
///
/// Fully independent per sample; applying it twice restores the input.
///
/// # Example
///
/// ```rust
/// use rastr_ops::invert::invert;
///
/// let mut pixels = vec![100, 150, 200];
/// invert(&mut pixels, 1, 1, 3).unwrap();
/// assert_eq!(pixels, vec![155, 105, 55]);
/// ```
///
/// # Errors
///
/// Returns an error if the buffer length does not match the dimensions.
pub fn invert(data: &mut [u8], width: usize, height: usize, channels: usize) -> OpsResult<()> {
    expect_len(data.len(), width, height, channels)?;

    data.par_iter_mut().for_each(|s| *s = 255 - *s);

    Ok(())
}
