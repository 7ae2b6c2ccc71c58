//! Grayscale conversion with per-pixel parallel decomposition.
//!
//! Replaces every RGB pixel with its luma, `trunc(0.21*R + 0.71*G + 0.07*B)`,
//! written to all three channels. Each pixel is one work unit and the
//! computation uses only per-pixel locals, so the pixels can run fully
//! concurrently.
//!
//! [`grayscale_locked`] additionally serializes the luma arithmetic
//! behind a mutex. The arithmetic touches no shared state, so the lock
//! buys nothing except a guarantee that does not need proving; output is
//! bit-identical to [`grayscale`]. It is kept as the conservative form.

use crate::{OpsResult, expect_len, expect_rgb};
use rayon::prelude::*;
use std::sync::{Mutex, PoisonError};

// Luma weights. They sum to 0.99, not 1.0; preserved exactly.
const WEIGHT_R: f64 = 0.21;
const WEIGHT_G: f64 = 0.71;
const WEIGHT_B: f64 = 0.07;

/// Weighted luma of one pixel, truncated to 8 bits.
#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    (WEIGHT_R * r as f64 + WEIGHT_G * g as f64 + WEIGHT_B * b as f64) as u8
}

/// Converts an RGB buffer to grayscale in place, one pixel per work unit.
///
/// # Example
///
/// ```rust
/// use rastr_ops::grayscale::grayscale;
///
/// let mut pixels = vec![100, 150, 200];
/// grayscale(&mut pixels, 1, 1, 3).unwrap();
/// // 0.21*100 + 0.71*150 + 0.07*200 = 141.5, truncated
/// assert_eq!(pixels, vec![141, 141, 141]);
/// ```
///
/// # Errors
///
/// Returns an error if the buffer length does not match the dimensions
/// or `channels != 3`.
pub fn grayscale(data: &mut [u8], width: usize, height: usize, channels: usize) -> OpsResult<()> {
    expect_len(data.len(), width, height, channels)?;
    expect_rgb(channels)?;

    data.par_chunks_exact_mut(channels).for_each(|px| {
        let (r, g, b) = (px[0], px[1], px[2]);
        let gray = luma(r, g, b);
        px.fill(gray);
    });

    Ok(())
}

/// Converts an RGB buffer to grayscale with the luma arithmetic held
/// under a mutex.
///
/// Output is identical to [`grayscale`]; only the scheduling differs
/// (the arithmetic runs one pixel at a time, the writes still in
/// parallel).
///
/// # Errors
///
/// Same conditions as [`grayscale`].
pub fn grayscale_locked(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
) -> OpsResult<()> {
    expect_len(data.len(), width, height, channels)?;
    expect_rgb(channels)?;

    let guard = Mutex::new(());

    data.par_chunks_exact_mut(channels).for_each(|px| {
        let (r, g, b) = (px[0], px[1], px[2]);
        let gray = {
            let _lock = guard.lock().unwrap_or_else(PoisonError::into_inner);
            luma(r, g, b)
        };
        px.fill(gray);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_image(width: usize, height: usize, pixel: [u8; 3]) -> Vec<u8> {
        pixel.repeat(width * height)
    }

    #[test]
    fn uniform_pixels_collapse_to_expected_luma() {
        let mut data = uniform_image(4, 4, [100, 150, 200]);
        grayscale(&mut data, 4, 4, 3).unwrap();
        // 0.21*100 + 0.71*150 + 0.07*200 = 141.5 -> 141
        assert!(data.iter().all(|&s| s == 141));
    }

    #[test]
    fn every_pixel_matches_the_weighted_sum() {
        let width = 16;
        let height = 9;
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 15) as u8);
                data.push((y * 27) as u8);
                data.push((x * y) as u8);
            }
        }
        let original = data.clone();

        grayscale(&mut data, width, height, 3).unwrap();

        for (out, src) in data.chunks(3).zip(original.chunks(3)) {
            let expected =
                (0.21 * src[0] as f64 + 0.71 * src[1] as f64 + 0.07 * src[2] as f64) as u8;
            assert_eq!(out, &[expected, expected, expected]);
        }
    }

    #[test]
    fn locked_variant_matches_parallel_variant() {
        let mut a: Vec<u8> = (0..32 * 32 * 3).map(|i| (i % 251) as u8).collect();
        let mut b = a.clone();

        grayscale(&mut a, 32, 32, 3).unwrap();
        grayscale_locked(&mut b, 32, 32, 3).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn rejects_mismatched_length() {
        let mut data = vec![0u8; 10];
        assert!(grayscale(&mut data, 4, 4, 3).is_err());
    }

    #[test]
    fn rejects_non_rgb_layout() {
        let mut data = vec![0u8; 4 * 4 * 4];
        assert!(grayscale(&mut data, 4, 4, 4).is_err());
    }
}
