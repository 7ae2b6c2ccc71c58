//! # rastr-ops
//!
//! Parallel pixel transforms over flat 8-bit raster buffers.
//!
//! Every operation takes a row-major interleaved buffer plus its
//! `(width, height, channels)` dimensions, mutates it in place (or
//! writes into a caller-provided destination), and joins all workers
//! before returning. Work is decomposed into independent units - one
//! pixel for point operations, one output row for stencils and
//! rotation - and scheduled on rayon's global pool.
//!
//! # Modules
//!
//! - [`grayscale`] - Luma conversion (parallel and lock-serialized forms)
//! - [`blur`] - 3x3 box blur (two-buffer stencil, plus an approximate in-place mode)
//! - [`rotate`] - 90-degree clockwise rotation through a scratch buffer
//! - [`invert`] - Per-sample color inversion
//! - [`race`] - Intentionally unsynchronized grayscale, kept as a data-race demonstration
//!
//! # Example
//!
//! ```rust
//! use rastr_ops::{grayscale, invert};
//!
//! let mut pixels = vec![100, 150, 200, 100, 150, 200];
//! grayscale::grayscale(&mut pixels, 2, 1, 3).unwrap();
//! invert::invert(&mut pixels, 2, 1, 3).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod blur;
pub mod grayscale;
pub mod invert;
pub mod race;
pub mod rotate;

pub use error::{OpsError, OpsResult};

/// Validates that `len` matches `width * height * channels`.
pub(crate) fn expect_len(len: usize, width: usize, height: usize, channels: usize) -> OpsResult<()> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(OpsError::InvalidDimensions(
            "width, height, and channels must be > 0".into(),
        ));
    }

    let expected = width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| OpsError::InvalidDimensions("image dimensions overflow".into()))?;

    if len != expected {
        return Err(OpsError::InvalidDimensions(format!(
            "expected {} samples, got {}",
            expected, len
        )));
    }

    Ok(())
}

/// Validates that the pixel layout is 3-channel interleaved RGB.
pub(crate) fn expect_rgb(channels: usize) -> OpsResult<()> {
    if channels != 3 {
        return Err(OpsError::InvalidParameter(format!(
            "expected 3-channel RGB pixels, got {} channels",
            channels
        )));
    }
    Ok(())
}
