//! Owned raster buffer container.
//!
//! [`ImageBuffer`] is the decode result and encode input for this crate:
//! a flat, row-major `u8` buffer plus its dimensions. Pixels are
//! interleaved, `channels` samples each, so the sample index of pixel
//! `(x, y)` is `(y * width + x) * channels`.
//!
//! The container owns its data; the transform crate borrows the flat
//! buffer for the duration of a call and never retains it.

use crate::{IoError, IoResult};

/// Owned raster image: flat row-major `u8` samples plus dimensions.
///
/// # Example
///
/// ```rust
/// use rastr_io::ImageBuffer;
///
/// let image = ImageBuffer::from_u8(2, 2, 3, vec![0; 2 * 2 * 3]).unwrap();
/// assert_eq!(image.pixel(1, 1), &[0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Samples per pixel (3 for RGB, 4 for RGBA).
    pub channels: u8,
    /// Interleaved sample data, `width * height * channels` bytes.
    pub data: Vec<u8>,
}

impl ImageBuffer {
    /// Creates a buffer from existing 8-bit sample data.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DimensionMismatch`] if `data.len()` is not
    /// `width * height * channels`, and [`IoError::UnsupportedFormat`]
    /// if any dimension is zero.
    pub fn from_u8(width: u32, height: u32, channels: u8, data: Vec<u8>) -> IoResult<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(IoError::UnsupportedFormat(format!(
                "degenerate image dimensions {}x{}x{}",
                width, height, channels
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(IoError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The samples of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let c = self.channels as usize;
        let offset = (y as usize * self.width as usize + x as usize) * c;
        &self.data[offset..offset + c]
    }

    /// Consumes the buffer, returning the flat sample data.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_validates_length() {
        let result = ImageBuffer::from_u8(4, 4, 3, vec![0; 10]);
        assert!(matches!(
            result,
            Err(IoError::DimensionMismatch {
                expected: 48,
                actual: 10
            })
        ));
    }

    #[test]
    fn from_u8_rejects_zero_dimensions() {
        assert!(ImageBuffer::from_u8(0, 4, 3, vec![]).is_err());
        assert!(ImageBuffer::from_u8(4, 0, 3, vec![]).is_err());
        assert!(ImageBuffer::from_u8(4, 4, 0, vec![]).is_err());
    }

    #[test]
    fn pixel_indexing_is_row_major() {
        let mut data = vec![0u8; 2 * 2 * 3];
        // bottom-right pixel
        data[(1 * 2 + 1) * 3..].copy_from_slice(&[10, 20, 30]);
        let image = ImageBuffer::from_u8(2, 2, 3, data).unwrap();
        assert_eq!(image.pixel(1, 1), &[10, 20, 30]);
        assert_eq!(image.pixel(0, 0), &[0, 0, 0]);
    }
}
