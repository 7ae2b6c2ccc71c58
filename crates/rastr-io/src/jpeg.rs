//! JPEG format support (read only).
//!
//! JPEG is the expected camera-source input for the pipeline; outputs
//! are written as PNG. Grayscale and CMYK sources are converted to RGB
//! on read so every decoded buffer is interleaved color data.

use crate::{ImageBuffer, IoError, IoResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a JPEG file from the given path.
///
/// # Example
///
/// ```rust,ignore
/// use rastr_io::jpeg;
///
/// let image = jpeg::read("photo.jpg")?;
/// assert_eq!(image.channels, 3);
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    // Convert to RGB based on input format
    let (channels, data) = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => (3, pixels),
        jpeg_decoder::PixelFormat::L8 => {
            // Grayscale to RGB
            let rgb: Vec<u8> = pixels.iter().flat_map(|&g| [g, g, g]).collect();
            (3, rgb)
        }
        jpeg_decoder::PixelFormat::L16 => {
            // 16-bit grayscale to 8-bit RGB (high byte)
            let rgb: Vec<u8> = pixels
                .chunks(2)
                .flat_map(|l16| {
                    let g = l16[0];
                    [g, g, g]
                })
                .collect();
            (3, rgb)
        }
        jpeg_decoder::PixelFormat::CMYK32 => {
            // CMYK to RGB (approximate conversion)
            let rgb: Vec<u8> = pixels
                .chunks(4)
                .flat_map(|cmyk| {
                    let c = cmyk[0] as f32 / 255.0;
                    let m = cmyk[1] as f32 / 255.0;
                    let y = cmyk[2] as f32 / 255.0;
                    let k = cmyk[3] as f32 / 255.0;

                    let r = ((1.0 - c) * (1.0 - k) * 255.0) as u8;
                    let g = ((1.0 - m) * (1.0 - k) * 255.0) as u8;
                    let b = ((1.0 - y) * (1.0 - k) * 255.0) as u8;

                    [r, g, b]
                })
                .collect();
            (3, rgb)
        }
    };

    ImageBuffer::from_u8(width, height, channels, data)
}
