//! PNG format support.
//!
//! Provides reading and writing of 8-bit PNG files. Grayscale sources
//! are expanded to RGB on read so downstream transforms always see
//! interleaved color data.
//!
//! # Example
//!
//! ```rust,ignore
//! use rastr_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{ImageBuffer, IoError, IoResult};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;

    let (channels, data) = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => (3, buf[..info.buffer_size()].to_vec()),
        (png::ColorType::Rgba, png::BitDepth::Eight) => (4, buf[..info.buffer_size()].to_vec()),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            // Expand grayscale to RGB
            let rgb: Vec<u8> = buf[..info.buffer_size()]
                .iter()
                .flat_map(|&g| [g, g, g])
                .collect();
            (3, rgb)
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            // Expand grayscale+alpha to RGBA
            let rgba: Vec<u8> = buf[..info.buffer_size()]
                .chunks(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect();
            (4, rgba)
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} {:?} PNG",
                color_type, bit_depth
            )));
        }
    };

    ImageBuffer::from_u8(width, height, channels, data)
}

/// Writes an image to an 8-bit PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let color_type = match image.channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {}",
                n
            )));
        }
    };

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&image.data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
