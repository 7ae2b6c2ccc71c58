//! # rastr-io
//!
//! Image I/O for the rastr transform pipeline.
//!
//! Reads the pipeline's source images (JPEG or PNG, auto-detected by
//! magic bytes with an extension fallback) into a flat 8-bit
//! [`ImageBuffer`], and writes results back out as 8-bit PNG.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rastr_io::{read, write};
//!
//! let image = read("Image.JPG")?;
//! write("output.png", &image)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Notes |
//! |--------|------|-------|-------|
//! | PNG | Yes | Yes | 8-bit RGB/RGBA; grayscale expanded to RGB on read |
//! | JPEG | Yes | No | RGB; grayscale/CMYK converted to RGB on read |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod buffer;
mod detect;
mod error;

pub mod jpeg;
pub mod png;

pub use buffer::ImageBuffer;
pub use detect::Format;
pub use error::{IoError, IoResult};

use std::path::Path;
use tracing::debug;

/// Reads an image from a file, auto-detecting the format.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if the file is corrupt,
/// [`IoError::UnsupportedFormat`] if the format is not recognized, and
/// [`IoError::Io`] if the file cannot be opened.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), ?format, "reading image");

    match format {
        Format::Png => png::read(path),
        Format::Jpeg => jpeg::read(path),
        Format::Unknown => Err(IoError::UnsupportedFormat(format!(
            "cannot determine format of {}",
            path.display()
        ))),
    }
}

/// Writes an image to a file; the format is chosen by extension.
///
/// Only PNG output is supported.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for non-PNG extensions and
/// [`IoError::EncodeError`] if the encode fails.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = image.width, height = image.height, "writing image");

    match Format::from_extension(path) {
        Format::Png => png::write(path, image),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot encode {:?} output to {}",
            other,
            path.display()
        ))),
    }
}
