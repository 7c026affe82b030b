//! # Output Module
//!
//! Writes rendered 8-bit images to disk:
//! - plain-text PPM (`P3`), one `R G B` line per pixel in raster order
//! - PNG through the `image` crate
//!
//! The format is picked from the output file extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::camera::RgbImage;

/// Failure to write a rendered image.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Opening or writing the output failed
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    /// The output path has an extension no writer handles
    #[error("Unsupported file extension '{0}'. Only .ppm and .png formats are supported.")]
    UnsupportedFormat(String),
}

/// Image formats the renderer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Plain-text portable pixmap
    Ppm,
    /// Portable network graphics
    Png,
}

impl ImageFormat {
    /// Pick the format from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "ppm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            _ => Err(OutputError::UnsupportedFormat(extension)),
        }
    }
}

/// Write `image` as a plain-text PPM.
///
/// Header lines are `P3`, `width height` and `255`, followed by one line of
/// three space-separated channel values per pixel, row-major from the top-left.
pub fn write_ppm<W: Write>(writer: &mut W, image: &RgbImage) -> Result<(), OutputError> {
    let (width, height) = image.dimensions();
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    for pixel in image.pixels() {
        let [r, g, b] = pixel.0;
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save `image` to `path` in the format its extension names.
pub fn save_image(image: &RgbImage, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    debug!("Writing {:?} image to {}", format, path.display());

    match format {
        ImageFormat::Ppm => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(&mut writer, image)?;
        }
        ImageFormat::Png => image.save_with_format(path, image::ImageFormat::Png)?,
    }

    info!("Image saved as {}", path.display());
    Ok(())
}
