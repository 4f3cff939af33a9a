//! Image exporters
//!
//! Write the enhanced result out as 8-bit JPEG or PNG, chosen from the
//! output path extension.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::models::OutputFormat;
use crate::pipeline::EnhancedImage;

/// JPEG quality used for the enhanced output
const JPEG_QUALITY: u8 = 95;

/// Pick the output format from a path's extension
pub fn format_for_path<P: AsRef<Path>>(path: P) -> Result<OutputFormat, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            format!(
                "Output path '{}' has no file extension",
                path.display()
            )
        })?;

    match extension.as_str() {
        "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
        "png" => Ok(OutputFormat::Png),
        _ => Err(format!(
            "Unsupported output format '{}' for '{}'",
            extension,
            path.display()
        )),
    }
}

/// Export an enhanced image, dispatching on the path extension
pub fn export_image<P: AsRef<Path>>(image: &EnhancedImage, path: P) -> Result<(), String> {
    match format_for_path(&path)? {
        OutputFormat::Jpeg => export_jpeg(image, path),
        OutputFormat::Png => export_png(image, path),
    }
}

/// Export an enhanced image as 8-bit JPEG
pub fn export_jpeg<P: AsRef<Path>>(image: &EnhancedImage, path: P) -> Result<(), String> {
    let bytes = quantize(image)?;
    let writer = create_writer(path.as_ref())?;

    JpegEncoder::new_with_quality(writer, JPEG_QUALITY)
        .write_image(
            &bytes,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to write JPEG image: {}", e))
}

/// Export an enhanced image as 8-bit PNG
pub fn export_png<P: AsRef<Path>>(image: &EnhancedImage, path: P) -> Result<(), String> {
    let bytes = quantize(image)?;
    let writer = create_writer(path.as_ref())?;

    PngEncoder::new(writer)
        .write_image(
            &bytes,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to write PNG image: {}", e))
}

fn create_writer(path: &Path) -> Result<BufWriter<File>, String> {
    let file = File::create(path)
        .map_err(|e| format!("Failed to create output file '{}': {}", path.display(), e))?;
    Ok(BufWriter::new(file))
}

/// Convert the f32 working buffer to 8-bit, clamping out-of-range values
fn quantize(image: &EnhancedImage) -> Result<Vec<u8>, String> {
    if image.channels != 3 {
        return Err(format!(
            "Export only supports 3-channel RGB, got {} channels",
            image.channels
        ));
    }

    let expected = image.width as usize * image.height as usize * 3;
    if image.data.len() != expected {
        return Err(format!(
            "Export received a malformed buffer: expected {} values, got {}",
            expected,
            image.data.len()
        ));
    }

    Ok(image
        .data
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect())
}
