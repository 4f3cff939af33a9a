//! Image decoders
//!
//! Support for JPEG and PNG input files. Every source is normalized to
//! interleaved RGB f32 in the 0.0-1.0 working range.

mod jpeg;
mod png;

#[cfg(test)]
mod tests;

use std::path::Path;

/// Decoded image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGB data (f32, 0.0-1.0 range)
    pub data: Vec<f32>,

    /// Number of channels (always 3 after decode)
    pub channels: u8,
}

/// Decode an image from a file path
///
/// Dispatches on the file extension. Failures are reported with the
/// offending path in the message; the caller treats them as fatal.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| format!("Could not load image '{}': no file extension", path.display()))?;

    match extension.as_str() {
        "jpg" | "jpeg" => jpeg::decode_jpeg(path),
        "png" => png::decode_png(path),
        _ => Err(format!(
            "Could not load image '{}': unsupported format '{}'",
            path.display(),
            extension
        )),
    }
}
