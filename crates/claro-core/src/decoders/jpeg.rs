//! JPEG image decoder

use std::path::Path;

use image::ImageReader;

use super::DecodedImage;

/// Decode a JPEG file
pub(crate) fn decode_jpeg<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();

    let reader = ImageReader::open(path)
        .map_err(|e| format!("Could not load image '{}': {}", path.display(), e))?;
    let decoded = reader
        .decode()
        .map_err(|e| format!("Could not load image '{}': {}", path.display(), e))?;

    // JPEG is always 8-bit; grayscale sources are expanded to RGB here
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    if width == 0 || height == 0 {
        return Err(format!(
            "Could not load image '{}': zero-sized image",
            path.display()
        ));
    }

    let data: Vec<f32> = rgb.as_raw().iter().map(|&v| v as f32 / 255.0).collect();

    Ok(DecodedImage {
        width,
        height,
        data,
        channels: 3,
    })
}
