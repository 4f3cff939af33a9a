//! Image enhancement pipeline
//!
//! The fixed stage order is denoise -> sharpen -> contrast. Each stage
//! is a pure function from an input buffer plus parameters to a new
//! buffer; `enhance_image` chains them for callers that do not need the
//! intermediates.

mod contrast;
mod denoise;
mod helpers;
mod sharpen;


pub use contrast::{enhance_contrast, equalize_luminance};
pub use denoise::denoise;
pub use helpers::{clamp_unit, compute_stats};
pub use sharpen::sharpen;

use crate::decoders::DecodedImage;
use crate::models::EnhanceOptions;

/// Result of the enhancement pipeline
pub struct EnhancedImage {
    /// Image width
    pub width: u32,

    /// Image height
    pub height: u32,

    /// Enhanced RGB data (f32, 0.0-1.0)
    pub data: Vec<f32>,

    /// Number of channels
    pub channels: u8,
}

/// Validate that a buffer matches the claimed dimensions.
///
/// Stages never operate on unchecked input; a zero-sized or mismatched
/// buffer is unrecoverable and reported like any other fatal error.
pub(crate) fn check_buffer(data: &[f32], width: u32, height: u32) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err("Enhancement stage received a zero-sized image".to_string());
    }
    let expected = width as usize * height as usize * 3;
    if data.len() != expected {
        return Err(format!(
            "Enhancement stage received a malformed buffer: expected {} values for {}x{}, got {}",
            expected,
            width,
            height,
            data.len()
        ));
    }
    Ok(())
}

/// Execute the full enhancement pipeline
///
/// Runs the three stages in their mandatory order and returns the final
/// image. The contrast output is final; no further filtering is applied.
pub fn enhance_image(image: DecodedImage, options: &EnhanceOptions) -> Result<EnhancedImage, String> {
    let DecodedImage {
        width,
        height,
        data,
        channels,
    } = image;

    let denoised = denoise(&data, width, height, &options.denoise)?;
    let sharpened = sharpen(&denoised, width, height, &options.sharpen)?;
    let corrected = enhance_contrast(&sharpened, width, height, &options.contrast)?;

    Ok(EnhancedImage {
        width,
        height,
        data: corrected,
        channels,
    })
}
