//! Unsharp-mask sharpen stage
//!
//! Blurs the input with a Gaussian whose kernel size is derived from
//! sigma, then recombines: `sharpen_weight * input + blur_weight *
//! blurred`. With the default 1.5 / -0.5 weights the pair sums to 1.0,
//! so brightness is preserved while edge contrast is amplified.

use image::{ImageBuffer, Rgb};
use imageproc::filter::gaussian_blur_f32;

use super::{check_buffer, helpers::clamp_unit};
use crate::models::SharpenParams;

type Rgb32FImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Apply the unsharp mask
///
/// The combination is an exact per-pixel per-channel linear blend,
/// clamped to the working range. Weights (1.0, 0.0) reduce to the
/// identity.
pub fn sharpen(
    data: &[f32],
    width: u32,
    height: u32,
    params: &SharpenParams,
) -> Result<Vec<f32>, String> {
    check_buffer(data, width, height)?;

    if params.sigma <= 0.0 {
        return Err(format!(
            "Sharpen stage requires a positive blur sigma, got {}",
            params.sigma
        ));
    }

    let image: Rgb32FImage = ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or_else(|| "Sharpen stage could not frame the input buffer".to_string())?;
    let blurred = gaussian_blur_f32(&image, params.sigma);

    let out = data
        .iter()
        .zip(blurred.as_raw().iter())
        .map(|(&original, &blur)| {
            clamp_unit(params.sharpen_weight * original + params.blur_weight * blur)
        })
        .collect();

    Ok(out)
}
