//! Presentation seam for the preview windows
//!
//! The pipeline never talks to a display directly; it hands 8-bit
//! snapshots to a `Presenter`. Headless runs and tests use
//! `NoopPresenter`, the CLI plugs in the windowed implementation.

use crate::decoders::DecodedImage;
use crate::pipeline::EnhancedImage;

/// 8-bit RGB snapshot of an image for display purposes
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl PreviewImage {
    fn from_f32(width: u32, height: u32, data: &[f32]) -> Self {
        let rgb = data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        Self { width, height, rgb }
    }

    pub fn from_decoded(image: &DecodedImage) -> Self {
        Self::from_f32(image.width, image.height, &image.data)
    }

    pub fn from_enhanced(image: &EnhancedImage) -> Self {
        Self::from_f32(image.width, image.height, &image.data)
    }
}

/// Something that can show the before/after pair to the user
///
/// Implementations block until the user dismisses the view.
pub trait Presenter {
    fn present(&self, original: &PreviewImage, enhanced: &PreviewImage) -> Result<(), String>;
}

/// Presenter that shows nothing; used headless and in tests
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn present(&self, _original: &PreviewImage, _enhanced: &PreviewImage) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_quantizes_and_clamps() {
        let image = EnhancedImage {
            width: 2,
            height: 1,
            data: vec![0.0, 0.5, 1.0, -0.2, 1.4, 0.25],
            channels: 3,
        };

        let preview = PreviewImage::from_enhanced(&image);

        assert_eq!(preview.width, 2);
        assert_eq!(preview.height, 1);
        assert_eq!(preview.rgb, vec![0, 128, 255, 0, 255, 64]);
    }

    #[test]
    fn test_noop_presenter_accepts_any_pair() {
        let a = PreviewImage {
            width: 1,
            height: 1,
            rgb: vec![0, 0, 0],
        };
        let b = a.clone();

        assert!(NoopPresenter.present(&a, &b).is_ok());
    }
}
