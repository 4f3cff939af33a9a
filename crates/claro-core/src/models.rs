//! Data models for claro
//!
//! Parameter structs for the enhancement stages and the combined
//! options consumed by the pipeline entry point.

use serde::{Deserialize, Serialize};

/// Output file format, chosen from the output path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
}

/// Default denoise strength, in 8-bit-equivalent units (matches the
/// conventional h parameter of non-local-means denoisers)
pub(crate) fn default_denoise_strength() -> f32 {
    5.0
}

/// Default sharpen weight for the unsharp mask
pub(crate) fn default_sharpen_weight() -> f32 {
    1.5
}

/// Default blur weight for the unsharp mask (sharpen + blur sum to 1.0)
pub(crate) fn default_blur_weight() -> f32 {
    -0.5
}

/// Default Gaussian sigma for the unsharp mask blur
pub(crate) fn default_sigma() -> f32 {
    1.0
}

/// Default CLAHE clip limit
pub(crate) fn default_clip_limit() -> f32 {
    2.0
}

/// Default CLAHE tile grid size (8x8 tiles)
pub(crate) fn default_tile_grid_size() -> u32 {
    8
}

/// Parameters for the non-local-means denoise stage
///
/// The template and search windows are fixed at the conventional 7 and
/// 21; only the strength is meant to be tuned per run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DenoiseParams {
    /// Filter strength in 8-bit-equivalent units. Higher removes more
    /// noise at the cost of detail. Zero or negative is the identity.
    #[serde(default = "default_denoise_strength")]
    pub strength: f32,

    /// Patch side length for similarity comparison (odd)
    #[serde(default = "DenoiseParams::default_template_window")]
    pub template_window: u32,

    /// Search window side length around each pixel (odd)
    #[serde(default = "DenoiseParams::default_search_window")]
    pub search_window: u32,
}

impl DenoiseParams {
    pub(crate) fn default_template_window() -> u32 {
        7
    }

    pub(crate) fn default_search_window() -> u32 {
        21
    }
}

impl Default for DenoiseParams {
    fn default() -> Self {
        Self {
            strength: default_denoise_strength(),
            template_window: Self::default_template_window(),
            search_window: Self::default_search_window(),
        }
    }
}

/// Parameters for the unsharp-mask sharpen stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SharpenParams {
    /// Weight applied to the denoised input
    #[serde(default = "default_sharpen_weight")]
    pub sharpen_weight: f32,

    /// Weight applied to the blurred copy (normally negative)
    #[serde(default = "default_blur_weight")]
    pub blur_weight: f32,

    /// Gaussian sigma; the kernel size is derived from this
    #[serde(default = "default_sigma")]
    pub sigma: f32,
}

impl Default for SharpenParams {
    fn default() -> Self {
        Self {
            sharpen_weight: default_sharpen_weight(),
            blur_weight: default_blur_weight(),
            sigma: default_sigma(),
        }
    }
}

/// Parameters for the CLAHE contrast stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContrastParams {
    /// Histogram clip limit as a multiple of the uniform bin count.
    /// Higher is more aggressive contrast.
    #[serde(default = "default_clip_limit")]
    pub clip_limit: f32,

    /// Tiles per image side (grid is tile_grid_size x tile_grid_size)
    #[serde(default = "default_tile_grid_size")]
    pub tile_grid_size: u32,
}

impl Default for ContrastParams {
    fn default() -> Self {
        Self {
            clip_limit: default_clip_limit(),
            tile_grid_size: default_tile_grid_size(),
        }
    }
}

/// Combined options for one pipeline run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnhanceOptions {
    /// Denoise stage parameters
    #[serde(default)]
    pub denoise: DenoiseParams,

    /// Sharpen stage parameters
    #[serde(default)]
    pub sharpen: SharpenParams,

    /// Contrast stage parameters
    #[serde(default)]
    pub contrast: ContrastParams,
}
