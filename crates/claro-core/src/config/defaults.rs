//! Default pipeline parameter values and their validation/sanitization.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::{ContrastParams, DenoiseParams, EnhanceOptions, SharpenParams};

/// Tuning defaults, overridable from a config file.
///
/// These are the fixed constants of the pipeline; a config file exists so
/// they can be adjusted without recompiling, not per invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnhanceDefaults {
    /// Input file used when none is given on the command line
    pub input: PathBuf,

    /// Output file used when none is given on the command line
    pub output: PathBuf,

    /// Denoise stage defaults
    pub denoise: DenoiseParams,

    /// Sharpen stage defaults
    pub sharpen: SharpenParams,

    /// Contrast stage defaults
    pub contrast: ContrastParams,

    /// Whether to open the preview windows after processing
    pub show_preview: bool,
}

impl Default for EnhanceDefaults {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.jpg"),
            output: PathBuf::from("enhanced.jpg"),
            denoise: DenoiseParams::default(),
            sharpen: SharpenParams::default(),
            contrast: ContrastParams::default(),
            show_preview: true,
        }
    }
}

impl EnhanceDefaults {
    /// Clamp unusable values back into range, appending a note for each
    /// adjustment. Suspect-but-usable values (an unsharp weight pair that
    /// does not sum to 1.0) only warn; the permissive behavior is kept.
    pub fn sanitize(&mut self, warnings: &mut Vec<String>) {
        if self.denoise.strength < 0.0 {
            warnings.push(format!(
                "denoise strength {} is negative; clamped to 0 (identity)",
                self.denoise.strength
            ));
            self.denoise.strength = 0.0;
        }

        if self.denoise.template_window == 0 || self.denoise.template_window % 2 == 0 {
            warnings.push(format!(
                "denoise template window {} must be odd; reset to {}",
                self.denoise.template_window,
                DenoiseParams::default_template_window()
            ));
            self.denoise.template_window = DenoiseParams::default_template_window();
        }

        if self.denoise.search_window <= self.denoise.template_window
            || self.denoise.search_window % 2 == 0
        {
            warnings.push(format!(
                "denoise search window {} must be odd and larger than the template window; reset to {}",
                self.denoise.search_window,
                DenoiseParams::default_search_window()
            ));
            self.denoise.search_window = DenoiseParams::default_search_window();
        }

        if self.sharpen.sigma <= 0.0 {
            warnings.push(format!(
                "sharpen sigma {} is not positive; reset to 1.0",
                self.sharpen.sigma
            ));
            self.sharpen.sigma = 1.0;
        }

        let weight_sum = self.sharpen.sharpen_weight + self.sharpen.blur_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            warnings.push(format!(
                "unsharp weights sum to {:.3} rather than 1.0; overall brightness will shift",
                weight_sum
            ));
        }

        if self.contrast.clip_limit < 1.0 {
            warnings.push(format!(
                "contrast clip limit {} is below 1.0; clamped to 1.0 (no equalization)",
                self.contrast.clip_limit
            ));
            self.contrast.clip_limit = 1.0;
        }

        if self.contrast.tile_grid_size == 0 || self.contrast.tile_grid_size > 64 {
            warnings.push(format!(
                "contrast tile grid size {} out of range 1-64; reset to 8",
                self.contrast.tile_grid_size
            ));
            self.contrast.tile_grid_size = 8;
        }
    }

    /// Build the per-run options from these defaults.
    pub fn to_options(&self) -> EnhanceOptions {
        EnhanceOptions {
            denoise: self.denoise,
            sharpen: self.sharpen,
            contrast: self.contrast,
        }
    }
}
