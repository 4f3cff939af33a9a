//! Shared utilities for claro-cli
//!
//! Option building and path resolution, kept out of `main` so they can
//! be tested without spawning the binary.

use std::path::PathBuf;

use claro_core::config::EnhanceDefaults;
use claro_core::models::EnhanceOptions;

/// Command-line tuning overrides; `None` falls back to the configured default
#[derive(Debug, Clone, Copy, Default)]
pub struct TuningOverrides {
    pub denoise_strength: Option<f32>,
    pub sharpen_weight: Option<f32>,
    pub blur_weight: Option<f32>,
    pub clip_limit: Option<f32>,
}

/// Merge configured defaults with command-line overrides
pub fn build_enhance_options(
    defaults: &EnhanceDefaults,
    overrides: &TuningOverrides,
) -> EnhanceOptions {
    let mut options = defaults.to_options();

    if let Some(strength) = overrides.denoise_strength {
        options.denoise.strength = strength;
    }
    if let Some(weight) = overrides.sharpen_weight {
        options.sharpen.sharpen_weight = weight;
    }
    if let Some(weight) = overrides.blur_weight {
        options.sharpen.blur_weight = weight;
    }
    if let Some(limit) = overrides.clip_limit {
        options.contrast.clip_limit = limit;
    }

    options
}

/// Resolve input and output paths, falling back to the configured
/// fixed filenames
pub fn resolve_io_paths(
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    defaults: &EnhanceDefaults,
) -> (PathBuf, PathBuf) {
    let input = input.unwrap_or_else(|| defaults.input.clone());
    let out = out.unwrap_or_else(|| defaults.output.clone());
    (input, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let defaults = EnhanceDefaults::default();
        let options = build_enhance_options(&defaults, &TuningOverrides::default());

        assert!((options.denoise.strength - 5.0).abs() < f32::EPSILON);
        assert!((options.sharpen.sharpen_weight - 1.5).abs() < f32::EPSILON);
        assert!((options.contrast.clip_limit - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides_replace_selected_values() {
        let defaults = EnhanceDefaults::default();
        let overrides = TuningOverrides {
            denoise_strength: Some(9.0),
            clip_limit: Some(3.0),
            ..TuningOverrides::default()
        };

        let options = build_enhance_options(&defaults, &overrides);

        assert!((options.denoise.strength - 9.0).abs() < f32::EPSILON);
        assert!((options.contrast.clip_limit - 3.0).abs() < f32::EPSILON);
        // Untouched values keep their defaults
        assert!((options.sharpen.blur_weight + 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resolve_paths_uses_fixed_names_by_default() {
        let defaults = EnhanceDefaults::default();
        let (input, out) = resolve_io_paths(None, None, &defaults);

        assert_eq!(input, defaults.input);
        assert_eq!(out, defaults.output);
    }

    #[test]
    fn test_resolve_paths_prefers_arguments() {
        let defaults = EnhanceDefaults::default();
        let (input, out) = resolve_io_paths(
            Some(PathBuf::from("holiday.jpg")),
            Some(PathBuf::from("holiday_enhanced.png")),
            &defaults,
        );

        assert_eq!(input, PathBuf::from("holiday.jpg"));
        assert_eq!(out, PathBuf::from("holiday_enhanced.png"));
    }
}
