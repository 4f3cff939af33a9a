//! Color management and transformations
//!
//! Provides sRGB <-> CIE L*a*b* conversion for the contrast stage, which
//! equalizes luminance without touching chrominance.

mod lab;

#[cfg(test)]
mod tests;

pub use lab::{lab_planes_to_rgb, lab_to_rgb, rgb_to_lab, rgb_to_lab_planes, Lab, LabPlanes};
