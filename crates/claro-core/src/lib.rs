//! Claro Core Library
//!
//! Core functionality for the claro photo enhancement pipeline:
//! decode, denoise, sharpen, contrast-correct, export.

pub mod color;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod models;
pub mod pipeline;
pub mod presenter;

// Re-export commonly used types
pub use color::Lab;
pub use decoders::DecodedImage;
pub use models::{ContrastParams, DenoiseParams, EnhanceOptions, OutputFormat, SharpenParams};
pub use pipeline::EnhancedImage;
pub use presenter::{NoopPresenter, Presenter, PreviewImage};
