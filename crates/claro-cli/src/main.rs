use clap::Parser;
use std::path::PathBuf;

use claro_cli::{build_enhance_options, resolve_io_paths, TuningOverrides};
use claro_core::pipeline::{self, EnhancedImage};
use claro_core::presenter::{NoopPresenter, Presenter, PreviewImage};
use claro_core::{config, decoders, exporters, verbose_println};
use claro_view::WindowPresenter;

#[derive(Parser)]
#[command(name = "claro")]
#[command(version, about = "Photo enhancement: denoise, unsharp mask, adaptive contrast", long_about = None)]
struct Cli {
    /// Input image (JPEG or PNG)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file; format follows the extension
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Denoise strength in 8-bit-equivalent units (0 disables)
    #[arg(long, value_name = "FLOAT")]
    denoise: Option<f32>,

    /// Unsharp mask weight for the denoised image
    #[arg(long, value_name = "FLOAT")]
    sharpen_weight: Option<f32>,

    /// Unsharp mask weight for the blurred copy (normally negative)
    #[arg(long, value_name = "FLOAT")]
    blur_weight: Option<f32>,

    /// Contrast equalization clip limit
    #[arg(long, value_name = "FLOAT")]
    clip_limit: Option<f32>,

    /// Config file (default: claro.yml next to the working directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip the preview windows
    #[arg(long)]
    no_show: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    config::set_verbose(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    // An explicit --config bypasses the process-wide cached handle
    let custom_handle;
    let handle = if let Some(path) = &cli.config {
        custom_handle = config::load_claro_config(Some(path));
        for warning in &custom_handle.warnings {
            verbose_println!("[claro] Config warning: {}", warning);
        }
        &custom_handle
    } else {
        config::log_config_usage();
        config::claro_config_handle()
    };
    let defaults = &handle.config.defaults;

    let (input, output) = resolve_io_paths(cli.input, cli.out, defaults);
    let overrides = TuningOverrides {
        denoise_strength: cli.denoise,
        sharpen_weight: cli.sharpen_weight,
        blur_weight: cli.blur_weight,
        clip_limit: cli.clip_limit,
    };
    let options = build_enhance_options(defaults, &overrides);

    println!("Enhancing {}...", input.display());

    let decoded = decoders::decode_image(&input)?;
    println!(
        "  Image: {}x{}, {} channels",
        decoded.width, decoded.height, decoded.channels
    );

    println!("1. Denoising (strength={})...", options.denoise.strength);
    let denoised = pipeline::denoise(
        &decoded.data,
        decoded.width,
        decoded.height,
        &options.denoise,
    )?;

    println!(
        "2. Applying unsharp mask (weights {}/{})...",
        options.sharpen.sharpen_weight, options.sharpen.blur_weight
    );
    let sharpened = pipeline::sharpen(
        &denoised,
        decoded.width,
        decoded.height,
        &options.sharpen,
    )?;

    println!(
        "3. Equalizing contrast (clip limit {})...",
        options.contrast.clip_limit
    );
    let corrected = pipeline::enhance_contrast(
        &sharpened,
        decoded.width,
        decoded.height,
        &options.contrast,
    )?;

    // The contrast output is final; no further filtering
    let enhanced = EnhancedImage {
        width: decoded.width,
        height: decoded.height,
        data: corrected,
        channels: decoded.channels,
    };

    if config::is_verbose() {
        let (min, max, mean) = pipeline::compute_stats(&enhanced.data);
        verbose_println!(
            "[claro] Output stats: min={:.4} max={:.4} mean={:.4}",
            min,
            max,
            mean
        );
    }

    println!("4. Writing {}...", output.display());
    exporters::export_image(&enhanced, &output)?;
    println!("\nEnhanced image saved as {}", output.display());

    let original_preview = PreviewImage::from_decoded(&decoded);
    let enhanced_preview = PreviewImage::from_enhanced(&enhanced);

    if defaults.show_preview && !cli.no_show {
        println!("Close the preview windows to exit...");
        WindowPresenter.present(&original_preview, &enhanced_preview)?;
    } else {
        NoopPresenter.present(&original_preview, &enhanced_preview)?;
    }

    Ok(())
}
