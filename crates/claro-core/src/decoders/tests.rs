//! Tests for image decoders

use super::*;

use image::{GrayImage, Rgb, RgbImage};
use tempfile::tempdir;

fn write_solid_rgb(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, Rgb(rgb));
    img.save(path).expect("failed to write test image");
}

#[test]
fn test_decode_png_rgb() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("solid.png");
    write_solid_rgb(&path, 8, 6, [255, 128, 0]);

    let image = decode_image(&path).expect("decode should succeed");

    assert_eq!(image.width, 8);
    assert_eq!(image.height, 6);
    assert_eq!(image.channels, 3);
    assert_eq!(image.data.len(), 8 * 6 * 3);

    // First pixel should match the solid fill after normalization
    assert!((image.data[0] - 1.0).abs() < 1e-3);
    assert!((image.data[1] - 128.0 / 255.0).abs() < 1e-3);
    assert!(image.data[2].abs() < 1e-3);
}

#[test]
fn test_decode_png_grayscale_expands_to_rgb() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gray.png");
    let img = GrayImage::from_pixel(4, 4, image::Luma([100]));
    img.save(&path).unwrap();

    let image = decode_image(&path).expect("decode should succeed");

    assert_eq!(image.channels, 3);
    assert_eq!(image.data.len(), 4 * 4 * 3);
    for rgb in image.data.chunks_exact(3) {
        assert!((rgb[0] - rgb[1]).abs() < 1e-6);
        assert!((rgb[1] - rgb[2]).abs() < 1e-6);
        assert!((rgb[0] - 100.0 / 255.0).abs() < 1e-3);
    }
}

#[test]
fn test_decode_jpeg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("solid.jpg");
    write_solid_rgb(&path, 16, 12, [200, 200, 200]);

    let image = decode_image(&path).expect("decode should succeed");

    assert_eq!(image.width, 16);
    assert_eq!(image.height, 12);
    assert_eq!(image.channels, 3);
    assert_eq!(image.data.len(), 16 * 12 * 3);

    // JPEG is lossy; just verify the values landed near the fill
    for &v in &image.data {
        assert!(
            (v - 200.0 / 255.0).abs() < 0.05,
            "Decoded value {} too far from fill",
            v
        );
    }
}

#[test]
fn test_decode_missing_file_names_path() {
    let result = decode_image("no_such_image.jpg");

    assert!(result.is_err());
    let msg = result.unwrap_err();
    assert!(
        msg.contains("no_such_image.jpg"),
        "Error should name the missing file: {}",
        msg
    );
}

#[test]
fn test_decode_unsupported_extension() {
    let result = decode_image("document.pdf");

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("unsupported format"));
}

#[test]
fn test_decode_no_extension() {
    let result = decode_image("imagefile");

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("no file extension"));
}

#[test]
fn test_decoded_values_in_working_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grad.png");
    let img = RgbImage::from_fn(32, 32, |x, y| {
        Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
    });
    img.save(&path).unwrap();

    let image = decode_image(&path).unwrap();
    for &v in &image.data {
        assert!((0.0..=1.0).contains(&v), "Value out of range: {}", v);
    }
}
