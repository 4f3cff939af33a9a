//! PNG image decoder

use std::path::Path;

use super::DecodedImage;

/// Decode a PNG file
///
/// The pipeline is defined on 8-bit sources; 16-bit and indexed PNGs are
/// rejected with a message naming the file.
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| format!("Could not load image '{}': {}", path.display(), e))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Could not load image '{}': {}", path.display(), e))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if width == 0 || height == 0 {
        return Err(format!(
            "Could not load image '{}': zero-sized image",
            path.display()
        ));
    }

    if bit_depth != png::BitDepth::Eight {
        return Err(format!(
            "Could not load image '{}': only 8-bit PNG is supported, got {:?}",
            path.display(),
            bit_depth
        ));
    }

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| format!("Could not load image '{}': invalid buffer size", path.display()))?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Could not load image '{}': {}", path.display(), e))?;

    let bytes = &buf[..frame_info.buffer_size()];
    let pixel_count = (width * height) as usize;

    // Normalize every supported layout to interleaved RGB f32
    let data = match color_type {
        png::ColorType::Rgb => {
            expect_len(bytes, pixel_count * 3, path)?;
            bytes.iter().map(|&v| v as f32 / 255.0).collect()
        }
        png::ColorType::Rgba => {
            expect_len(bytes, pixel_count * 4, path)?;
            let mut rgb = Vec::with_capacity(pixel_count * 3);
            for rgba in bytes.chunks_exact(4) {
                rgb.push(rgba[0] as f32 / 255.0);
                rgb.push(rgba[1] as f32 / 255.0);
                rgb.push(rgba[2] as f32 / 255.0);
            }
            rgb
        }
        png::ColorType::Grayscale => {
            expect_len(bytes, pixel_count, path)?;
            let mut rgb = Vec::with_capacity(pixel_count * 3);
            for &gray in bytes {
                let val = gray as f32 / 255.0;
                rgb.push(val);
                rgb.push(val);
                rgb.push(val);
            }
            rgb
        }
        png::ColorType::GrayscaleAlpha => {
            expect_len(bytes, pixel_count * 2, path)?;
            let mut rgb = Vec::with_capacity(pixel_count * 3);
            for ga in bytes.chunks_exact(2) {
                let val = ga[0] as f32 / 255.0;
                rgb.push(val);
                rgb.push(val);
                rgb.push(val);
            }
            rgb
        }
        png::ColorType::Indexed => {
            return Err(format!(
                "Could not load image '{}': indexed PNG is not supported",
                path.display()
            ));
        }
    };

    Ok(DecodedImage {
        width,
        height,
        data,
        channels: 3,
    })
}

fn expect_len(bytes: &[u8], expected: usize, path: &Path) -> Result<(), String> {
    if bytes.len() != expected {
        return Err(format!(
            "Could not load image '{}': buffer size mismatch, expected {} got {}",
            path.display(),
            expected,
            bytes.len()
        ));
    }
    Ok(())
}
