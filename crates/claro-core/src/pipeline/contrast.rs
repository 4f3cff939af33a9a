//! Adaptive histogram equalization contrast stage
//!
//! Converts to L*a*b*, equalizes the L plane with CLAHE (clipped
//! per-tile histograms, bilinear interpolation between tile mappings),
//! and recombines with the untouched a/b planes. Working on luminance
//! alone keeps hue and saturation stable while local contrast improves.

use rayon::prelude::*;

use super::check_buffer;
use crate::color::{lab_planes_to_rgb, rgb_to_lab_planes};
use crate::models::ContrastParams;

/// Histogram resolution for the L plane (0-100 mapped onto 256 bins)
const BINS: usize = 256;

/// Apply adaptive histogram equalization to the luminance channel
pub fn enhance_contrast(
    data: &[f32],
    width: u32,
    height: u32,
    params: &ContrastParams,
) -> Result<Vec<f32>, String> {
    check_buffer(data, width, height)?;

    let mut planes = rgb_to_lab_planes(data);
    planes.l = equalize_luminance(&planes.l, width, height, params)?;

    Ok(lab_planes_to_rgb(&planes))
}

/// CLAHE over a single luminance plane (L values 0-100)
///
/// Exposed separately so the chrominance-preservation contract can be
/// exercised directly: only the returned L plane differs from the input.
pub fn equalize_luminance(
    l: &[f32],
    width: u32,
    height: u32,
    params: &ContrastParams,
) -> Result<Vec<f32>, String> {
    let w = width as usize;
    let h = height as usize;

    if w == 0 || h == 0 || l.len() != w * h {
        return Err(format!(
            "Contrast stage received a malformed luminance plane: expected {} values for {}x{}, got {}",
            w * h,
            width,
            height,
            l.len()
        ));
    }
    if params.tile_grid_size == 0 {
        return Err("Contrast stage requires a non-zero tile grid".to_string());
    }

    let grid = (params.tile_grid_size as usize).min(w).min(h).max(1);

    // One clipped-histogram lookup table per tile; tile bounds come from
    // even integer division so every tile is non-empty
    let luts: Vec<Vec<f32>> = (0..grid * grid)
        .map(|tile| {
            let ty = tile / grid;
            let tx = tile % grid;
            let x0 = tx * w / grid;
            let y0 = ty * h / grid;
            let x1 = (tx + 1) * w / grid;
            let y1 = (ty + 1) * h / grid;
            build_tile_lut(l, w, x0, y0, x1, y1, params.clip_limit)
        })
        .collect();

    // Remap each pixel by bilinear interpolation between the four
    // surrounding tile mappings
    let mut out = vec![0.0f32; l.len()];
    out.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let gy = (y as f32 + 0.5) * grid as f32 / h as f32 - 0.5;
        // Pixels above the first tile center (or below the last) take
        // that tile's mapping outright
        let fy = if gy < 0.0 { 0.0 } else { gy - gy.floor() };
        let ty0 = (gy.max(0.0) as usize).min(grid - 1);
        let ty1 = (ty0 + 1).min(grid - 1);

        for (x, slot) in row.iter_mut().enumerate() {
            let gx = (x as f32 + 0.5) * grid as f32 / w as f32 - 0.5;
            let fx = if gx < 0.0 { 0.0 } else { gx - gx.floor() };
            let tx0 = (gx.max(0.0) as usize).min(grid - 1);
            let tx1 = (tx0 + 1).min(grid - 1);

            let bin = luminance_bin(l[y * w + x]);
            let top = luts[ty0 * grid + tx0][bin] * (1.0 - fx) + luts[ty0 * grid + tx1][bin] * fx;
            let bottom = luts[ty1 * grid + tx0][bin] * (1.0 - fx) + luts[ty1 * grid + tx1][bin] * fx;
            let mapped = top * (1.0 - fy) + bottom * fy;

            *slot = mapped / 255.0 * 100.0;
        }
    });

    Ok(out)
}

#[inline]
fn luminance_bin(l: f32) -> usize {
    ((l / 100.0 * 255.0).round().clamp(0.0, 255.0)) as usize
}

/// Clipped histogram -> CDF mapping for one tile.
///
/// Counts above the clip limit are redistributed evenly over all bins,
/// which bounds how steep the mapping can get in flat regions.
fn build_tile_lut(
    l: &[f32],
    w: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    clip_limit: f32,
) -> Vec<f32> {
    let mut hist = [0u32; BINS];
    for y in y0..y1 {
        for x in x0..x1 {
            hist[luminance_bin(l[y * w + x])] += 1;
        }
    }

    let tile_pixels = ((x1 - x0) * (y1 - y0)) as u32;
    let clip = ((clip_limit * tile_pixels as f32 / BINS as f32) as u32).max(1);

    let mut excess = 0u32;
    for count in hist.iter_mut() {
        if *count > clip {
            excess += *count - clip;
            *count = clip;
        }
    }

    let per_bin = excess / BINS as u32;
    for count in hist.iter_mut() {
        *count += per_bin;
    }

    // Spread the residual across the range instead of piling it into
    // the low bins, which would skew the mapping toward white
    let mut residual = (excess % BINS as u32) as usize;
    if residual > 0 {
        let step = (BINS / residual).max(1);
        let mut i = 0;
        while residual > 0 && i < BINS {
            hist[i] += 1;
            residual -= 1;
            i += step;
        }
    }

    let scale = 255.0 / tile_pixels as f32;
    let mut cumulative = 0u32;
    hist.iter()
        .map(|&count| {
            cumulative += count;
            cumulative as f32 * scale
        })
        .collect()
}
