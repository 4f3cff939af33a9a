//! Non-local-means denoise stage
//!
//! Color-aware noise reduction: each pixel is replaced by a weighted
//! average of pixels in its search window, weighted by how similar their
//! surrounding patches are. Patch distances are computed jointly over
//! all three channels, so edges and color boundaries keep their weight
//! while flat-region noise averages out.
//!
//! The per-offset squared-difference images are summed through an
//! integral image, which turns the patch comparison into four lookups
//! per pixel instead of a full window scan.

use rayon::prelude::*;

use super::check_buffer;
use crate::models::DenoiseParams;

/// Maps the 8-bit-equivalent strength parameter to the 0-1 working range.
const STRENGTH_SCALE: f32 = 3.0 / 255.0;

/// Apply non-local-means denoising
///
/// A strength of zero or below is the identity transform.
pub fn denoise(
    data: &[f32],
    width: u32,
    height: u32,
    params: &DenoiseParams,
) -> Result<Vec<f32>, String> {
    check_buffer(data, width, height)?;

    if params.strength <= 0.0 {
        return Ok(data.to_vec());
    }

    let w = width as usize;
    let h = height as usize;
    let half_template = (params.template_window / 2) as isize;
    let half_search = (params.search_window / 2) as isize;

    let strength = params.strength * STRENGTH_SCALE;
    let inv_h2 = 1.0 / (strength * strength);

    let mut weighted = vec![0.0f32; w * h * 3];
    let mut weight_sums = vec![0.0f32; w * h];

    // Scratch buffers reused across offsets
    let mut diff = vec![0.0f32; w * h];
    let mut integral = vec![0.0f64; (w + 1) * (h + 1)];

    for dy in -half_search..=half_search {
        for dx in -half_search..=half_search {
            compute_shifted_diff(data, w, h, dx, dy, &mut diff);
            build_integral(&diff, w, h, &mut integral);
            accumulate_offset(
                data,
                w,
                h,
                dx,
                dy,
                half_template,
                inv_h2,
                &integral,
                &mut weighted,
                &mut weight_sums,
            );
        }
    }

    // The zero offset always contributes weight 1, so the sums never vanish
    let mut out = Vec::with_capacity(w * h * 3);
    for (pixel, &wsum) in weighted.chunks_exact(3).zip(weight_sums.iter()) {
        out.push(pixel[0] / wsum);
        out.push(pixel[1] / wsum);
        out.push(pixel[2] / wsum);
    }

    Ok(out)
}

#[inline]
fn clamp_coord(v: isize, max: usize) -> usize {
    v.clamp(0, max as isize - 1) as usize
}

/// Per-pixel squared difference (summed over channels) against the image
/// shifted by (dx, dy), borders replicated.
fn compute_shifted_diff(data: &[f32], w: usize, h: usize, dx: isize, dy: isize, diff: &mut [f32]) {
    for y in 0..h {
        let sy = clamp_coord(y as isize + dy, h);
        for x in 0..w {
            let sx = clamp_coord(x as isize + dx, w);
            let idx = (y * w + x) * 3;
            let sidx = (sy * w + sx) * 3;
            let dr = data[idx] - data[sidx];
            let dg = data[idx + 1] - data[sidx + 1];
            let db = data[idx + 2] - data[sidx + 2];
            diff[y * w + x] = dr * dr + dg * dg + db * db;
        }
    }
}

/// Summed-area table over `diff`, with a zero row and column so window
/// sums need no boundary special cases.
fn build_integral(diff: &[f32], w: usize, h: usize, integral: &mut [f64]) {
    let stride = w + 1;
    for v in integral[..stride].iter_mut() {
        *v = 0.0;
    }
    for y in 0..h {
        let mut row_sum = 0.0f64;
        integral[(y + 1) * stride] = 0.0;
        for x in 0..w {
            row_sum += diff[y * w + x] as f64;
            integral[(y + 1) * stride + x + 1] = integral[y * stride + x + 1] + row_sum;
        }
    }
}

#[inline]
fn window_sum(integral: &[f64], stride: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> f64 {
    integral[(y1 + 1) * stride + x1 + 1] - integral[y0 * stride + x1 + 1]
        - integral[(y1 + 1) * stride + x0]
        + integral[y0 * stride + x0]
}

/// Add this offset's contribution to the weighted sums.
#[allow(clippy::too_many_arguments)]
fn accumulate_offset(
    data: &[f32],
    w: usize,
    h: usize,
    dx: isize,
    dy: isize,
    half_template: isize,
    inv_h2: f32,
    integral: &[f64],
    weighted: &mut [f32],
    weight_sums: &mut [f32],
) {
    let stride = w + 1;
    let half = half_template as usize;

    weighted
        .par_chunks_mut(w * 3)
        .zip(weight_sums.par_chunks_mut(w))
        .enumerate()
        .for_each(|(y, (weighted_row, sum_row))| {
            let sy = clamp_coord(y as isize + dy, h);
            let y0 = y.saturating_sub(half);
            let y1 = (y + half).min(h - 1);

            for x in 0..w {
                let x0 = x.saturating_sub(half);
                let x1 = (x + half).min(w - 1);
                let area = ((x1 - x0 + 1) * (y1 - y0 + 1) * 3) as f64;

                // Mean squared per-sample patch distance
                let d2 = (window_sum(integral, stride, x0, y0, x1, y1) / area) as f32;
                let weight = (-d2 * inv_h2).exp();

                let sx = clamp_coord(x as isize + dx, w);
                let sidx = (sy * w + sx) * 3;
                weighted_row[x * 3] += weight * data[sidx];
                weighted_row[x * 3 + 1] += weight * data[sidx + 1];
                weighted_row[x * 3 + 2] += weight * data[sidx + 2];
                sum_row[x] += weight;
            }
        });
}
