use rayon::prelude::*;

use super::{BilateralFilter, MIN_WEIGHT_SUM};
use crate::plane::Plane;

/// Rows per rayon chunk. Keeps each task's output span well past a cache
/// line so adjacent threads do not share one.
const ROWS_PER_CHUNK: usize = 8;

pub(super) fn pass_rows(params: &BilateralFilter, input: &Plane, output: &mut Plane) {
    debug_assert_eq!(input.dimensions(), output.dimensions());

    let width = input.width() as usize;
    let radius = params.radius as i64;
    let inv_two_spatial = 1.0 / (2.0 * params.spatial_sigma * params.spatial_sigma);
    let inv_two_range = 1.0 / (2.0 * params.range_sigma * params.range_sigma);
    let src = input.samples();

    output
        .samples_mut()
        .par_chunks_mut(width * ROWS_PER_CHUNK)
        .enumerate()
        .for_each(|(chunk_idx, out_chunk)| {
            let y_start = chunk_idx * ROWS_PER_CHUNK;
            let rows_in_chunk = out_chunk.len() / width;

            for local_y in 0..rows_in_chunk {
                let y = y_start + local_y;
                let in_row = &src[y * width..(y + 1) * width];
                let out_row = &mut out_chunk[local_y * width..(local_y + 1) * width];

                for x in 0..width {
                    let center = in_row[x];
                    let mut sum = 0.0f32;
                    let mut weight_sum = 0.0f32;

                    for k in -radius..=radius {
                        // Clamp-to-edge, never wrap.
                        let sx = (x as i64 + k).clamp(0, width as i64 - 1) as usize;
                        let v = in_row[sx];
                        let d = v - center;
                        let w = (-((k * k) as f32) * inv_two_spatial - d * d * inv_two_range)
                            .exp();
                        sum += v * w;
                        weight_sum += w;
                    }

                    out_row[x] = sum / weight_sum.max(MIN_WEIGHT_SUM);
                }
            }
        });
}

pub(super) fn pass_columns(params: &BilateralFilter, input: &Plane, output: &mut Plane) {
    debug_assert_eq!(input.dimensions(), output.dimensions());

    let width = input.width() as usize;
    let height = input.height() as usize;
    let radius = params.radius as i64;
    let inv_two_spatial = 1.0 / (2.0 * params.spatial_sigma * params.spatial_sigma);
    let inv_two_range = 1.0 / (2.0 * params.range_sigma * params.range_sigma);
    let src = input.samples();

    output
        .samples_mut()
        .par_chunks_mut(width * ROWS_PER_CHUNK)
        .enumerate()
        .for_each(|(chunk_idx, out_chunk)| {
            let y_start = chunk_idx * ROWS_PER_CHUNK;
            let rows_in_chunk = out_chunk.len() / width;

            for local_y in 0..rows_in_chunk {
                let y = y_start + local_y;
                let out_row = &mut out_chunk[local_y * width..(local_y + 1) * width];

                for x in 0..width {
                    let center = src[y * width + x];
                    let mut sum = 0.0f32;
                    let mut weight_sum = 0.0f32;

                    for k in -radius..=radius {
                        let sy = (y as i64 + k).clamp(0, height as i64 - 1) as usize;
                        let v = src[sy * width + x];
                        let d = v - center;
                        let w = (-((k * k) as f32) * inv_two_spatial - d * d * inv_two_range)
                            .exp();
                        sum += v * w;
                        weight_sum += w;
                    }

                    out_row[x] = sum / weight_sum.max(MIN_WEIGHT_SUM);
                }
            }
        });
}
