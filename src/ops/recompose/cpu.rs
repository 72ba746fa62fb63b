use rayon::prelude::*;

use super::Recompose;
use crate::plane::{ChromaPlane, Plane, RgbImage};

pub(super) fn apply(luma: &Plane, chroma: &ChromaPlane, output: &mut RgbImage) {
    let width = luma.width() as usize;
    let luma_samples = luma.samples();
    let chroma_samples = chroma.samples();

    output
        .samples_mut()
        .par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, out_row)| {
            let luma_row = &luma_samples[y * width..(y + 1) * width];
            let chroma_row = &chroma_samples[y * width * 2..(y + 1) * width * 2];

            for x in 0..width {
                let rgb = Recompose::recompose_pixel(
                    luma_row[x],
                    chroma_row[x * 2],
                    chroma_row[x * 2 + 1],
                );
                out_row[x * 3..x * 3 + 3].copy_from_slice(&rgb);
            }
        });
}
