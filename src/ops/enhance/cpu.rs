use rayon::prelude::*;

use super::Enhancement;
use crate::plane::Plane;

/// Samples per rayon task. The per-sample work is two `exp` calls, so
/// chunks this size amortize scheduling without starving wide pools.
const SAMPLES_PER_CHUNK: usize = 4096;

pub(super) fn apply_in_place(params: &Enhancement, plane: &mut Plane) {
    plane
        .samples_mut()
        .par_chunks_mut(SAMPLES_PER_CHUNK)
        .for_each(|chunk| {
            for sample in chunk {
                *sample = params.enhance_sample(*sample);
            }
        });
}
