//! Narrow candidate search
//!
//! Instead of scanning the offset cube, encrypt one known character with every
//! pair of small random coordinates and read the offset off each ciphertext
//! sample directly. Only offsets whose components all fall inside a small
//! acceptance interval are kept.

use crate::decrypt::GridBounds;
use crate::linalg::{Matrix3, Vector3};
use log::info;
use rayon::prelude::*;
use std::ops::Range;

/// Default acceptance interval for every offset component
pub const DEFAULT_ACCEPT: Range<f64> = 0.0..100.0;

/// One offset consistent with `target` encrypted as `(target, rand1, rand2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrowCandidate {
    pub rand1: u32,
    pub rand2: u32,
    /// Index of the ciphertext sample the offset was derived from
    pub sample_index: usize,
    pub offset: Vector3,
}

/// All candidates in `(rand1, rand2, sample)` order
pub fn candidate_offsets(
    forward: &Matrix3,
    target: char,
    samples: &[Vector3],
    grid: GridBounds,
    accept: Range<f64>,
) -> Vec<NarrowCandidate> {
    let code = f64::from(u32::from(target));
    let candidates: Vec<NarrowCandidate> = (0..=grid.max)
        .into_par_iter()
        .flat_map_iter(|rand1| {
            let accept = accept.clone();
            (0..=grid.max).flat_map(move |rand2| {
                let encrypted = forward * Vector3::new(code, f64::from(rand1), f64::from(rand2));
                let accept = accept.clone();
                samples
                    .iter()
                    .enumerate()
                    .filter_map(move |(sample_index, &sample)| {
                        let offset = sample - encrypted;
                        offset
                            .to_array()
                            .iter()
                            .all(|c| accept.contains(c))
                            .then_some(NarrowCandidate {
                                rand1,
                                rand2,
                                sample_index,
                                offset,
                            })
                    })
            })
        })
        .collect();

    info!(
        "Narrow search for {:?}: {} candidates over {} grid cells",
        target,
        candidates.len(),
        grid.cells()
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_forward_recovers_planted_offset() {
        // With the identity transform the ciphertext is (c + rx, r1 + ry, r2 + rz)
        let planted = Vector3::new(7.0, 3.0, 11.0);
        let sample = Vector3::new(72.0 + 7.0, 4.0 + 3.0, 9.0 + 11.0);
        let found = candidate_offsets(
            &Matrix3::IDENTITY,
            'H',
            &[sample],
            GridBounds::new(20),
            DEFAULT_ACCEPT,
        );
        let hit = found
            .iter()
            .find(|c| c.rand1 == 4 && c.rand2 == 9)
            .expect("planted candidate");
        assert_eq!(hit.offset, planted);
        assert!(found
            .windows(2)
            .all(|w| (w[0].rand1, w[0].rand2) <= (w[1].rand1, w[1].rand2)));
    }

    #[test]
    fn test_rejects_out_of_range_offsets() {
        let sample = Vector3::new(72.0, 0.0, 0.0);
        let found = candidate_offsets(
            &Matrix3::IDENTITY,
            'H',
            &[sample],
            GridBounds::new(5),
            1.0..100.0,
        );
        // Every candidate would need a zero or negative component
        assert!(found.is_empty());
    }
}
