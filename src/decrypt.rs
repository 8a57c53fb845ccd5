//! Character decryption
//!
//! A character is recovered from the truncated first coordinate of
//! `inverse * (sample - offset)`. When only part of the offset is known the
//! two remaining degrees of freedom are brute-forced over a small grid.

use crate::linalg::{Matrix3, Vector3};
use crate::oracle::printable_char;
use crate::reporters::SearchReporter;
use log::{debug, info};

/// Default upper bound (inclusive) of the bounded-search grid on both axes
pub const DEFAULT_GRID_MAX: u32 = 100;

/// Square `0..=max` x `0..=max` of trial values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub max: u32,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            max: DEFAULT_GRID_MAX,
        }
    }
}

impl GridBounds {
    pub fn new(max: u32) -> Self {
        Self { max }
    }

    /// Number of trials in the grid
    pub fn cells(&self) -> u64 {
        let side = u64::from(self.max) + 1;
        side * side
    }
}

/// How the message decoder turns a sample into a character
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecodeMode {
    /// The whole offset is known
    FullOffset(Vector3),
    /// Only `offset` is assumed; the sample's Y/Z are replaced by grid trials
    Bounded { offset: Vector3, grid: GridBounds },
}

/// Decrypt with a fully known offset
///
/// `None` when the truncated X coordinate is not printable.
#[inline]
pub fn decrypt_with_offset(sample: Vector3, inverse: &Matrix3, offset: Vector3) -> Option<char> {
    let decrypted = inverse * (sample - offset);
    printable_char(decrypted.x)
}

/// Decrypt by brute-forcing the sample's Y/Z over `grid`
///
/// Trials run in row-major `(i, j)` order and the first printable result
/// wins. A trial whose X is not printable but whose Y is returns the Y
/// character instead.
pub fn decrypt_bounded(
    sample: Vector3,
    inverse: &Matrix3,
    offset: Vector3,
    grid: GridBounds,
) -> Option<char> {
    for i in 0..=grid.max {
        for j in 0..=grid.max {
            let adjusted = Vector3::new(sample.x, f64::from(i), f64::from(j));
            let decrypted = inverse * (adjusted - offset);

            if let Some(c) = printable_char(decrypted.x) {
                debug!("Decrypted vector: {} at trial ({}, {})", decrypted, i, j);
                return Some(c);
            }
            if let Some(c) = printable_char(decrypted.y) {
                debug!(
                    "Decrypted vector: {} at trial ({}, {}), using Y",
                    decrypted, i, j
                );
                return Some(c);
            }
        }
    }
    None
}

/// Decrypt one sample under `mode`
pub fn decrypt_character(sample: Vector3, inverse: &Matrix3, mode: DecodeMode) -> Option<char> {
    match mode {
        DecodeMode::FullOffset(offset) => decrypt_with_offset(sample, inverse, offset),
        DecodeMode::Bounded { offset, grid } => decrypt_bounded(sample, inverse, offset, grid),
    }
}

/// Decode `samples` in order, skipping positions without a character
pub fn decode_message<R: SearchReporter + ?Sized>(
    samples: &[Vector3],
    inverse: &Matrix3,
    mode: DecodeMode,
    reporter: &R,
) -> String {
    let message: String = samples
        .iter()
        .enumerate()
        .filter_map(|(index, &sample)| {
            let character = decrypt_character(sample, inverse, mode);
            match character {
                Some(c) => info!("Decrypted character {}: {:?} from {}", index, c, sample),
                None => debug!("No character at position {} ({})", index, sample),
            }
            reporter.report_character(index, character);
            character
        })
        .collect();

    reporter.report_message(&message);
    message
}
