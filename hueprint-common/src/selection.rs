//! Selection normalization
//!
//! Reduces a multi-select answer to two scalars:
//! - **density**: how much of the option pool was chosen
//! - **variety**: a hash of *which* labels were chosen, independent of order

use serde::Serialize;

use crate::hash::hash_unit;

/// Separator joining sorted labels before hashing
pub const SELECTION_SEPARATOR: &str = "|";

/// Density and variety summary of one selection list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SelectionSummary {
    /// `len / pool_size`, clamped to [0, 1]
    pub density: f64,
    /// Hash of the sorted, joined labels; 0 for an empty list
    pub variety: f64,
}

/// Summarize `labels` against an option pool of `pool_size` entries.
///
/// Labels are not checked for membership in the pool and duplicates are
/// counted as given. A pool size of zero is treated as one.
pub fn summarize<S: AsRef<str>>(labels: &[S], pool_size: usize) -> SelectionSummary {
    let density = (labels.len() as f64 / pool_size.max(1) as f64).clamp(0.0, 1.0);

    SelectionSummary {
        density,
        variety: variety(labels),
    }
}

fn variety<S: AsRef<str>>(labels: &[S]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }

    // Sort so the hash depends on the set chosen, not the order given.
    // Ordered by UTF-16 code units to match the browser's default sort.
    let mut sorted: Vec<&str> = labels.iter().map(|label| label.as_ref()).collect();
    sorted.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    hash_unit(&sorted.join(SELECTION_SEPARATOR))
}
