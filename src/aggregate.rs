//! Merging of per-keyword search results into one gallery.

use std::collections::HashSet;

use crate::unsplash::Photo;

/// Concatenate per-keyword batches in keyword-rank order, keeping only the
/// first photo seen for each id. Output order is first-seen order, so the
/// merge is deterministic given deterministic inputs.
pub fn merge_photo_batches(batches: Vec<Vec<Photo>>) -> Vec<Photo> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for batch in batches {
        for photo in batch {
            if seen.insert(photo.id.clone()) {
                merged.push(photo);
            }
        }
    }

    merged
}
