//! # Record Identifier Generator
//!
//! Ids look like `hos001`: the collection prefix followed by a number padded to three
//! digits. Numbers above 999 simply widen (`hos1000`).
//!
//! The next id is found by linear probing. The probe starts at `len + 1`, which is the
//! right answer when nothing has been deleted, and walks upward until it finds a number
//! whose id is not already taken (compared case-insensitively). Gaps left below the
//! starting point by deletes are never revisited, so numbering is unique but not dense.

use crate::entity::CollectionEntity;
use std::collections::HashSet;

/// Formats `number` as an id with the given prefix.
pub fn format_id(prefix: &str, number: usize) -> String {
    format!("{prefix}{number:03}")
}

/// Probes for the first free id, starting at `len + 1`.
pub fn probe<'a, I>(prefix: &str, len: usize, taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<String> = taken.into_iter().map(str::to_uppercase).collect();

    let mut candidate = len + 1;
    loop {
        let id = format_id(prefix, candidate);
        if !taken.contains(&id.to_uppercase()) {
            return id;
        }
        candidate += 1;
    }
}

/// The id the next record created in `records` would receive.
pub fn next_id<T: CollectionEntity>(records: &[T]) -> String {
    probe(T::ID_PREFIX, records.len(), records.iter().map(|r| r.id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_to_three_digits() {
        assert_eq!(format_id("app", 7), "app007");
        assert_eq!(format_id("doc", 42), "doc042");
        assert_eq!(format_id("hos", 999), "hos999");
    }

    #[test]
    fn test_format_widens_past_999() {
        assert_eq!(format_id("hos", 1000), "hos1000");
    }

    #[test]
    fn test_probe_empty_collection_starts_at_one() {
        assert_eq!(probe("hos", 0, []), "hos001");
    }

    #[test]
    fn test_probe_skips_taken_ids() {
        // hos001 deleted, hos002 and hos003 remain: probe starts at 3 and moves to 4
        let taken = ["hos002", "hos003"];
        assert_eq!(probe("hos", taken.len(), taken), "hos004");
    }

    #[test]
    fn test_probe_does_not_reuse_gap_below_start() {
        // hos001 was deleted but the probe starts at len + 1 = 2
        let taken = ["hos002"];
        assert_eq!(probe("hos", taken.len(), taken), "hos003");
        // ...while a free slot at the starting point is taken as is
        assert_eq!(probe("hos", 1, ["hos003"]), "hos002");
    }

    #[test]
    fn test_probe_is_case_insensitive() {
        let taken = ["HOS001"];
        assert_eq!(probe("hos", 0, taken), "hos002");
    }

    #[test]
    fn test_probe_is_deterministic() {
        let taken = ["doc001", "doc003", "doc004"];
        let first = probe("doc", taken.len(), taken);
        let second = probe("doc", taken.len(), taken);
        assert_eq!(first, second);
        assert_eq!(first, "doc005");
    }
}
