/// Count ranking.
use crate::model::AggregateEntry;

/// Sort by count, highest first. `sort_by` is stable, so entries with equal
/// counts keep their first-seen order and identical inputs always produce
/// identical output.
pub fn rank_by_count(entries: &mut [AggregateEntry]) {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, count: u64) -> AggregateEntry {
        AggregateEntry {
            key: key.to_string(),
            values: vec![key.to_string()],
            count,
        }
    }

    /// Counts [3, 1, 3, 2] must come out as [3 (first), 3 (second), 2, 1].
    #[test]
    fn ties_preserve_input_order() {
        let mut entries = vec![entry("a", 3), entry("b", 1), entry("c", 3), entry("d", 2)];
        rank_by_count(&mut entries);
        let order: Vec<(&str, u64)> = entries.iter().map(|e| (e.key.as_str(), e.count)).collect();
        assert_eq!(order, vec![("a", 3), ("c", 3), ("d", 2), ("b", 1)]);
    }

    #[test]
    fn empty_slice_is_fine() {
        let mut entries: Vec<AggregateEntry> = Vec::new();
        rank_by_count(&mut entries);
        assert!(entries.is_empty());
    }
}
