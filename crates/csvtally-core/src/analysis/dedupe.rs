/// Deduplication by key column.
///
/// Keeps one [`AggregateEntry`] per distinct key, in first-seen order. The
/// first row for a key supplies every stored value; later rows with the
/// same key only increment the count.
use crate::model::AggregateEntry;
use csv::StringRecord;
use std::collections::HashMap;

#[derive(Debug)]
pub struct Aggregator {
    key_index: usize,
    entries: Vec<AggregateEntry>,
    /// Key value → position in `entries`.
    positions: HashMap<String, usize>,
    rows_seen: u64,
}

impl Aggregator {
    pub fn new(key_index: usize) -> Self {
        Self {
            key_index,
            entries: Vec::new(),
            positions: HashMap::new(),
            rows_seen: 0,
        }
    }

    /// Fold one row in. A row too short to hold the key counts under `""`.
    pub fn push(&mut self, record: &StringRecord) {
        self.rows_seen += 1;
        let key = record.get(self.key_index).unwrap_or("");

        if let Some(&pos) = self.positions.get(key) {
            self.entries[pos].record_duplicate();
            return;
        }

        let values = record.iter().map(str::to_string).collect();
        self.positions.insert(key.to_string(), self.entries.len());
        self.entries
            .push(AggregateEntry::first_seen(key.to_string(), values));
    }

    pub fn rows_seen(&self) -> u64 {
        self.rows_seen
    }

    /// Number of distinct keys so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn into_entries(self) -> Vec<AggregateEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    /// N rows for "Two Sum" with differing difficulty collapse into one
    /// entry carrying the first difficulty and count N.
    #[test]
    fn first_seen_values_win() {
        let mut agg = Aggregator::new(1);
        agg.push(&rec(&["Easy", "Two Sum", "0.9"]));
        agg.push(&rec(&["Hard", "Two Sum", "0.1"]));
        agg.push(&rec(&["Medium", "Two Sum", ""]));

        let entries = agg.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].count, 3);
        assert_eq!(entries[0].values, vec!["Easy", "Two Sum", "0.9"]);
    }

    #[test]
    fn entries_keep_first_seen_order() {
        let mut agg = Aggregator::new(0);
        for key in ["b", "a", "b", "c", "a"] {
            agg.push(&rec(&[key]));
        }
        assert_eq!(agg.rows_seen(), 5);
        let keys: Vec<String> = agg.into_entries().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    /// Keys are compared exactly: case and whitespace differences are
    /// distinct titles.
    #[test]
    fn keys_are_exact_matches() {
        let mut agg = Aggregator::new(0);
        agg.push(&rec(&["Two Sum"]));
        agg.push(&rec(&["two sum"]));
        agg.push(&rec(&["Two Sum "]));
        assert_eq!(agg.len(), 3);
    }

    #[test]
    fn short_row_counts_under_empty_key() {
        let mut agg = Aggregator::new(2);
        agg.push(&rec(&["a"]));
        agg.push(&rec(&["b", "c", ""]));
        let entries = agg.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "");
        assert_eq!(entries[0].count, 2);
    }
}
