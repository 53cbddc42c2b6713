/// Aggregate entry: one deduplicated record per distinct key value.

/// The first-seen row for a key, plus how many rows shared that key.
///
/// Values are frozen at first occurrence; later duplicates only bump `count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateEntry {
    pub key: String,
    pub values: Vec<String>,
    pub count: u64,
}

impl AggregateEntry {
    /// Start an entry from its first occurrence (`count == 1`).
    pub fn first_seen(key: String, values: Vec<String>) -> Self {
        Self {
            key,
            values,
            count: 1,
        }
    }

    /// Record another row sharing this key. Its values are discarded.
    #[inline]
    pub fn record_duplicate(&mut self) {
        self.count += 1;
    }

    /// Output record: the stored values followed by the count.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(self.values.len() + 1);
        record.extend(self.values.iter().cloned());
        record.push(self.count.to_string());
        record
    }
}
