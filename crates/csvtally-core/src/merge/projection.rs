/// Header-based projection of a source row onto the output column list.
///
/// Columns are matched by name, so sources may reorder columns, omit some
/// (filled with empty strings) or carry extras (dropped).
use csv::StringRecord;

const BOM: char = '\u{feff}';

#[derive(Debug, Clone)]
pub struct Projection {
    /// For each output column, the index of that column in the source.
    indices: Vec<Option<usize>>,
}

impl Projection {
    pub fn new(source_header: &StringRecord, columns: &[String]) -> Self {
        let indices = columns
            .iter()
            .map(|col| column_position(source_header, col))
            .collect();
        Self { indices }
    }

    /// Whether `header` names `column`.
    pub fn header_contains(header: &StringRecord, column: &str) -> bool {
        column_position(header, column).is_some()
    }

    /// Write the projected fields of `record` into `out`, replacing its contents.
    ///
    /// A source row shorter than its header reads the absent cells as empty.
    pub fn project_into(&self, record: &StringRecord, out: &mut StringRecord) {
        out.clear();
        for idx in &self.indices {
            let field = idx.and_then(|i| record.get(i)).unwrap_or("");
            out.push_field(field);
        }
    }

    /// Output columns the source header does not provide.
    pub fn missing<'c>(&self, columns: &'c [String]) -> Vec<&'c str> {
        self.indices
            .iter()
            .zip(columns)
            .filter(|(idx, _)| idx.is_none())
            .map(|(_, col)| col.as_str())
            .collect()
    }
}

fn column_position(header: &StringRecord, column: &str) -> Option<usize> {
    header
        .iter()
        .position(|h| h.trim_start_matches(BOM) == column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn project(header: &[&str], row: &[&str], columns: &[String]) -> Vec<String> {
        let p = Projection::new(&StringRecord::from(header.to_vec()), columns);
        let mut out = StringRecord::new();
        p.project_into(&StringRecord::from(row.to_vec()), &mut out);
        out.iter().map(str::to_string).collect()
    }

    #[test]
    fn reordered_columns_are_remapped_by_name() {
        let columns = cols(&["Difficulty", "Title"]);
        let got = project(&["Title", "Difficulty"], &["Two Sum", "Easy"], &columns);
        assert_eq!(got, vec!["Easy", "Two Sum"]);
    }

    #[test]
    fn missing_column_becomes_empty() {
        let columns = cols(&["Difficulty", "Title", "Topics"]);
        let got = project(&["Title"], &["Two Sum"], &columns);
        assert_eq!(got, vec!["", "Two Sum", ""]);
    }

    #[test]
    fn extra_columns_are_dropped() {
        let columns = cols(&["Title"]);
        let got = project(&["Id", "Title", "Notes"], &["1", "Two Sum", "meh"], &columns);
        assert_eq!(got, vec!["Two Sum"]);
    }

    #[test]
    fn short_row_reads_absent_cells_as_empty() {
        let columns = cols(&["Title", "Link"]);
        let got = project(&["Title", "Link"], &["Two Sum"], &columns);
        assert_eq!(got, vec!["Two Sum", ""]);
    }

    #[test]
    fn bom_on_first_header_cell_is_ignored() {
        let columns = cols(&["Difficulty", "Title"]);
        let got = project(&["\u{feff}Difficulty", "Title"], &["Hard", "LRU Cache"], &columns);
        assert_eq!(got, vec!["Hard", "LRU Cache"]);
    }

    #[test]
    fn header_contains_ignores_bom() {
        let header = StringRecord::from(vec!["\u{feff}Title", "Link"]);
        assert!(Projection::header_contains(&header, "Title"));
        assert!(!Projection::header_contains(&header, "Topics"));
    }

    #[test]
    fn missing_lists_unmatched_columns() {
        let columns = cols(&["Difficulty", "Title", "Topics"]);
        let p = Projection::new(&StringRecord::from(vec!["Title"]), &columns);
        assert_eq!(p.missing(&columns), vec!["Difficulty", "Topics"]);
    }
}
