use std::collections::HashMap;

use csv::StringRecord;

use crate::model::MepError;

/// the header row of a MEP matrix CSV with a lookup from column name to index.
/// when a column name repeats, the first occurrence wins.
#[derive(Clone, Debug)]
pub struct MatrixHeader {
    record: StringRecord,
    lookup: HashMap<String, usize>,
}

impl MatrixHeader {
    pub fn new(record: StringRecord) -> Self {
        let mut lookup = HashMap::new();
        for (idx, name) in record.iter().enumerate() {
            lookup.entry(name.to_string()).or_insert(idx);
        }
        Self { record, lookup }
    }

    pub fn record(&self) -> &StringRecord {
        &self.record
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.lookup.get(column).copied()
    }

    /// finds a column that must be present in the file named by `filepath`.
    pub fn require(&self, column: &str, filepath: &str) -> Result<usize, MepError> {
        self.index_of(column)
            .ok_or_else(|| MepError::MissingColumn {
                filepath: filepath.to_string(),
                column: column.to_string(),
            })
    }

    /// builds the header for a dataset with `column` added. an existing column
    /// with that name is reused in place, otherwise the column is appended.
    /// returns the new header and the index of the column.
    pub fn with_column(&self, column: &str) -> (MatrixHeader, usize) {
        match self.index_of(column) {
            Some(idx) => (self.clone(), idx),
            None => {
                let mut record = self.record.clone();
                record.push_field(column);
                let idx = record.len() - 1;
                (MatrixHeader::new(record), idx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MatrixHeader;
    use crate::model::MepError;
    use csv::StringRecord;

    #[test]
    fn test_with_column_appends() {
        let header = MatrixHeader::new(StringRecord::from(vec!["grid_id", "pop"]));
        let (out, idx) = header.with_column("geometry");
        assert_eq!(idx, 2);
        assert_eq!(out.record(), &StringRecord::from(vec!["grid_id", "pop", "geometry"]));
    }

    #[test]
    fn test_with_column_reuses_existing() {
        let header = MatrixHeader::new(StringRecord::from(vec!["geometry", "grid_id"]));
        let (out, idx) = header.with_column("geometry");
        assert_eq!(idx, 0);
        assert_eq!(out.record().len(), 2);
    }

    #[test]
    fn test_require_missing_column() {
        let header = MatrixHeader::new(StringRecord::from(vec!["h3", "pop"]));
        match header.require("grid_id", "matrix.csv") {
            Err(MepError::MissingColumn { filepath, column }) => {
                assert_eq!(filepath, "matrix.csv");
                assert_eq!(column, "grid_id");
            }
            other => panic!("expected missing column error, found {other:?}"),
        }
    }
}
