use csv::StringRecord;

use crate::model::MepError;

/// one record of a MEP matrix. fields other than those read by an operation
/// are passed through unchanged.
#[derive(Clone, Debug)]
pub struct MatrixRow {
    /// 0-based position of this row among the data rows of the file
    pub position: usize,
    pub record: StringRecord,
}

impl MatrixRow {
    pub fn new(position: usize, record: StringRecord) -> Self {
        Self { position, record }
    }

    pub fn get(&self, idx: usize, column: &str) -> Result<&str, MepError> {
        self.record.get(idx).ok_or_else(|| MepError::InvalidRowValue {
            row: self.position,
            column: column.to_string(),
            value: String::from("<missing>"),
        })
    }

    /// reads a numeric field. empty fields are treated as zero.
    pub fn get_f64(&self, idx: usize, column: &str) -> Result<f64, MepError> {
        let value = self.get(idx, column)?.trim();
        if value.is_empty() {
            return Ok(0.0);
        }
        value.parse::<f64>().map_err(|_| MepError::InvalidRowValue {
            row: self.position,
            column: column.to_string(),
            value: value.to_string(),
        })
    }

    /// copies this record with the field at `idx` set to `value`. when `idx` is
    /// one past the last field, the value is appended.
    pub fn with_field(&self, idx: usize, value: &str) -> StringRecord {
        let mut out = StringRecord::with_capacity(
            self.record.as_slice().len() + value.len(),
            self.record.len().max(idx + 1),
        );
        for (i, field) in self.record.iter().enumerate() {
            if i == idx {
                out.push_field(value);
            } else {
                out.push_field(field);
            }
        }
        if idx >= self.record.len() {
            out.push_field(value);
        }
        out
    }
}
