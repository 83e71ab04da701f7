use std::fmt::Display;

use serde::Serialize;

/// row counts collected while filtering a matrix.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub chunks: usize,
    pub rows_read: usize,
    pub rows_retained: usize,
}

impl FilterSummary {
    pub fn add_chunk(&mut self, rows_read: usize, rows_retained: usize) {
        self.chunks += 1;
        self.rows_read += rows_read;
        self.rows_retained += rows_retained;
    }
}

impl Display for FilterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "resulting dataset has {} rows ({} rows read over {} chunks)",
            self.rows_retained, self.rows_read, self.chunks
        )
    }
}
