use std::io::Read;

use crate::model::{matrix::MatrixRow, MepError};

/// iterator over batches of at most `chunksize` matrix rows. row positions keep
/// counting across batches so every row carries its position in the file.
/// iteration stops after the first read error.
pub struct MatrixChunks<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    filepath: String,
    chunksize: usize,
    position: usize,
    failed: bool,
}

impl<R: Read> MatrixChunks<R> {
    pub fn new(
        records: csv::StringRecordsIntoIter<R>,
        filepath: String,
        chunksize: usize,
    ) -> Result<Self, MepError> {
        if chunksize == 0 {
            return Err(MepError::ConfigurationError(String::from(
                "chunksize must be a positive integer",
            )));
        }
        Ok(Self {
            records,
            filepath,
            chunksize,
            position: 0,
            failed: false,
        })
    }
}

impl<R: Read> Iterator for MatrixChunks<R> {
    type Item = Result<Vec<MatrixRow>, MepError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut chunk = Vec::with_capacity(self.chunksize.min(1024));
        for row in self.records.by_ref().take(self.chunksize) {
            match row {
                Ok(record) => {
                    chunk.push(MatrixRow::new(self.position, record));
                    self.position += 1;
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(MepError::CsvReadError {
                        filepath: self.filepath.clone(),
                        source: e,
                    }));
                }
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(Ok(chunk))
        }
    }
}
