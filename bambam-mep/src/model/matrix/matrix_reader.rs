use std::{fs::File, io::Read, path::Path};

use crate::model::{
    matrix::{MatrixChunks, MatrixHeader},
    MepError,
};

/// reads a MEP matrix CSV with a header row. data rows are only read when
/// iterating over [`MatrixReader::chunks`], so a reader can be opened on a file
/// much larger than memory.
pub struct MatrixReader<R: Read> {
    filepath: String,
    header: MatrixHeader,
    reader: csv::Reader<R>,
}

impl MatrixReader<File> {
    pub fn from_path(filepath: &Path) -> Result<Self, MepError> {
        let name = filepath.to_string_lossy().to_string();
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(filepath)
            .map_err(|e| MepError::CsvReadError {
                filepath: name.clone(),
                source: e,
            })?;
        Self::from_csv_reader(reader, name)
    }
}

impl<R: Read> MatrixReader<R> {
    /// wraps some CSV source. `name` is used in error messages.
    pub fn new(source: R, name: &str) -> Result<Self, MepError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(source);
        Self::from_csv_reader(reader, name.to_string())
    }

    fn from_csv_reader(mut reader: csv::Reader<R>, filepath: String) -> Result<Self, MepError> {
        let header_record = reader
            .headers()
            .map_err(|e| MepError::CsvReadError {
                filepath: filepath.clone(),
                source: e,
            })?
            .clone();
        Ok(Self {
            filepath,
            header: MatrixHeader::new(header_record),
            reader,
        })
    }

    pub fn header(&self) -> &MatrixHeader {
        &self.header
    }

    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    /// consumes this reader as a lazy sequence of row batches with at most
    /// `chunksize` rows each.
    pub fn chunks(self, chunksize: usize) -> Result<MatrixChunks<R>, MepError> {
        MatrixChunks::new(self.reader.into_records(), self.filepath, chunksize)
    }
}
