use std::path::{Path, PathBuf};

use csv::{QuoteStyle, StringRecord};
use tempfile::NamedTempFile;

use crate::model::MepError;

/// a CSV writer that stages output in a temporary file next to the destination
/// and only moves it to the destination on [`AtomicCsvWriter::commit`]. if the
/// writer is dropped without committing, the temporary file is removed and
/// nothing appears at the destination.
pub struct AtomicCsvWriter {
    filepath: PathBuf,
    writer: csv::Writer<NamedTempFile>,
}

impl AtomicCsvWriter {
    pub fn new(filepath: &Path) -> Result<Self, MepError> {
        let directory = match filepath.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let tmp = tempfile::Builder::new()
            .prefix(".bambam-mep-")
            .suffix(".csv.tmp")
            .tempfile_in(&directory)
            .map_err(|e| MepError::OutputError {
                filepath: filepath.to_string_lossy().to_string(),
                source: e,
            })?;
        log::debug!(
            "staging output for {} at {}",
            filepath.to_string_lossy(),
            tmp.path().to_string_lossy()
        );
        let writer = csv::WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .from_writer(tmp);
        Ok(Self {
            filepath: filepath.to_path_buf(),
            writer,
        })
    }

    pub fn write_record(&mut self, record: &StringRecord) -> Result<(), MepError> {
        self.writer
            .write_record(record)
            .map_err(|e| MepError::CsvWriteError {
                filepath: self.filepath.to_string_lossy().to_string(),
                source: e,
            })
    }

    /// flushes the staged file and renames it onto the destination path,
    /// replacing any existing file there.
    pub fn commit(self) -> Result<(), MepError> {
        let filepath = self.filepath.to_string_lossy().to_string();
        let tmp = self
            .writer
            .into_inner()
            .map_err(|e| MepError::OutputError {
                filepath: filepath.clone(),
                source: e.into_error(),
            })?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| MepError::OutputError {
                filepath: filepath.clone(),
                source: e,
            })?;
        tmp.persist(&self.filepath)
            .map_err(|e| MepError::OutputError {
                filepath,
                source: e.error,
            })?;
        Ok(())
    }
}
