use csv::StringRecord;

use crate::{app::AtomicCsvWriter, model::MepError};

/// destination for the rows produced by a matrix operation.
pub trait RecordSink {
    fn write_record(&mut self, record: &StringRecord) -> Result<(), MepError>;
}

impl RecordSink for AtomicCsvWriter {
    fn write_record(&mut self, record: &StringRecord) -> Result<(), MepError> {
        AtomicCsvWriter::write_record(self, record)
    }
}

impl RecordSink for Vec<StringRecord> {
    fn write_record(&mut self, record: &StringRecord) -> Result<(), MepError> {
        self.push(record.clone());
        Ok(())
    }
}
