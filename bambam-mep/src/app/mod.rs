mod atomic_csv_writer;
pub mod filter;
pub mod hexes;
mod record_sink;
pub mod score;

pub use atomic_csv_writer::AtomicCsvWriter;
pub use record_sink::RecordSink;
