use h3o::error::InvalidCellIndex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MepError {
    #[error("failed reading boundary file '{filepath}': {source}")]
    BoundaryReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("unable to read WKT in boundary file '{filepath}': {msg}")]
    BoundaryParseError { filepath: String, msg: String },
    #[error("unsupported boundary geometry: {0}")]
    UnsupportedBoundaryGeometry(String),
    #[error("file '{filepath}' missing required column '{column}'")]
    MissingColumn { filepath: String, column: String },
    #[error("row {row} has invalid h3 cell '{value}': {source}")]
    InvalidHexCell {
        row: usize,
        value: String,
        source: InvalidCellIndex,
    },
    #[error("row {row} has invalid value '{value}' in column '{column}'")]
    InvalidRowValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("failed reading CSV file '{filepath}': {source}")]
    CsvReadError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failed writing CSV file '{filepath}': {source}")]
    CsvWriteError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failed writing output '{filepath}': {source}")]
    OutputError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure computing h3 coverage: {0}")]
    HexCoverageError(String),
    #[error("failure computing mep score: {0}")]
    ScoreError(String),
}
