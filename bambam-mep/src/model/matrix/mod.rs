mod matrix_chunks;
mod matrix_header;
mod matrix_reader;
mod matrix_row;

pub use matrix_chunks::MatrixChunks;
pub use matrix_header::MatrixHeader;
pub use matrix_reader::MatrixReader;
pub use matrix_row::MatrixRow;

pub const GRID_ID: &str = "grid_id";
pub const GEOMETRY: &str = "geometry";
pub const MODE: &str = "mode";
pub const MEP_PREFIX: &str = "mep_";
pub const POPULATION: &str = "population";
