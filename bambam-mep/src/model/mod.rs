pub mod boundary;
pub mod hex;
pub mod matrix;
mod mep_error;

pub use boundary::BoundaryGeometry;
pub use mep_error::MepError;
