use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::MepError;

pub const DEFAULT_CHUNKSIZE: usize = 500_000;

/// arguments for a single run of the MEP matrix boundary filter.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FilterConfig {
    /// file containing a single WKT POLYGON or MULTIPOLYGON in lon/lat
    pub wkt_boundary_file: PathBuf,
    /// MEP matrix CSV with a `grid_id` column of h3 cells
    pub mep_matrix_file: PathBuf,
    /// destination for the filtered matrix CSV
    pub output_file: PathBuf,
    /// number of matrix rows held in memory at a time
    pub chunksize: usize,
}

impl FilterConfig {
    pub fn new(
        wkt_boundary_file: &Path,
        mep_matrix_file: &Path,
        output_file: &Path,
        chunksize: usize,
    ) -> Result<Self, MepError> {
        if chunksize == 0 {
            return Err(MepError::ConfigurationError(String::from(
                "chunksize must be a positive integer",
            )));
        }
        Ok(Self {
            wkt_boundary_file: wkt_boundary_file.to_path_buf(),
            mep_matrix_file: mep_matrix_file.to_path_buf(),
            output_file: output_file.to_path_buf(),
            chunksize,
        })
    }
}
