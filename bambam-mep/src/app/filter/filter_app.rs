use kdam::tqdm;

use crate::{
    app::{
        filter::{FilterConfig, FilterSummary, SpatialRowFilter},
        AtomicCsvWriter,
    },
    model::{matrix::MatrixReader, BoundaryGeometry, MepError},
};

/// filters a MEP matrix to the rows whose h3 cells lie within a WKT boundary.
///
/// # Arguments
/// * `config` - input and output files along with the row chunk size
///
/// # Result
///
/// row counts for the run. the output file is only created when the whole
/// matrix has been processed; on failure no file is written at
/// `config.output_file`.
pub fn run(config: &FilterConfig) -> Result<FilterSummary, MepError> {
    let config_json = serde_json::to_string_pretty(config)
        .map_err(|e| MepError::ConfigurationError(e.to_string()))?;
    log::info!("running mep analysis with arguments:\n{config_json}");

    let boundary = BoundaryGeometry::from_file(&config.wkt_boundary_file)?;
    let extent = boundary.extent();
    log::info!(
        "loaded {} boundary from {} with extent ({}, {}) to ({}, {})",
        boundary.geometry_type(),
        config.wkt_boundary_file.to_string_lossy(),
        extent.min().x,
        extent.min().y,
        extent.max().x,
        extent.max().y
    );

    let reader = MatrixReader::from_path(&config.mep_matrix_file)?;
    let filter = SpatialRowFilter::new(boundary, reader.header(), reader.filepath())?;
    let chunks = reader.chunks(config.chunksize)?;

    let mut writer = AtomicCsvWriter::new(&config.output_file)?;
    let chunk_iter = tqdm!(chunks, desc = "filter mep matrix chunks");
    let summary = filter.filter_rows(chunk_iter, &mut writer)?;
    eprintln!();
    writer.commit()?;
    log::info!(
        "wrote {} rows to {}",
        summary.rows_retained,
        config.output_file.to_string_lossy()
    );
    Ok(summary)
}
