use std::path::Path;

use kdam::tqdm;

use crate::{
    app::score::{MepScore, MepScoreConfig, MepScoreSummary},
    model::{matrix::MatrixReader, MepError},
};

/// computes a weighted MEP score over a matrix file, reading `chunksize` rows
/// at a time. returns the score along with the row counts behind it.
pub fn run(
    mep_matrix_file: &Path,
    config: &MepScoreConfig,
    chunksize: usize,
) -> Result<(f64, MepScoreSummary), MepError> {
    let config_json = serde_json::to_string_pretty(config)
        .map_err(|e| MepError::ConfigurationError(e.to_string()))?;
    log::info!("computing mep score with configuration:\n{config_json}");

    let reader = MatrixReader::from_path(mep_matrix_file)?;
    let mut score = MepScore::new(config, reader.header(), reader.filepath())?;
    let chunks = reader.chunks(chunksize)?;
    for chunk in tqdm!(chunks, desc = "score mep matrix chunks") {
        for row in chunk?.iter() {
            score.add_row(row)?;
        }
    }
    eprintln!();
    let value = score.value()?;
    let summary = score.summary();
    log::info!(
        "scored {} of {} rows, total weight {}",
        summary.rows_scored,
        summary.rows_read,
        summary.total_weight
    );
    Ok((value, summary))
}
