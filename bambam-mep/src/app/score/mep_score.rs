use std::collections::HashSet;

use serde::Serialize;

use crate::{
    app::score::MepScoreConfig,
    model::{
        matrix::{self, MatrixHeader, MatrixRow},
        MepError,
    },
};

/// accumulates a weighted MEP score over matrix rows.
///
/// for each row whose `mode` is one of the configured modes, the row value is
/// the sum of its `mep_<activity>` columns. the score is the weighted mean of
/// row values, using the weighting column if configured or a weight of 1
/// otherwise.
pub struct MepScore {
    modes: HashSet<String>,
    mode_index: usize,
    activity_columns: Vec<(String, usize)>,
    weight_column: Option<(String, usize)>,
    summary: MepScoreSummary,
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct MepScoreSummary {
    pub rows_read: usize,
    pub rows_scored: usize,
    pub weighted_sum: f64,
    pub total_weight: f64,
}

impl MepScore {
    pub fn new(
        config: &MepScoreConfig,
        header: &MatrixHeader,
        filepath: &str,
    ) -> Result<Self, MepError> {
        config.validate()?;
        let mode_index = header.require(matrix::MODE, filepath)?;
        let activity_columns = config
            .activities
            .iter()
            .map(|act| {
                let column = MepScoreConfig::activity_column(act);
                let idx = header.require(&column, filepath)?;
                Ok((column, idx))
            })
            .collect::<Result<Vec<_>, MepError>>()?;
        let weight_column = match &config.weighting_column {
            Some(column) => Some((column.clone(), header.require(column, filepath)?)),
            None => None,
        };
        Ok(Self {
            modes: config.modes.iter().cloned().collect(),
            mode_index,
            activity_columns,
            weight_column,
            summary: MepScoreSummary::default(),
        })
    }

    pub fn add_row(&mut self, row: &MatrixRow) -> Result<(), MepError> {
        self.summary.rows_read += 1;
        let mode = row.get(self.mode_index, matrix::MODE)?;
        if !self.modes.contains(mode.trim()) {
            return Ok(());
        }
        let mut value = 0.0;
        for (column, idx) in self.activity_columns.iter() {
            value += row.get_f64(*idx, column)?;
        }
        let weight = match &self.weight_column {
            Some((column, idx)) => row.get_f64(*idx, column)?,
            None => 1.0,
        };
        self.summary.weighted_sum += weight * value;
        self.summary.total_weight += weight;
        self.summary.rows_scored += 1;
        Ok(())
    }

    pub fn summary(&self) -> MepScoreSummary {
        self.summary
    }

    /// the weighted mean. fails if no rows matched or their total weight is zero.
    pub fn value(&self) -> Result<f64, MepError> {
        if self.summary.rows_scored == 0 {
            return Err(MepError::ScoreError(String::from(
                "no matrix rows matched the configured modes",
            )));
        }
        if self.summary.total_weight == 0.0 {
            return Err(MepError::ScoreError(format!(
                "total weight of {} scored rows is zero",
                self.summary.rows_scored
            )));
        }
        Ok(self.summary.weighted_sum / self.summary.total_weight)
    }
}
