use std::path::Path;

use config::Config;
use serde::{Deserialize, Serialize};

use crate::model::{matrix, MepError};

/// selects the matrix rows and columns that contribute to a MEP score.
///
/// example TOML:
/// ```toml
/// modes = ["walk", "transit"]
/// activities = ["jobs", "healthcare"]
/// weighting_column = "population"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MepScoreConfig {
    /// travel modes included in the score, matched against the `mode` column
    #[serde(default = "default_modes")]
    pub modes: Vec<String>,
    /// activity categories included in the score, read from `mep_<activity>` columns
    #[serde(default = "default_activities")]
    pub activities: Vec<String>,
    /// if provided, a column used to weight score values by row
    #[serde(default = "default_weighting_column")]
    pub weighting_column: Option<String>,
}

fn default_modes() -> Vec<String> {
    ["walk", "bike", "drive", "transit"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_activities() -> Vec<String> {
    [
        "food",
        "services",
        "entertainment",
        "retail",
        "healthcare",
        "jobs",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_weighting_column() -> Option<String> {
    Some(String::from(matrix::POPULATION))
}

impl Default for MepScoreConfig {
    fn default() -> Self {
        Self {
            modes: default_modes(),
            activities: default_activities(),
            weighting_column: default_weighting_column(),
        }
    }
}

impl MepScoreConfig {
    /// reads a TOML configuration file. missing keys take their default values.
    pub fn from_file(filepath: &Path) -> Result<Self, MepError> {
        let name = filepath.to_string_lossy().to_string();
        let source = config::File::new(&name, config::FileFormat::Toml);
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| MepError::ConfigReadError {
                msg: format!("failed reading '{name}'"),
                source: e,
            })?;
        let result = config
            .try_deserialize::<MepScoreConfig>()
            .map_err(|e| MepError::ConfigReadError {
                msg: format!("failed decoding '{name}'"),
                source: e,
            })?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), MepError> {
        if self.modes.is_empty() {
            return Err(MepError::ConfigurationError(String::from(
                "mep score requires at least one mode",
            )));
        }
        if self.activities.is_empty() {
            return Err(MepError::ConfigurationError(String::from(
                "mep score requires at least one activity",
            )));
        }
        Ok(())
    }

    /// column name holding the MEP value for an activity
    pub fn activity_column(activity: &str) -> String {
        format!("{}{}", matrix::MEP_PREFIX, activity)
    }
}
