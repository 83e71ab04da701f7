mod mep_score;
mod mep_score_config;
mod score_app;

pub use mep_score::{MepScore, MepScoreSummary};
pub use mep_score_config::MepScoreConfig;
pub use score_app::run;
