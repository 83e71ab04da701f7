use bambam_mep::{
    app::{
        filter::DEFAULT_CHUNKSIZE,
        hexes,
        score::{self, MepScoreConfig},
    },
    model::{hex::DEFAULT_RESOLUTION, MepError},
};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    #[command(
        name = "hexes",
        about = "list the h3 cells whose centroids fall within a WKT boundary"
    )]
    Hexes {
        /// file containing a WKT POLYGON or MULTIPOLYGON in lon/lat coordinates
        wkt_boundary_file: PathBuf,
        /// file path to write the `grid_id,geometry` CSV
        output_file: PathBuf,
        /// h3 resolution of the cells
        #[arg(long, default_value_t = u8::from(DEFAULT_RESOLUTION))]
        resolution: u8,
    },
    #[command(
        name = "score",
        about = "compute a weighted MEP score over a MEP matrix"
    )]
    Score {
        /// MEP matrix CSV with `mode` and `mep_<activity>` columns
        mep_matrix_file: PathBuf,
        /// TOML file with modes, activities, and weighting_column entries
        #[arg(long)]
        config_file: Option<PathBuf>,
        /// comma-delimited list of modes to score, overrides the config file
        #[arg(long)]
        modes: Option<String>,
        /// comma-delimited list of activities to score, overrides the config file
        #[arg(long)]
        activities: Option<String>,
        /// score every row with weight 1 instead of using the weighting column
        #[arg(long)]
        unweighted: bool,
        /// number of matrix rows to read at a time
        #[arg(long, default_value_t = DEFAULT_CHUNKSIZE)]
        chunksize: usize,
    },
}

impl App {
    pub fn run(&self) -> Result<(), MepError> {
        match self {
            Self::Hexes {
                wkt_boundary_file,
                output_file,
                resolution,
            } => {
                let res = h3o::Resolution::try_from(*resolution)
                    .map_err(|e| MepError::ConfigurationError(e.to_string()))?;
                let n = hexes::run(wkt_boundary_file, output_file, res)?;
                println!("finished. wrote {n} h3 cells.");
                Ok(())
            }
            Self::Score {
                mep_matrix_file,
                config_file,
                modes,
                activities,
                unweighted,
                chunksize,
            } => {
                let mut config = match config_file {
                    Some(f) => {
                        let filename = f.to_string_lossy();
                        log::info!("reading mep score configuration from {filename}");
                        MepScoreConfig::from_file(f)?
                    }
                    None => MepScoreConfig::default(),
                };
                if let Some(m) = modes {
                    config.modes = split_list(m);
                }
                if let Some(a) = activities {
                    config.activities = split_list(a);
                }
                if *unweighted {
                    config.weighting_column = None;
                }
                let (value, _) = score::run(mep_matrix_file, &config, *chunksize)?;
                println!("{value}");
                Ok(())
            }
        }
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(",")
        .map(|c| c.trim().to_owned())
        .filter(|c| !c.is_empty())
        .collect_vec()
}

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    if let Err(e) = args.app.run() {
        log::error!("mep_util failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
