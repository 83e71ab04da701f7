/*
    this script reads a MEP matrix in chunks and keeps the rows whose h3 grid cell
    lies entirely within a WKT boundary, appending the cell polygon as a `geometry`
    column. partially-overlapping cells are dropped.
*/

use bambam_mep::app::filter::{self, FilterConfig, DEFAULT_CHUNKSIZE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct FilterArgs {
    /// file containing a WKT POLYGON or MULTIPOLYGON in lon/lat coordinates
    wkt_boundary_file: PathBuf,
    /// MEP matrix CSV with a `grid_id` column of h3 cells
    mep_matrix_file: PathBuf,
    /// file path to write the filtered matrix
    output_file: PathBuf,
    /// number of matrix rows to read at a time
    #[arg(default_value_t = DEFAULT_CHUNKSIZE)]
    chunksize: usize,
}

fn main() {
    env_logger::init();
    let args = FilterArgs::parse();
    let result = FilterConfig::new(
        &args.wkt_boundary_file,
        &args.mep_matrix_file,
        &args.output_file,
        args.chunksize,
    )
    .and_then(|config| filter::run(&config));
    match result {
        Ok(summary) => println!("finished. {summary}"),
        Err(e) => {
            log::error!("bambam_mep_filter failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
