mod filter_app;
mod filter_config;
mod filter_summary;
mod spatial_row_filter;

pub use filter_app::run;
pub use filter_config::{FilterConfig, DEFAULT_CHUNKSIZE};
pub use filter_summary::FilterSummary;
pub use spatial_row_filter::SpatialRowFilter;
