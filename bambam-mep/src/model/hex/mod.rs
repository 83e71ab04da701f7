mod hex_coverage;
mod hex_ops;

pub use hex_coverage::hexes_for_boundary;
pub use hex_ops::{hex_to_polygon, parse_cell};

/// default h3 resolution of the MEP grid
pub const DEFAULT_RESOLUTION: h3o::Resolution = h3o::Resolution::Eight;
