use std::collections::BTreeSet;

use h3o::{
    geom::{ContainmentMode, TilerBuilder},
    CellIndex, Resolution,
};

use crate::model::{BoundaryGeometry, MepError};

/// collects the h3 cells at some resolution whose centroids fall within the
/// boundary. each polygon of a MULTIPOLYGON is filled separately and the
/// results are unioned.
pub fn hexes_for_boundary(
    boundary: &BoundaryGeometry,
    resolution: Resolution,
) -> Result<BTreeSet<CellIndex>, MepError> {
    let polygons = boundary.polygons();
    if polygons.len() > 1 {
        log::info!(
            "input {} has {} polygons to fill at resolution {}",
            boundary.geometry_type(),
            polygons.len(),
            resolution
        );
    }
    let mut cells = BTreeSet::new();
    for polygon in polygons {
        let mut tiler = TilerBuilder::new(resolution)
            .containment_mode(ContainmentMode::ContainsCentroid)
            .build();
        tiler.add(polygon.clone()).map_err(|e| {
            MepError::HexCoverageError(format!("failure adding polygon to h3 tiler: {e}"))
        })?;
        cells.extend(tiler.into_coverage());
    }
    Ok(cells)
}
