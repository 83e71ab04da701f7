use geo::{Coord, LineString, Polygon};
use h3o::CellIndex;

use crate::model::MepError;

/// parses the h3 cell identifier found at some (0-based) data row of a matrix.
pub fn parse_cell(value: &str, row: usize) -> Result<CellIndex, MepError> {
    value
        .trim()
        .parse::<CellIndex>()
        .map_err(|e| MepError::InvalidHexCell {
            row,
            value: value.to_string(),
            source: e,
        })
}

/// creates the boundary polygon of an h3 cell in (longitude, latitude) ordering.
///
/// h3 reports cell boundary vertices as (lat, lng) pairs, 6 for hexagons and
/// 5 for pentagons (plus any distortion vertices at icosahedron edges). these are
/// flipped to (x=lng, y=lat) to match WKT boundaries. the ring is closed by
/// [`Polygon::new`].
pub fn hex_to_polygon(cell: CellIndex) -> Polygon<f64> {
    let coords = cell
        .boundary()
        .iter()
        .map(|vertex| Coord {
            x: vertex.lng(),
            y: vertex.lat(),
        })
        .collect::<Vec<_>>();
    Polygon::new(LineString::new(coords), vec![])
}
