use std::path::Path;

use geo::{BoundingRect, Contains, Geometry, MultiPolygon, Polygon, Rect};
use wkt::TryFromWkt;

use crate::model::MepError;

/// a study area boundary in (longitude, latitude) coordinates. loaded once from
/// WKT and only used for containment tests against h3 cell polygons.
#[derive(Clone, Debug)]
pub struct BoundaryGeometry {
    shape: BoundaryShape,
    extent: Rect<f64>,
}

#[derive(Clone, Debug)]
enum BoundaryShape {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl BoundaryGeometry {
    /// reads a file containing a single WKT POLYGON or MULTIPOLYGON.
    pub fn from_file(filepath: &Path) -> Result<Self, MepError> {
        let wkt_str =
            std::fs::read_to_string(filepath).map_err(|e| MepError::BoundaryReadError {
                filepath: filepath.to_string_lossy().to_string(),
                source: e,
            })?;
        Self::try_from_wkt_str(&wkt_str).map_err(|e| match e {
            MepError::BoundaryParseError { msg, .. } => MepError::BoundaryParseError {
                filepath: filepath.to_string_lossy().to_string(),
                msg,
            },
            other => other,
        })
    }

    pub fn try_from_wkt_str(wkt_str: &str) -> Result<Self, MepError> {
        let geometry: Geometry<f64> =
            Geometry::try_from_wkt_str(wkt_str.trim()).map_err(|e| {
                MepError::BoundaryParseError {
                    filepath: String::from("<string>"),
                    msg: e.to_string(),
                }
            })?;
        Self::try_from(geometry)
    }

    /// true if the polygon lies entirely within this boundary. a polygon that
    /// only partially overlaps the boundary is not contained. a polygon touching
    /// the boundary edge from the inside is.
    pub fn contains(&self, polygon: &Polygon<f64>) -> bool {
        if !self.extent_covers(polygon) {
            return false;
        }
        match &self.shape {
            BoundaryShape::Polygon(p) => p.contains(polygon),
            BoundaryShape::MultiPolygon(mp) => mp.contains(polygon),
        }
    }

    /// the polygons making up this boundary, one for a POLYGON, one per member
    /// for a MULTIPOLYGON.
    pub fn polygons(&self) -> Vec<&Polygon<f64>> {
        match &self.shape {
            BoundaryShape::Polygon(p) => vec![p],
            BoundaryShape::MultiPolygon(mp) => mp.0.iter().collect(),
        }
    }

    pub fn extent(&self) -> &Rect<f64> {
        &self.extent
    }

    pub fn geometry_type(&self) -> &'static str {
        match &self.shape {
            BoundaryShape::Polygon(_) => "POLYGON",
            BoundaryShape::MultiPolygon(_) => "MULTIPOLYGON",
        }
    }

    /// bounding box pre-check. containment implies the polygon's bounding box
    /// lies within the boundary's bounding box.
    fn extent_covers(&self, polygon: &Polygon<f64>) -> bool {
        match polygon.bounding_rect() {
            None => false,
            Some(rect) => {
                rect.min().x >= self.extent.min().x
                    && rect.min().y >= self.extent.min().y
                    && rect.max().x <= self.extent.max().x
                    && rect.max().y <= self.extent.max().y
            }
        }
    }
}

impl TryFrom<Geometry<f64>> for BoundaryGeometry {
    type Error = MepError;

    fn try_from(geometry: Geometry<f64>) -> Result<Self, Self::Error> {
        let (shape, extent) = match geometry {
            Geometry::Polygon(p) => {
                let extent = p.bounding_rect();
                (BoundaryShape::Polygon(p), extent)
            }
            Geometry::MultiPolygon(mp) => {
                let extent = mp.bounding_rect();
                (BoundaryShape::MultiPolygon(mp), extent)
            }
            other => {
                return Err(MepError::UnsupportedBoundaryGeometry(format!(
                    "expected POLYGON or MULTIPOLYGON, found {}",
                    geometry_type_name(&other)
                )))
            }
        };
        let extent = extent.ok_or_else(|| {
            MepError::UnsupportedBoundaryGeometry(String::from("boundary geometry is empty"))
        })?;
        Ok(Self { shape, extent })
    }
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) => "LINE",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::Rect(_) => "RECT",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}

#[cfg(test)]
mod tests {
    use super::BoundaryGeometry;
    use crate::model::MepError;
    use geo::polygon;
    use std::io::Write;

    const SQUARE: &str = "POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))";

    #[test]
    fn test_contains_inside_polygon() {
        let boundary = BoundaryGeometry::try_from_wkt_str(SQUARE).expect("valid wkt");
        let inner = polygon![(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0)];
        assert!(boundary.contains(&inner));
    }

    #[test]
    fn test_partial_overlap_not_contained() {
        let boundary = BoundaryGeometry::try_from_wkt_str(SQUARE).expect("valid wkt");
        let straddling =
            polygon![(x: 9.0, y: 1.0), (x: 11.0, y: 1.0), (x: 11.0, y: 2.0), (x: 9.0, y: 2.0)];
        assert!(!boundary.contains(&straddling));
    }

    #[test]
    fn test_touching_edge_from_inside_is_contained() {
        let boundary = BoundaryGeometry::try_from_wkt_str(SQUARE).expect("valid wkt");
        let touching =
            polygon![(x: 9.0, y: 1.0), (x: 10.0, y: 1.0), (x: 10.0, y: 2.0), (x: 9.0, y: 2.0)];
        assert!(boundary.contains(&touching));
    }

    #[test]
    fn test_multipolygon_contains_member_only() {
        let wkt = "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 1, 0 0)), ((5 5, 6 5, 6 6, 5 6, 5 5)))";
        let boundary = BoundaryGeometry::try_from_wkt_str(wkt).expect("valid wkt");
        assert_eq!(boundary.geometry_type(), "MULTIPOLYGON");
        assert_eq!(boundary.polygons().len(), 2);
        let in_second = polygon![(x: 5.2, y: 5.2), (x: 5.8, y: 5.2), (x: 5.8, y: 5.8)];
        let in_gap = polygon![(x: 2.0, y: 2.0), (x: 3.0, y: 2.0), (x: 3.0, y: 3.0)];
        assert!(boundary.contains(&in_second));
        assert!(!boundary.contains(&in_gap));
    }

    #[test]
    fn test_rejects_non_polygonal() {
        let result = BoundaryGeometry::try_from_wkt_str("POINT(1 2)");
        match result {
            Err(MepError::UnsupportedBoundaryGeometry(msg)) => assert!(msg.contains("POINT")),
            other => panic!("expected unsupported geometry error, found {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_wkt() {
        let result = BoundaryGeometry::try_from_wkt_str("POLYGON((0 0, 1 0");
        assert!(matches!(result, Err(MepError::BoundaryParseError { .. })));
    }

    #[test]
    fn test_from_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "not a geometry").expect("write temp file");
        let result = BoundaryGeometry::from_file(file.path());
        match result {
            Err(MepError::BoundaryParseError { filepath, .. }) => {
                assert_eq!(filepath, file.path().to_string_lossy())
            }
            other => panic!("expected parse error, found {other:?}"),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = BoundaryGeometry::from_file(&dir.path().join("missing.wkt"));
        assert!(matches!(result, Err(MepError::BoundaryReadError { .. })));
    }
}
