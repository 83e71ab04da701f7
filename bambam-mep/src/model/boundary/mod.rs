mod boundary_geometry;

pub use boundary_geometry::BoundaryGeometry;
