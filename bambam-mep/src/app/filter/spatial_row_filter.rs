use csv::StringRecord;
use wkt::ToWkt;

use crate::{
    app::{filter::FilterSummary, RecordSink},
    model::{
        hex,
        matrix::{self, MatrixHeader, MatrixRow},
        BoundaryGeometry, MepError,
    },
};

/// selects the matrix rows whose h3 cell polygon lies entirely within a
/// boundary and tags them with that polygon as a WKT `geometry` column.
///
/// cells that only partially overlap the boundary are dropped. row membership
/// depends only on the row's `grid_id`, never on how the matrix was chunked.
pub struct SpatialRowFilter {
    boundary: BoundaryGeometry,
    grid_id_index: usize,
    geometry_index: usize,
    output_header: MatrixHeader,
}

impl SpatialRowFilter {
    /// sets up a filter for a matrix with the given header. fails if the matrix
    /// named by `filepath` has no `grid_id` column.
    pub fn new(
        boundary: BoundaryGeometry,
        input_header: &MatrixHeader,
        filepath: &str,
    ) -> Result<Self, MepError> {
        let grid_id_index = input_header.require(matrix::GRID_ID, filepath)?;
        let (output_header, geometry_index) = input_header.with_column(matrix::GEOMETRY);
        Ok(Self {
            boundary,
            grid_id_index,
            geometry_index,
            output_header,
        })
    }

    pub fn output_header(&self) -> &MatrixHeader {
        &self.output_header
    }

    /// tests a single row. returns the output record if the row is retained.
    pub fn filter_row(&self, row: &MatrixRow) -> Result<Option<StringRecord>, MepError> {
        let grid_id = row.get(self.grid_id_index, matrix::GRID_ID)?;
        let cell = hex::parse_cell(grid_id, row.position)?;
        let polygon = hex::hex_to_polygon(cell);
        if self.boundary.contains(&polygon) {
            let geometry = polygon.to_wkt().to_string();
            Ok(Some(row.with_field(self.geometry_index, &geometry)))
        } else {
            Ok(None)
        }
    }

    /// retained rows of one chunk, in input order.
    pub fn filter_chunk(&self, chunk: &[MatrixRow]) -> Result<Vec<StringRecord>, MepError> {
        let mut retained = vec![];
        for row in chunk.iter() {
            if let Some(record) = self.filter_row(row)? {
                retained.push(record);
            }
        }
        Ok(retained)
    }

    /// writes the output header followed by the retained rows of each chunk.
    /// rows are written as each chunk completes, so at most one chunk is held
    /// in memory.
    pub fn filter_rows<I, S>(&self, chunks: I, sink: &mut S) -> Result<FilterSummary, MepError>
    where
        I: IntoIterator<Item = Result<Vec<MatrixRow>, MepError>>,
        S: RecordSink,
    {
        sink.write_record(self.output_header.record())?;
        let mut summary = FilterSummary::default();
        for chunk_result in chunks {
            let chunk = chunk_result?;
            let retained = self.filter_chunk(&chunk)?;
            for record in retained.iter() {
                sink.write_record(record)?;
            }
            summary.add_chunk(chunk.len(), retained.len());
            log::debug!(
                "chunk {}: retained {}/{} rows",
                summary.chunks,
                retained.len(),
                chunk.len()
            );
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::SpatialRowFilter;
    use crate::model::{
        hex::hex_to_polygon,
        matrix::{MatrixHeader, MatrixReader, MatrixRow},
        BoundaryGeometry, MepError,
    };
    use csv::StringRecord;
    use geo::{BoundingRect, Centroid};
    use h3o::{CellIndex, LatLng, Resolution};
    use itertools::Itertools;
    use wkt::ToWkt;

    fn cell_at(lat: f64, lng: f64) -> CellIndex {
        LatLng::new(lat, lng)
            .expect("valid coordinate")
            .to_cell(Resolution::Eight)
    }

    /// a square boundary around the cell, padded by `pad` degrees
    fn square_around(cell: CellIndex, pad: f64) -> BoundaryGeometry {
        let rect = hex_to_polygon(cell)
            .bounding_rect()
            .expect("cell has extent");
        let (x0, y0) = (rect.min().x - pad, rect.min().y - pad);
        let (x1, y1) = (rect.max().x + pad, rect.max().y + pad);
        let wkt = format!("POLYGON(({x0} {y0}, {x1} {y0}, {x1} {y1}, {x0} {y1}, {x0} {y0}))");
        BoundaryGeometry::try_from_wkt_str(&wkt).expect("valid wkt")
    }

    fn run_filter(
        boundary: BoundaryGeometry,
        matrix: &str,
        chunksize: usize,
    ) -> Result<Vec<StringRecord>, MepError> {
        let reader = MatrixReader::new(matrix.as_bytes(), "test")?;
        let filter = SpatialRowFilter::new(boundary, reader.header(), "test")?;
        let mut sink: Vec<StringRecord> = vec![];
        filter.filter_rows(reader.chunks(chunksize)?, &mut sink)?;
        Ok(sink)
    }

    #[test]
    fn test_two_rows_one_inside_chunksize_one() {
        let h1 = cell_at(39.7392, -104.9903);
        let h2 = cell_at(40.7128, -74.0060);
        let boundary = square_around(h1, 0.01);
        let matrix = format!("grid_id,pop\n{h1},10\n{h2},20\n");

        let result = run_filter(boundary, &matrix, 1).expect("filter should succeed");
        let expected_geometry = hex_to_polygon(h1).to_wkt().to_string();
        assert_eq!(
            result,
            vec![
                StringRecord::from(vec!["grid_id", "pop", "geometry"]),
                StringRecord::from(vec![h1.to_string(), String::from("10"), expected_geometry]),
            ]
        );
    }

    #[test]
    fn test_straddling_cell_excluded() {
        let cell = cell_at(39.7392, -104.9903);
        let polygon = hex_to_polygon(cell);
        let center = polygon.centroid().expect("cell has centroid");
        let rect = polygon.bounding_rect().expect("cell has extent");
        // boundary covers the western half of the cell only
        let (x0, y0) = (rect.min().x - 0.1, rect.min().y - 0.1);
        let (x1, y1) = (center.x(), rect.max().y + 0.1);
        let wkt = format!("POLYGON(({x0} {y0}, {x1} {y0}, {x1} {y1}, {x0} {y1}, {x0} {y0}))");
        let boundary = BoundaryGeometry::try_from_wkt_str(&wkt).expect("valid wkt");

        let matrix = format!("grid_id,pop\n{cell},1\n");
        let result = run_filter(boundary, &matrix, 10).expect("filter should succeed");
        assert_eq!(result.len(), 1, "only the header should be written");
    }

    #[test]
    fn test_chunksize_does_not_change_result() {
        let origin = cell_at(39.7392, -104.9903);
        let boundary = square_around(origin, 0.001);
        let cells = origin
            .grid_disk::<Vec<_>>(3)
            .into_iter()
            .sorted()
            .collect_vec();
        let matrix = std::iter::once(String::from("grid_id,pop"))
            .chain(cells.iter().enumerate().map(|(i, c)| format!("{c},{i}")))
            .join("\n");

        let baseline = run_filter(boundary.clone(), &matrix, 1000).expect("filter should succeed");
        assert!(baseline.len() > 1, "origin cell should be retained");
        for chunksize in [1, 2, 3, 7, cells.len()] {
            let result =
                run_filter(boundary.clone(), &matrix, chunksize).expect("filter should succeed");
            assert_eq!(result, baseline, "chunksize {chunksize} changed the result");
        }
    }

    #[test]
    fn test_containing_boundary_is_identity_plus_geometry() {
        let origin = cell_at(39.7392, -104.9903);
        let boundary = BoundaryGeometry::try_from_wkt_str(
            "POLYGON((-106 39, -104 39, -104 41, -106 41, -106 39))",
        )
        .expect("valid wkt");
        let cells = origin.grid_disk::<Vec<_>>(2);
        let matrix = std::iter::once(String::from("grid_id,pop,mode"))
            .chain(cells.iter().map(|c| format!("{c},5,walk")))
            .join("\n");
        let result = run_filter(boundary, &matrix, 4).expect("filter should succeed");
        assert_eq!(result.len(), cells.len() + 1);
        for (record, cell) in result.iter().skip(1).zip(cells.iter()) {
            assert_eq!(record.get(0), Some(cell.to_string().as_str()));
            assert_eq!(record.get(1), Some("5"));
            assert_eq!(record.get(2), Some("walk"));
            assert!(record.get(3).unwrap_or_default().starts_with("POLYGON"));
        }
    }

    #[test]
    fn test_existing_geometry_column_overwritten() {
        let cell = cell_at(39.7392, -104.9903);
        let boundary = square_around(cell, 0.01);
        let matrix = format!("geometry,grid_id\nPOINT(0 0),{cell}\n");
        let result = run_filter(boundary, &matrix, 10).expect("filter should succeed");
        assert_eq!(result[0], StringRecord::from(vec!["geometry", "grid_id"]));
        assert_eq!(
            result[1].get(0),
            Some(hex_to_polygon(cell).to_wkt().to_string().as_str())
        );
    }

    #[test]
    fn test_missing_grid_id_column() {
        let reader = MatrixReader::new("h3,pop\n".as_bytes(), "matrix.csv").expect("valid csv");
        let boundary = BoundaryGeometry::try_from_wkt_str("POLYGON((0 0, 1 0, 1 1, 0 0))")
            .expect("valid wkt");
        let result = SpatialRowFilter::new(boundary, reader.header(), "matrix.csv");
        assert!(matches!(result, Err(MepError::MissingColumn { .. })));
    }

    #[test]
    fn test_invalid_hex_aborts() {
        let cell = cell_at(39.7392, -104.9903);
        let boundary = square_around(cell, 0.01);
        let matrix = format!("grid_id,pop\n{cell},1\nzzz,2\n");
        match run_filter(boundary, &matrix, 1) {
            Err(MepError::InvalidHexCell { row, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "zzz");
            }
            other => panic!("expected invalid hex error, found {other:?}"),
        }
    }

    #[test]
    fn test_filter_row_single() {
        let cell = cell_at(39.7392, -104.9903);
        let header = MatrixHeader::new(StringRecord::from(vec!["grid_id"]));
        let filter = SpatialRowFilter::new(square_around(cell, 0.01), &header, "test")
            .expect("header has grid_id");
        let row = MatrixRow::new(0, StringRecord::from(vec![cell.to_string()]));
        let record = filter
            .filter_row(&row)
            .expect("valid row")
            .expect("row should be retained");
        assert_eq!(record.len(), 2);
    }
}
