use std::path::Path;

use csv::StringRecord;
use h3o::Resolution;
use kdam::tqdm;
use wkt::ToWkt;

use crate::{
    app::{AtomicCsvWriter, RecordSink},
    model::{
        hex::{self, hexes_for_boundary},
        matrix, BoundaryGeometry, MepError,
    },
};

/// writes the h3 cells covering a WKT boundary to a CSV with `grid_id` and
/// `geometry` columns, ordered by cell index. a cell covers the boundary when
/// its centroid lies within it.
pub fn run(
    wkt_boundary_file: &Path,
    output_file: &Path,
    resolution: Resolution,
) -> Result<usize, MepError> {
    let boundary = BoundaryGeometry::from_file(wkt_boundary_file)?;
    let cells = hexes_for_boundary(&boundary, resolution)?;
    log::info!(
        "found {} h3 cells at resolution {} for {} boundary",
        cells.len(),
        resolution,
        boundary.geometry_type()
    );

    let mut writer = AtomicCsvWriter::new(output_file)?;
    let cell_iter = tqdm!(cells.iter(), total = cells.len(), desc = "write hexes");
    write_cells(cell_iter, &mut writer)?;
    eprintln!();
    writer.commit()?;
    Ok(cells.len())
}

fn write_cells<'a, I, S>(cells: I, sink: &mut S) -> Result<(), MepError>
where
    I: Iterator<Item = &'a h3o::CellIndex>,
    S: RecordSink,
{
    sink.write_record(&StringRecord::from(vec![matrix::GRID_ID, matrix::GEOMETRY]))?;
    for cell in cells {
        let geometry = hex::hex_to_polygon(*cell).to_wkt().to_string();
        sink.write_record(&StringRecord::from(vec![cell.to_string(), geometry]))?;
    }
    Ok(())
}
