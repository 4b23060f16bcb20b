use crate::error::EncodeResult;
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::WriteCursor;
use crate::io::wkb::writer::header::{count_u32, header_size, write_header, WriteContext};
use crate::io::wkb::writer::polygon::{polygon_size, write_polygon};

/// The byte length of a MultiPolygon. Empty polygons are skipped.
pub(crate) fn multi_polygon_size(geom: &MultiPolygon, ctx: &WriteContext) -> EncodeResult<usize> {
    let child = ctx.child()?;
    let mut sum = header_size(ctx) + 4;
    let mut num_polygons = 0;
    for polygon in geom.iter().filter(|p| !p.is_empty()) {
        sum += polygon_size(polygon, &child)?;
        num_polygons += 1;
    }
    count_u32(num_polygons)?;
    Ok(sum)
}

/// Write a MultiPolygon, skipping empty polygons
pub(crate) fn write_multi_polygon(
    cursor: &mut WriteCursor,
    geom: &MultiPolygon,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    let child = ctx.child()?;
    write_header(cursor, GeometryKind::MultiPolygon, ctx)?;
    let num_polygons = geom.iter().filter(|p| !p.is_empty()).count();
    cursor.write_u32(count_u32(num_polygons)?)?;
    for polygon in geom.iter().filter(|p| !p.is_empty()) {
        write_polygon(cursor, polygon, &child)?;
    }
    Ok(())
}
