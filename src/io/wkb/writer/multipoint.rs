use crate::error::EncodeResult;
use crate::geometry::MultiPoint;
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::WriteCursor;
use crate::io::wkb::writer::header::{count_u32, header_size, write_header, WriteContext};
use crate::io::wkb::writer::point::{point_size, write_point};

/// The byte length of a MultiPoint. Empty points are skipped.
pub(crate) fn multi_point_size(geom: &MultiPoint, ctx: &WriteContext) -> EncodeResult<usize> {
    let child = ctx.child()?;
    let num_points = geom.iter().filter(|p| !p.is_empty()).count();
    count_u32(num_points)?;
    Ok(header_size(ctx) + 4 + num_points * point_size(&child))
}

/// Write a MultiPoint, skipping empty points
pub(crate) fn write_multi_point(
    cursor: &mut WriteCursor,
    geom: &MultiPoint,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    let child = ctx.child()?;
    write_header(cursor, GeometryKind::MultiPoint, ctx)?;
    let num_points = geom.iter().filter(|p| !p.is_empty()).count();
    cursor.write_u32(count_u32(num_points)?)?;
    for point in geom.iter().filter(|p| !p.is_empty()) {
        write_point(cursor, point, &child)?;
    }
    Ok(())
}
