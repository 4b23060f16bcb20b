use crate::error::EncodeResult;
use crate::geometry::{Coord, Point};
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::WriteCursor;
use crate::io::wkb::writer::header::{header_size, write_header, WriteContext};

/// The byte length of a Point
pub(crate) fn point_size(ctx: &WriteContext) -> usize {
    header_size(ctx) + ctx.coord_size()
}

/// Write one coordinate with the tree dimension.
///
/// Ordinates the coordinate lacks are written as NaN and ordinates beyond the tree dimension are
/// dropped.
pub(crate) fn write_coord(
    cursor: &mut WriteCursor,
    coord: &Coord,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    cursor.write_f64(coord.x)?;
    cursor.write_f64(coord.y)?;
    if ctx.dimension.has_z() {
        cursor.write_f64(coord.z.unwrap_or(f64::NAN))?;
    }
    if ctx.dimension.has_m() {
        cursor.write_f64(coord.m.unwrap_or(f64::NAN))?;
    }
    Ok(())
}

/// Write a Point
pub(crate) fn write_point(
    cursor: &mut WriteCursor,
    geom: &Point,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    write_header(cursor, GeometryKind::Point, ctx)?;
    let empty = Coord::xy(f64::NAN, f64::NAN);
    write_coord(cursor, geom.coord().unwrap_or(&empty), ctx)
}
