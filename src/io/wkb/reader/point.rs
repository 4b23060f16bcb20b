use crate::error::DecodeResult;
use crate::geometry::{Coord, Point};
use crate::io::wkb::cursor::ReadCursor;
use crate::io::wkb::reader::geometry::ReadContext;

/// Read one coordinate: X, Y, then Z and M as the tree dimension requires.
pub(crate) fn read_coord(cursor: &mut ReadCursor, ctx: &ReadContext) -> DecodeResult<Coord> {
    let x = cursor.read_f64()?;
    let y = cursor.read_f64()?;
    let z = if ctx.dimension.has_z() {
        Some(cursor.read_f64()?)
    } else {
        None
    };
    let m = if ctx.dimension.has_m() {
        Some(cursor.read_f64()?)
    } else {
        None
    };
    Ok(Coord { x, y, z, m })
}

/// Read a point body. A point whose X and Y are both NaN is the empty point.
pub(crate) fn read_point(cursor: &mut ReadCursor, ctx: &ReadContext) -> DecodeResult<Point> {
    let coord = read_coord(cursor, ctx)?;
    if coord.is_nan_xy() {
        Ok(Point::empty())
    } else {
        Ok(Point::new(coord))
    }
}
