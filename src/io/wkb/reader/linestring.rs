use crate::error::{DecodeError, DecodeResult};
use crate::geometry::{Coord, LineString, LinearRing};
use crate::io::wkb::cursor::ReadCursor;
use crate::io::wkb::reader::geometry::{read_count, ReadContext};
use crate::io::wkb::reader::point::read_coord;

/// Read a 4-byte point count followed by that many coordinates.
pub(crate) fn read_coord_sequence(
    cursor: &mut ReadCursor,
    ctx: &ReadContext,
) -> DecodeResult<Vec<Coord>> {
    let num_points = read_count(cursor, ctx.dimension.size() * 8)?;
    let mut coords = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        coords.push(read_coord(cursor, ctx)?);
    }
    Ok(coords)
}

pub(crate) fn read_line_string(
    cursor: &mut ReadCursor,
    ctx: &ReadContext,
) -> DecodeResult<LineString> {
    Ok(LineString::new(read_coord_sequence(cursor, ctx)?))
}

/// Read a polygon ring, which has no header of its own.
pub(crate) fn read_linear_ring(
    cursor: &mut ReadCursor,
    ctx: &ReadContext,
) -> DecodeResult<LinearRing> {
    LinearRing::try_new(read_coord_sequence(cursor, ctx)?).ok_or(DecodeError::RingNotClosed)
}
