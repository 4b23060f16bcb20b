use crate::error::DecodeResult;
use crate::geometry::Polygon;
use crate::io::wkb::cursor::ReadCursor;
use crate::io::wkb::reader::geometry::{read_count, ReadContext};
use crate::io::wkb::reader::linestring::read_linear_ring;

/// Read a 4-byte ring count and the rings. The first ring is the exterior.
pub(crate) fn read_polygon(cursor: &mut ReadCursor, ctx: &ReadContext) -> DecodeResult<Polygon> {
    let num_rings = read_count(cursor, 4)?;
    if num_rings == 0 {
        return Ok(Polygon::empty());
    }

    let exterior = read_linear_ring(cursor, ctx)?;
    let mut interiors = Vec::with_capacity(num_rings - 1);
    for _ in 1..num_rings {
        interiors.push(read_linear_ring(cursor, ctx)?);
    }
    Ok(Polygon::new(exterior, interiors))
}
