use crate::error::EncodeResult;
use crate::geometry::Polygon;
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::WriteCursor;
use crate::io::wkb::writer::header::{count_u32, header_size, write_header, WriteContext};
use crate::io::wkb::writer::linestring::{coord_sequence_size, write_coord_sequence};

/// The byte length of a Polygon. Rings have no header of their own.
pub(crate) fn polygon_size(geom: &Polygon, ctx: &WriteContext) -> EncodeResult<usize> {
    let mut sum = header_size(ctx) + 4;
    count_u32(1 + geom.num_interior_rings())?;
    for ring in geom.rings() {
        sum += coord_sequence_size(ring.coords(), ctx)?;
    }
    Ok(sum)
}

/// Write a Polygon: the ring count, then the exterior ring, then each interior ring
pub(crate) fn write_polygon(
    cursor: &mut WriteCursor,
    geom: &Polygon,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    write_header(cursor, GeometryKind::Polygon, ctx)?;
    cursor.write_u32(count_u32(1 + geom.num_interior_rings())?)?;
    for ring in geom.rings() {
        write_coord_sequence(cursor, ring.coords(), ctx)?;
    }
    Ok(())
}
