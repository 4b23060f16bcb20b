use crate::error::EncodeResult;
use crate::geometry::Coord;
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::WriteCursor;
use crate::io::wkb::writer::header::{count_u32, header_size, write_header, WriteContext};
use crate::io::wkb::writer::point::write_coord;

/// The byte length of a point count followed by `coords`
pub(crate) fn coord_sequence_size(coords: &[Coord], ctx: &WriteContext) -> EncodeResult<usize> {
    count_u32(coords.len())?;
    Ok(4 + coords.len() * ctx.coord_size())
}

/// Write a point count followed by `coords`
pub(crate) fn write_coord_sequence(
    cursor: &mut WriteCursor,
    coords: &[Coord],
    ctx: &WriteContext,
) -> EncodeResult<()> {
    cursor.write_u32(count_u32(coords.len())?)?;
    for coord in coords {
        write_coord(cursor, coord, ctx)?;
    }
    Ok(())
}

/// The byte length of a LineString
pub(crate) fn line_string_size(coords: &[Coord], ctx: &WriteContext) -> EncodeResult<usize> {
    Ok(header_size(ctx) + coord_sequence_size(coords, ctx)?)
}

/// Write a LineString. Linear rings are written through here too.
pub(crate) fn write_line_string(
    cursor: &mut WriteCursor,
    coords: &[Coord],
    ctx: &WriteContext,
) -> EncodeResult<()> {
    write_header(cursor, GeometryKind::LineString, ctx)?;
    write_coord_sequence(cursor, coords, ctx)
}
