use crate::error::EncodeResult;
use crate::geometry::MultiLineString;
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::WriteCursor;
use crate::io::wkb::writer::header::{count_u32, header_size, write_header, WriteContext};
use crate::io::wkb::writer::linestring::{line_string_size, write_line_string};

/// The byte length of a MultiLineString. Empty line strings are skipped.
pub(crate) fn multi_line_string_size(
    geom: &MultiLineString,
    ctx: &WriteContext,
) -> EncodeResult<usize> {
    let child = ctx.child()?;
    let mut sum = header_size(ctx) + 4;
    let mut num_line_strings = 0;
    for line_string in geom.iter().filter(|l| !l.is_empty()) {
        sum += line_string_size(line_string.coords(), &child)?;
        num_line_strings += 1;
    }
    count_u32(num_line_strings)?;
    Ok(sum)
}

/// Write a MultiLineString, skipping empty line strings
pub(crate) fn write_multi_line_string(
    cursor: &mut WriteCursor,
    geom: &MultiLineString,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    let child = ctx.child()?;
    write_header(cursor, GeometryKind::MultiLineString, ctx)?;
    let num_line_strings = geom.iter().filter(|l| !l.is_empty()).count();
    cursor.write_u32(count_u32(num_line_strings)?)?;
    for line_string in geom.iter().filter(|l| !l.is_empty()) {
        write_line_string(cursor, line_string.coords(), &child)?;
    }
    Ok(())
}
