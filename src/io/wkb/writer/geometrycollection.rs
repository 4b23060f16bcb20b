use crate::error::EncodeResult;
use crate::geometry::GeometryCollection;
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::WriteCursor;
use crate::io::wkb::writer::geometry::{geometry_size, write_geometry};
use crate::io::wkb::writer::header::{count_u32, header_size, write_header, WriteContext};

/// The byte length of a GeometryCollection. Empty members are skipped.
pub(crate) fn geometry_collection_size(
    geom: &GeometryCollection,
    ctx: &WriteContext,
) -> EncodeResult<usize> {
    let child = ctx.child()?;
    let mut sum = header_size(ctx) + 4;
    let mut num_geometries = 0;
    for inner_geom in geom.iter().filter(|g| !g.is_empty()) {
        sum += geometry_size(inner_geom, &child)?;
        num_geometries += 1;
    }
    count_u32(num_geometries)?;
    Ok(sum)
}

/// Write a GeometryCollection, skipping empty members
pub(crate) fn write_geometry_collection(
    cursor: &mut WriteCursor,
    geom: &GeometryCollection,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    let child = ctx.child()?;
    write_header(cursor, GeometryKind::GeometryCollection, ctx)?;
    let num_geometries = geom.iter().filter(|g| !g.is_empty()).count();
    cursor.write_u32(count_u32(num_geometries)?)?;
    for inner_geom in geom.iter().filter(|g| !g.is_empty()) {
        write_geometry(cursor, inner_geom, &child)?;
    }
    Ok(())
}
