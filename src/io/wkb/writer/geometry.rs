use crate::error::{EncodeError, EncodeResult};
use crate::geometry::{Coord, Dimension, Geometry, GeometryValue};
use crate::io::wkb::common::{must_embed_srid, FormatDescriptor, FormatType, NATIVE_VERSION};
use crate::io::wkb::cursor::{Endianness, WriteCursor};
use crate::io::wkb::writer::geometrycollection::{
    geometry_collection_size, write_geometry_collection,
};
use crate::io::wkb::writer::header::WriteContext;
use crate::io::wkb::writer::linestring::{line_string_size, write_line_string};
use crate::io::wkb::writer::multilinestring::{multi_line_string_size, write_multi_line_string};
use crate::io::wkb::writer::multipoint::{multi_point_size, write_multi_point};
use crate::io::wkb::writer::multipolygon::{multi_polygon_size, write_multi_polygon};
use crate::io::wkb::writer::point::{point_size, write_point};
use crate::io::wkb::writer::polygon::{polygon_size, write_polygon};

/// The byte length of a Geometry
pub(crate) fn geometry_size(geom: &Geometry, ctx: &WriteContext) -> EncodeResult<usize> {
    match geom {
        Geometry::Point(_) => Ok(point_size(ctx)),
        Geometry::LineString(ls) => line_string_size(ls.coords(), ctx),
        Geometry::LinearRing(lr) => line_string_size(lr.coords(), ctx),
        Geometry::Polygon(p) => polygon_size(p, ctx),
        Geometry::MultiPoint(mp) => multi_point_size(mp, ctx),
        Geometry::MultiLineString(ml) => multi_line_string_size(ml, ctx),
        Geometry::MultiPolygon(mp) => multi_polygon_size(mp, ctx),
        Geometry::GeometryCollection(gc) => geometry_collection_size(gc, ctx),
    }
}

/// Write a Geometry
pub(crate) fn write_geometry(
    cursor: &mut WriteCursor,
    geom: &Geometry,
    ctx: &WriteContext,
) -> EncodeResult<()> {
    match geom {
        Geometry::Point(p) => write_point(cursor, p, ctx),
        Geometry::LineString(ls) => write_line_string(cursor, ls.coords(), ctx),
        Geometry::LinearRing(lr) => write_line_string(cursor, lr.coords(), ctx),
        Geometry::Polygon(p) => write_polygon(cursor, p, ctx),
        Geometry::MultiPoint(mp) => write_multi_point(cursor, mp, ctx),
        Geometry::MultiLineString(ml) => write_multi_line_string(cursor, ml, ctx),
        Geometry::MultiPolygon(mp) => write_multi_polygon(cursor, mp, ctx),
        Geometry::GeometryCollection(gc) => write_geometry_collection(cursor, gc, ctx),
    }
}

/// Encode a geometry tree, or return `None` if it is empty.
///
/// First pass: compute the exact encoded length. Second pass: write into a buffer of exactly
/// that length. Empty members are skipped identically by both passes.
pub fn write_geometry_value(
    value: &GeometryValue,
    format: FormatDescriptor,
    byte_order: Endianness,
    max_depth: usize,
) -> EncodeResult<Option<Vec<u8>>> {
    match format.format_type {
        FormatType::NativeRaster => return Err(EncodeError::UnsupportedRaster),
        FormatType::NativeVectorial if format.version != NATIVE_VERSION => {
            return Err(EncodeError::UnsupportedVersion(format.version))
        }
        _ => {}
    }

    let geom = &value.geometry;
    if geom.is_empty() {
        log::debug!("skipping empty {:?}", geom.kind());
        return Ok(None);
    }

    if geom.any_coord(&|c: &Coord| c.dim() == Dimension::Xym) {
        return Err(EncodeError::UnsupportedXym);
    }
    let dimension = geom.dimension();

    let srid = must_embed_srid(value.srid, format.format_type).then_some(value.srid);
    let ctx = WriteContext::root(
        format.format_type,
        format.version,
        dimension,
        srid,
        max_depth,
    );

    let size = geometry_size(geom, &ctx)?;
    log::trace!(
        "encoding {:?} as {:?} {:?}: {} bytes",
        geom.kind(),
        format.format_type,
        dimension,
        size
    );

    let mut cursor = WriteCursor::with_len(size, byte_order);
    write_geometry(&mut cursor, geom, &ctx)?;
    finish(cursor, size).map(Some)
}

/// Hand out the written buffer once the write pass has filled exactly `expected` bytes.
fn finish(cursor: WriteCursor, expected: usize) -> EncodeResult<Vec<u8>> {
    debug_assert_eq!(
        cursor.position(),
        expected,
        "size pass and write pass disagree"
    );
    check_written(&cursor, expected)?;
    Ok(cursor.into_inner())
}

/// Verify that the write pass filled exactly the bytes the size pass computed.
pub(crate) fn check_written(cursor: &WriteCursor, expected: usize) -> EncodeResult<()> {
    let written = cursor.position();
    if written != expected || cursor.capacity() != expected {
        log::error!("size pass computed {expected} bytes but {written} were written");
        return Err(EncodeError::SizeMismatch { expected, written });
    }
    Ok(())
}
