use crate::error::{DecodeError, DecodeResult};
use crate::geometry::{
    Dimension, Geometry, GeometryCollection, GeometryValue, MultiLineString, MultiPoint,
    MultiPolygon,
};
use crate::io::wkb::common::GeometryKind;
use crate::io::wkb::cursor::ReadCursor;
use crate::io::wkb::reader::header::{
    parse_geometry_type, read_byte_order, read_header, GeometryHeader,
};
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::point::read_point;
use crate::io::wkb::reader::polygon::read_polygon;

/// State established by the root header and handed down to every sub-geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReadContext {
    /// Whether sub-geometry headers are the native one-byte kind tag
    pub native: bool,
    /// The dimension of every coordinate in the tree
    pub dimension: Dimension,
    /// How many collections enclose the geometry being read
    pub depth: usize,
    pub max_depth: usize,
}

impl ReadContext {
    pub(crate) fn new(header: &GeometryHeader, max_depth: usize) -> Self {
        Self {
            native: header.format.is_native(),
            dimension: header.dimension,
            depth: 0,
            max_depth,
        }
    }

    /// The context of a member of the current geometry.
    fn child(&self) -> DecodeResult<Self> {
        let depth = self.depth + 1;
        if depth > self.max_depth {
            return Err(DecodeError::NestingTooDeep(self.max_depth));
        }
        Ok(Self { depth, ..*self })
    }
}

/// Parse a complete geometry blob. The root geometry has to end exactly at the end of the buffer.
pub fn read_geometry(cursor: &mut ReadCursor, max_depth: usize) -> DecodeResult<GeometryValue> {
    let header = read_header(cursor)?;
    log::trace!(
        "decoding {:?} {:?} {:?} srid={}",
        header.format,
        header.kind,
        header.dimension,
        header.srid
    );
    let ctx = ReadContext::new(&header, max_depth);
    let geometry = read_body(cursor, header.kind, &ctx)?;
    let remaining = cursor.remaining();
    if remaining != 0 {
        return Err(DecodeError::TrailingBytes {
            position: cursor.position(),
            remaining,
        });
    }
    Ok(GeometryValue {
        srid: header.srid,
        geometry,
    })
}

/// Read a 4-byte count, rejecting counts that could not fit in the remaining bytes given that
/// each counted item takes at least `min_item_size` bytes.
pub(crate) fn read_count(cursor: &mut ReadCursor, min_item_size: usize) -> DecodeResult<usize> {
    let count = cursor.read_u32()?;
    let remaining = cursor.remaining();
    if u64::from(count) * min_item_size as u64 > remaining {
        return Err(DecodeError::CountTooLarge { count, remaining });
    }
    Ok(count as usize)
}

/// Read the header of a member geometry and return its kind.
///
/// Native members carry only their kind tag. Standard members repeat the byte order and type
/// field; their dimension has to agree with the tree and any SRID they carry is skipped, as
/// members share the root's SRID.
fn read_member_header(cursor: &mut ReadCursor, ctx: &ReadContext) -> DecodeResult<GeometryKind> {
    if ctx.native {
        return GeometryKind::from_tag(cursor.read_u8()?.into());
    }

    read_byte_order(cursor)?;
    let geometry_type = parse_geometry_type(cursor.read_u32()?)?;
    if geometry_type.dimension != ctx.dimension {
        return Err(DecodeError::DimensionMismatch {
            expected: ctx.dimension.size(),
            found: geometry_type.dimension.size(),
        });
    }
    if geometry_type.has_srid {
        cursor.read_i32()?;
    }
    Ok(geometry_type.kind)
}

/// Read the body of a geometry of the given kind.
pub(crate) fn read_body(
    cursor: &mut ReadCursor,
    kind: GeometryKind,
    ctx: &ReadContext,
) -> DecodeResult<Geometry> {
    let geometry: Geometry = match kind {
        GeometryKind::Point => read_point(cursor, ctx)?.into(),
        GeometryKind::LineString => read_line_string(cursor, ctx)?.into(),
        GeometryKind::Polygon => read_polygon(cursor, ctx)?.into(),
        GeometryKind::MultiPoint => {
            MultiPoint::new(read_members(cursor, ctx, GeometryKind::Point, read_point)?).into()
        }
        GeometryKind::MultiLineString => MultiLineString::new(read_members(
            cursor,
            ctx,
            GeometryKind::LineString,
            read_line_string,
        )?)
        .into(),
        GeometryKind::MultiPolygon => {
            MultiPolygon::new(read_members(cursor, ctx, GeometryKind::Polygon, read_polygon)?)
                .into()
        }
        GeometryKind::GeometryCollection => read_geometry_collection(cursor, ctx)?.into(),
    };
    Ok(geometry)
}

/// Read the members of a homogeneous multi-geometry, each of which must be of kind `expected`.
fn read_members<'a, T>(
    cursor: &mut ReadCursor<'a>,
    ctx: &ReadContext,
    expected: GeometryKind,
    read: impl Fn(&mut ReadCursor<'a>, &ReadContext) -> DecodeResult<T>,
) -> DecodeResult<Vec<T>> {
    let child = ctx.child()?;
    let num_geometries = read_count(cursor, 1)?;
    let mut members = Vec::with_capacity(num_geometries);
    for _ in 0..num_geometries {
        let found = read_member_header(cursor, &child)?;
        if found != expected {
            return Err(DecodeError::UnexpectedElementKind { expected, found });
        }
        members.push(read(cursor, &child)?);
    }
    Ok(members)
}

fn read_geometry_collection(
    cursor: &mut ReadCursor,
    ctx: &ReadContext,
) -> DecodeResult<GeometryCollection> {
    let child = ctx.child()?;
    let num_geometries = read_count(cursor, 1)?;
    let mut geometries = Vec::with_capacity(num_geometries);
    for _ in 0..num_geometries {
        let kind = read_member_header(cursor, &child)?;
        geometries.push(read_body(cursor, kind, &child)?);
    }
    Ok(GeometryCollection::new(geometries))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Coord, Point};
    use crate::io::wkb::common::{NO_SRID, WKB_HAS_SRID, WKB_HAS_Z};

    /// Little-endian standard blob builder.
    #[derive(Default)]
    struct Blob(Vec<u8>);

    impl Blob {
        fn u8(mut self, v: u8) -> Self {
            self.0.push(v);
            self
        }

        fn u32(mut self, v: u32) -> Self {
            self.0.extend_from_slice(&v.to_le_bytes());
            self
        }

        fn f64(mut self, v: f64) -> Self {
            self.0.extend_from_slice(&v.to_le_bytes());
            self
        }

        fn header(self, code: u32) -> Self {
            self.u8(1).u32(code)
        }

        fn decode(&self) -> DecodeResult<GeometryValue> {
            read_geometry(&mut ReadCursor::new(&self.0), 64)
        }
    }

    #[test]
    fn multi_point_element_kind_mismatch() {
        let blob = Blob::default()
            .header(4)
            .u32(1)
            .header(2)
            .u32(0);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::UnexpectedElementKind {
                expected: GeometryKind::Point,
                found: GeometryKind::LineString,
            })
        ));
    }

    #[test]
    fn multi_polygon_rejects_collection_element() {
        let blob = Blob::default()
            .header(6)
            .u32(1)
            .header(7)
            .u32(0);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::UnexpectedElementKind {
                expected: GeometryKind::Polygon,
                found: GeometryKind::GeometryCollection,
            })
        ));
    }

    #[test]
    fn ring_not_closed() {
        let blob = Blob::default()
            .header(3)
            .u32(1)
            .u32(3)
            .f64(0.)
            .f64(0.)
            .f64(1.)
            .f64(0.)
            .f64(1.)
            .f64(1.);
        assert!(matches!(blob.decode(), Err(DecodeError::RingNotClosed)));
    }

    #[test]
    fn truncated_coordinates() {
        let blob = Blob::default().header(2).u32(2).f64(0.).f64(0.).f64(1.);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::CountTooLarge {
                count: 2,
                remaining: 24
            })
        ));

        let blob = Blob::default().header(1).f64(0.);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::Truncated {
                position: 13,
                needed: 8
            })
        ));
    }

    #[test]
    fn huge_count_rejected_before_allocation() {
        let blob = Blob::default().header(7).u32(u32::MAX);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::CountTooLarge { .. })
        ));
    }

    #[test]
    fn nesting_too_deep() {
        let mut blob = Blob::default();
        for _ in 0..100 {
            blob = blob.header(7).u32(1);
        }
        let blob = blob.header(7).u32(0);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::NestingTooDeep(64))
        ));
    }

    #[test]
    fn member_dimension_mismatch() {
        let blob = Blob::default()
            .header(4)
            .u32(1)
            .header(1 | WKB_HAS_Z)
            .f64(1.)
            .f64(2.)
            .f64(3.);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn member_srid_is_skipped() {
        let blob = Blob::default()
            .header(7 | WKB_HAS_SRID)
            .u32(4326)
            .u32(1)
            .header(1 | WKB_HAS_SRID)
            .u32(3857)
            .f64(1.)
            .f64(2.);
        let value = blob.decode().unwrap();
        assert_eq!(value.srid, 4326);
        assert_eq!(
            value.geometry,
            Geometry::GeometryCollection(GeometryCollection::new(vec![Point::new(
                Coord::xy(1., 2.)
            )
            .into()]))
        );
    }

    #[test]
    fn mixed_byte_order_members() {
        let mut blob = Blob::default().header(4).u32(2);
        // big-endian member
        blob.0.push(0);
        blob.0.extend_from_slice(&1u32.to_be_bytes());
        blob.0.extend_from_slice(&1f64.to_be_bytes());
        blob.0.extend_from_slice(&2f64.to_be_bytes());
        let blob = blob.header(1).f64(3.).f64(4.);

        let value = blob.decode().unwrap();
        assert_eq!(value.srid, NO_SRID);
        assert_eq!(
            value.geometry,
            Geometry::MultiPoint(MultiPoint::new(vec![
                Point::new(Coord::xy(1., 2.)),
                Point::new(Coord::xy(3., 4.)),
            ]))
        );
    }

    #[test]
    fn nan_point_is_empty() {
        let blob = Blob::default().header(1).f64(f64::NAN).f64(f64::NAN);
        assert_eq!(blob.decode().unwrap().geometry, Point::empty().into());
    }

    #[test]
    fn trailing_bytes_rejected() {
        let blob = Blob::default().header(1).f64(1.).f64(2.).u8(0);
        assert!(matches!(
            blob.decode(),
            Err(DecodeError::TrailingBytes {
                position: 21,
                remaining: 1
            })
        ));
    }

    #[test]
    fn nan_z_ring_is_closed() {
        let mut blob = Blob::default().header(3 | WKB_HAS_Z).u32(1).u32(4);
        for (x, y) in [(0., 0.), (1., 0.), (1., 1.), (0., 0.)] {
            blob = blob.f64(x).f64(y).f64(f64::NAN);
        }
        let Geometry::Polygon(polygon) = blob.decode().unwrap().geometry else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.exterior().num_coords(), 4);
        assert!(polygon.exterior().coords()[0].z.unwrap().is_nan());
    }

    #[test]
    fn empty_polygon() {
        let blob = Blob::default().header(3).u32(0);
        let geometry = blob.decode().unwrap().geometry;
        assert!(geometry.is_empty());
        assert_eq!(geometry.kind(), GeometryKind::Polygon);
    }
}
