use crate::error::{DecodeError, DecodeResult};
use crate::geometry::Dimension;
use crate::io::wkb::common::{
    FormatType, GeometryKind, NATIVE_HAS_M, NATIVE_HAS_SRID, NATIVE_HAS_Z, NATIVE_VECTORIAL,
    NATIVE_VERSION, NATIVE_VERSION_MASK, NO_SRID, WKB_HAS_M, WKB_HAS_SRID, WKB_HAS_Z,
    WKB_TYPE_MASK,
};
use crate::io::wkb::cursor::{Endianness, ReadCursor};

/// The root header of a geometry blob.
///
/// Parsing a header reads a handful of bytes and never touches the geometry body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryHeader {
    /// The dialect the blob is written in
    pub format: FormatType,
    /// The native format version, or 0 for the standard dialects
    pub version: u8,
    /// The byte order of the root geometry
    pub byte_order: Endianness,
    /// The root SRID, or [NO_SRID]
    pub srid: i32,
    /// The dimension of every coordinate in the tree
    pub dimension: Dimension,
    /// The kind of the root geometry
    pub kind: GeometryKind,
}

/// Parse the root header, leaving the cursor at the start of the root geometry's body.
pub fn read_header(cursor: &mut ReadCursor) -> DecodeResult<GeometryHeader> {
    if cursor.read_header_byte()? {
        read_native_header(cursor)
    } else {
        cursor.push_back();
        read_standard_header(cursor)
    }
}

/// Bytes 1 and 2 of the native header, then the optional SRID and the root kind tag.
fn read_native_header(cursor: &mut ReadCursor) -> DecodeResult<GeometryHeader> {
    let byte_order = cursor.byte_order().ok_or(DecodeError::ByteOrderUnknown)?;

    let format_byte = cursor.read_u8()?;
    if format_byte & NATIVE_VECTORIAL == 0 {
        return Err(DecodeError::UnsupportedRaster);
    }
    let version = format_byte & NATIVE_VERSION_MASK;
    if version != NATIVE_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let flags = cursor.read_u8()?;
    let dimension = checked_dimension(flags & NATIVE_HAS_Z != 0, flags & NATIVE_HAS_M != 0)?;
    let srid = if flags & NATIVE_HAS_SRID != 0 {
        cursor.read_i32()?
    } else {
        NO_SRID
    };

    let kind = GeometryKind::from_tag(cursor.read_u8()?.into())?;

    Ok(GeometryHeader {
        format: FormatType::NativeVectorial,
        version,
        byte_order,
        srid,
        dimension,
        kind,
    })
}

fn read_standard_header(cursor: &mut ReadCursor) -> DecodeResult<GeometryHeader> {
    let byte_order = read_byte_order(cursor)?;
    let geometry_type = parse_geometry_type(cursor.read_u32()?)?;
    let (format, srid) = if geometry_type.has_srid {
        (FormatType::Ewkb, cursor.read_i32()?)
    } else {
        (FormatType::Wkb, NO_SRID)
    };

    Ok(GeometryHeader {
        format,
        version: 0,
        byte_order,
        srid,
        dimension: geometry_type.dimension,
        kind: geometry_type.kind,
    })
}

/// Read a standard byte order marker and switch the cursor to it.
pub(crate) fn read_byte_order(cursor: &mut ReadCursor) -> DecodeResult<Endianness> {
    let byte_order = Endianness::try_from(cursor.read_u8()?)?;
    cursor.set_byte_order(byte_order);
    Ok(byte_order)
}

/// The decoded standard-dialect type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GeometryType {
    pub kind: GeometryKind,
    pub dimension: Dimension,
    pub has_srid: bool,
}

/// Split a standard type field into kind, dimension and SRID flag.
///
/// Both the extended flag bits and ISO codes (kind + 1000 × dimension code) are understood.
pub(crate) fn parse_geometry_type(code: u32) -> DecodeResult<GeometryType> {
    let has_srid = code & WKB_HAS_SRID != 0;
    let base = code & WKB_TYPE_MASK;

    let (iso_z, iso_m) = match base / 1000 {
        0 => (false, false),
        1 => (true, false),
        2 => (false, true),
        3 => (true, true),
        _ => return Err(DecodeError::UnknownGeometryKind(base)),
    };
    let dimension = checked_dimension(
        code & WKB_HAS_Z != 0 || iso_z,
        code & WKB_HAS_M != 0 || iso_m,
    )?;
    let kind = GeometryKind::from_tag(base % 1000)?;

    Ok(GeometryType {
        kind,
        dimension,
        has_srid,
    })
}

fn checked_dimension(has_z: bool, has_m: bool) -> DecodeResult<Dimension> {
    match Dimension::from_flags(has_z, has_m) {
        Dimension::Xym => Err(DecodeError::UnsupportedXym),
        dimension => Ok(dimension),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn header(buf: &[u8]) -> DecodeResult<GeometryHeader> {
        read_header(&mut ReadCursor::new(buf))
    }

    #[test]
    fn native_header() {
        // little-endian, version 0 vectorial, Z + SRID, SRID 4326, point
        let buf = [0x09, 0x20, 0x81, 0xE6, 0x10, 0x00, 0x00, 0x01];
        let header = header(&buf).unwrap();
        assert_eq!(header.format, FormatType::NativeVectorial);
        assert_eq!(header.byte_order, Endianness::LittleEndian);
        assert_eq!(header.srid, 4326);
        assert_eq!(header.dimension, Dimension::Xyz);
        assert_eq!(header.kind, GeometryKind::Point);
    }

    #[test]
    fn native_header_big_endian_without_srid() {
        let buf = [0x08, 0x20, 0x03, 0x06];
        let header = header(&buf).unwrap();
        assert_eq!(header.byte_order, Endianness::BigEndian);
        assert_eq!(header.srid, NO_SRID);
        assert_eq!(header.dimension, Dimension::Xyzm);
        assert_eq!(header.kind, GeometryKind::MultiPolygon);
    }

    #[test]
    fn native_raster_rejected() {
        assert!(matches!(
            header(&[0x09, 0x00, 0x00, 0x01]),
            Err(DecodeError::UnsupportedRaster)
        ));
    }

    #[test]
    fn native_version_rejected() {
        assert!(matches!(
            header(&[0x09, 0x21, 0x00, 0x01]),
            Err(DecodeError::UnsupportedVersion(1))
        ));
    }

    #[test]
    fn native_xym_rejected() {
        assert!(matches!(
            header(&[0x09, 0x20, 0x02, 0x01]),
            Err(DecodeError::UnsupportedXym)
        ));
    }

    #[test]
    fn standard_header_with_srid() {
        // big-endian, point | SRID flag, SRID 4326
        let buf = [0x00, 0x20, 0x00, 0x00, 0x01, 0x00, 0x00, 0x10, 0xE6];
        let header = header(&buf).unwrap();
        assert_eq!(header.format, FormatType::Ewkb);
        assert_eq!(header.byte_order, Endianness::BigEndian);
        assert_eq!(header.srid, 4326);
        assert_eq!(header.dimension, Dimension::Xy);
        assert_eq!(header.kind, GeometryKind::Point);
    }

    #[test]
    fn standard_header_invalid_byte_order() {
        assert!(matches!(
            header(&[0x02, 0x01, 0x00, 0x00, 0x00]),
            Err(DecodeError::InvalidByteOrder(2))
        ));
    }

    #[test]
    fn geometry_type_flags() {
        let t = parse_geometry_type(WKB_HAS_Z | WKB_HAS_M | 3).unwrap();
        assert_eq!(t.kind, GeometryKind::Polygon);
        assert_eq!(t.dimension, Dimension::Xyzm);
        assert!(!t.has_srid);

        assert!(matches!(
            parse_geometry_type(WKB_HAS_M | 1),
            Err(DecodeError::UnsupportedXym)
        ));
        assert!(matches!(
            parse_geometry_type(9),
            Err(DecodeError::UnknownGeometryKind(9))
        ));
    }

    #[test]
    fn iso_geometry_type_codes() {
        assert_eq!(
            parse_geometry_type(1002).unwrap().dimension,
            Dimension::Xyz
        );
        assert_eq!(
            parse_geometry_type(3007).unwrap().kind,
            GeometryKind::GeometryCollection
        );
        assert!(matches!(
            parse_geometry_type(2001),
            Err(DecodeError::UnsupportedXym)
        ));
    }

    #[test]
    fn truncated_header() {
        assert!(matches!(
            header(&[0x01, 0x01, 0x00]),
            Err(DecodeError::Truncated { position: 1, .. })
        ));
        assert!(matches!(
            header(&[]),
            Err(DecodeError::Truncated { position: 0, .. })
        ));
    }
}
