//! Wire-format constants shared by the reader and the writer.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};

/// The "no SRID" sentinel. Never written to the wire.
pub const NO_SRID: i32 = -1;

/// Native header byte 0: set for the native dialect.
pub const NATIVE_MARKER: u8 = 0x08;
/// Native header byte 0, after removing [NATIVE_MARKER]: little-endian.
pub const NATIVE_LITTLE_ENDIAN: u8 = 0x01;
/// Native header byte 1: format version.
pub const NATIVE_VERSION_MASK: u8 = 0x1F;
/// Native header byte 1: vectorial payload. Clear for raster.
pub const NATIVE_VECTORIAL: u8 = 0x20;
/// Native header byte 2 (version 0).
pub const NATIVE_HAS_Z: u8 = 0x01;
pub const NATIVE_HAS_M: u8 = 0x02;
pub const NATIVE_HAS_SRID: u8 = 0x80;

/// The only native format version.
pub const NATIVE_VERSION: u8 = 0;

/// Standard-dialect type field flags.
pub const WKB_HAS_Z: u32 = 0x8000_0000;
pub const WKB_HAS_M: u32 = 0x4000_0000;
pub const WKB_HAS_SRID: u32 = 0x2000_0000;
/// Bits of the standard-dialect type field left once the flags are removed.
pub const WKB_TYPE_MASK: u32 = 0x1FFF_FFFF;

/// The geometry kind tags, shared by every dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryKind {
    /// Parse a kind tag read from the wire.
    pub fn from_tag(tag: u32) -> DecodeResult<Self> {
        u8::try_from(tag)
            .ok()
            .and_then(|t| Self::try_from_primitive(t).ok())
            .ok_or(DecodeError::UnknownGeometryKind(tag))
    }

    /// The kind of each element of a homogeneous multi-geometry.
    pub fn element_kind(&self) -> Option<GeometryKind> {
        match self {
            GeometryKind::MultiPoint => Some(GeometryKind::Point),
            GeometryKind::MultiLineString => Some(GeometryKind::LineString),
            GeometryKind::MultiPolygon => Some(GeometryKind::Polygon),
            _ => None,
        }
    }
}

/// The wire dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatType {
    /// The native dialect with a vector payload
    NativeVectorial,
    /// The native dialect with a raster payload. Recognised but not supported.
    NativeRaster,
    /// Standard well-known binary
    Wkb,
    /// Standard well-known binary with an embedded SRID
    Ewkb,
}

impl FormatType {
    pub fn is_native(&self) -> bool {
        is_native_dialect(*self)
    }
}

/// A dialect and version pair.
///
/// The version selects the native header layout; it is carried but not interpreted for the
/// standard dialects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub format_type: FormatType,
    pub version: u8,
}

impl FormatDescriptor {
    pub fn new(format_type: FormatType, version: u8) -> Self {
        Self {
            format_type,
            version,
        }
    }

    pub fn native() -> Self {
        Self::new(FormatType::NativeVectorial, NATIVE_VERSION)
    }

    pub fn wkb() -> Self {
        Self::new(FormatType::Wkb, 0)
    }

    pub fn ewkb() -> Self {
        Self::new(FormatType::Ewkb, 0)
    }
}

/// Whether `format` is one of the native sub-kinds.
pub fn is_native_dialect(format: FormatType) -> bool {
    matches!(format, FormatType::NativeVectorial | FormatType::NativeRaster)
}

/// Whether `srid` has to be written for `format`.
pub fn must_embed_srid(srid: i32, format: FormatType) -> bool {
    matches!(format, FormatType::NativeVectorial | FormatType::Ewkb) && srid != NO_SRID
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_tags() {
        assert_eq!(u8::from(GeometryKind::Point), 1);
        assert_eq!(u8::from(GeometryKind::GeometryCollection), 7);
        assert_eq!(GeometryKind::from_tag(3).unwrap(), GeometryKind::Polygon);
        assert!(matches!(
            GeometryKind::from_tag(8),
            Err(DecodeError::UnknownGeometryKind(8))
        ));
        assert!(matches!(
            GeometryKind::from_tag(0x101),
            Err(DecodeError::UnknownGeometryKind(0x101))
        ));
    }

    #[test]
    fn native_dialects() {
        assert!(is_native_dialect(FormatType::NativeVectorial));
        assert!(is_native_dialect(FormatType::NativeRaster));
        assert!(!is_native_dialect(FormatType::Wkb));
        assert!(!is_native_dialect(FormatType::Ewkb));
    }

    #[test]
    fn srid_embedding() {
        assert!(must_embed_srid(4326, FormatType::NativeVectorial));
        assert!(must_embed_srid(4326, FormatType::Ewkb));
        assert!(!must_embed_srid(4326, FormatType::Wkb));
        assert!(!must_embed_srid(4326, FormatType::NativeRaster));
        assert!(!must_embed_srid(NO_SRID, FormatType::Ewkb));
        assert!(!must_embed_srid(NO_SRID, FormatType::NativeVectorial));
        assert!(must_embed_srid(0, FormatType::Ewkb));
    }
}
