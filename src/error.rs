//! Defines [`DecodeError`], [`EncodeError`] and [`GeoBlobError`], representing all errors
//! returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::io::wkb::common::GeometryKind;

/// Errors raised while decoding a geometry blob.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The buffer ended before the value being read.
    #[error("Truncated buffer: needed {needed} more byte(s) at offset {position}")]
    Truncated {
        /// Offset of the read that failed
        position: u64,
        /// Bytes the read required
        needed: usize,
    },

    /// A standard-dialect byte order marker other than 0 or 1.
    #[error("Invalid byte order marker: {0:#04x}")]
    InvalidByteOrder(u8),

    /// A multi-byte read was attempted before the header established the byte order.
    #[error("Byte order not yet established")]
    ByteOrderUnknown,

    /// The native header describes a raster payload.
    #[error("Unsupported format: raster payloads are not supported")]
    UnsupportedRaster,

    /// The native header carries a version this crate cannot read.
    #[error("Unsupported native format version: {0}")]
    UnsupportedVersion(u8),

    /// Coordinates with a measure but no Z ordinate.
    #[error("Unsupported dimensionality: XYM coordinates are not supported")]
    UnsupportedXym,

    /// A geometry kind tag outside 1..=7.
    #[error("Unknown geometry kind tag: {0}")]
    UnknownGeometryKind(u32),

    /// An element of a homogeneous multi-geometry was not of the element kind.
    #[error("Expected {expected:?} element, found {found:?}")]
    UnexpectedElementKind {
        /// The element kind the container requires
        expected: GeometryKind,
        /// The kind that was decoded
        found: GeometryKind,
    },

    /// A polygon ring whose first and last coordinates differ.
    #[error("Polygon ring is not closed")]
    RingNotClosed,

    /// A standard-dialect sub-geometry declaring a different dimensionality than its root.
    #[error("Sub-geometry has {found} ordinates but the geometry tree has {expected}")]
    DimensionMismatch {
        /// Ordinates per coordinate established by the root
        expected: usize,
        /// Ordinates per coordinate declared by the sub-geometry
        found: usize,
    },

    /// An element count larger than the bytes left in the buffer could hold.
    #[error("Element count {count} exceeds the {remaining} byte(s) remaining")]
    CountTooLarge {
        /// The count read from the buffer
        count: u32,
        /// Bytes left after the count
        remaining: u64,
    },

    /// Geometry collections nested deeper than the configured maximum.
    #[error("Geometry nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    /// Bytes left over after the root geometry.
    #[error("{remaining} trailing byte(s) after the geometry ending at offset {position}")]
    TrailingBytes {
        /// Offset just past the root geometry
        position: u64,
        /// Bytes left unread
        remaining: u64,
    },
}

/// Errors raised while encoding a geometry.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EncodeError {
    /// Raster output was requested.
    #[error("Unsupported format: raster payloads are not supported")]
    UnsupportedRaster,

    /// A native format version this crate cannot write.
    #[error("Unsupported native format version: {0}")]
    UnsupportedVersion(u8),

    /// A coordinate somewhere in the tree has a measure but no Z ordinate.
    #[error("Unsupported dimensionality: XYM coordinates are not supported")]
    UnsupportedXym,

    /// A coordinate, ring or element count that does not fit in 32 bits.
    #[error("Overflow: count {0} does not fit in a 32-bit field")]
    Overflow(usize),

    /// Geometry collections nested deeper than the configured maximum.
    #[error("Geometry nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    /// The write pass produced a different number of bytes than the size pass computed.
    ///
    /// This is a bug in the encoder and cannot be triggered by any geometry.
    #[error("Internal error: size pass computed {expected} bytes but {written} were written")]
    SizeMismatch {
        /// Bytes computed by the size pass
        expected: usize,
        /// Bytes emitted by the write pass
        written: usize,
    },

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoBlobError {
    /// [DecodeError]
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// [EncodeError]
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Result type for decoding.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Result type for encoding.
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoBlobError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let truncated = DecodeError::Truncated {
            position: 5,
            needed: 4,
        };
        assert_eq!(
            truncated.to_string(),
            "Truncated buffer: needed 4 more byte(s) at offset 5"
        );

        let mismatch = DecodeError::UnexpectedElementKind {
            expected: GeometryKind::Polygon,
            found: GeometryKind::Point,
        };
        assert_eq!(mismatch.to_string(), "Expected Polygon element, found Point");

        let wrapped: GeoBlobError = EncodeError::UnsupportedXym.into();
        assert_eq!(
            wrapped.to_string(),
            "Unsupported dimensionality: XYM coordinates are not supported"
        );
    }
}
