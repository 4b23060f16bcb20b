use serde::{Deserialize, Serialize};

use crate::error::{DecodeResult, EncodeResult};
use crate::geometry::GeometryValue;
use crate::io::wkb::common::{FormatDescriptor, FormatType};
use crate::io::wkb::cursor::{Endianness, ReadCursor};
use crate::io::wkb::reader::{read_geometry, read_header, GeometryHeader};
use crate::io::wkb::writer::write_geometry_value;

/// The default bound on collection nesting, applied when decoding and encoding.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for a [GeometryCodec].
///
/// ```
/// use geoblob::io::wkb::CodecOptions;
///
/// let options: CodecOptions = Default::default();
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// The byte order used when encoding. Decoding always follows the blob.
    pub byte_order: Endianness,
    /// The deepest nesting of collections accepted.
    pub max_depth: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            byte_order: Endianness::LittleEndian,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decodes and encodes geometry blobs in the native, WKB and EWKB dialects.
///
/// The codec holds only its options, so a single instance can be shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryCodec {
    options: CodecOptions,
}

impl GeometryCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Parse a blob in any supported dialect. The dialect is detected from the first byte.
    pub fn decode(&self, buf: &[u8]) -> DecodeResult<GeometryValue> {
        read_geometry(&mut ReadCursor::new(buf), self.options.max_depth)
    }

    /// Parse only the root header of a blob, without reading or allocating the geometry.
    pub fn peek_header(&self, buf: &[u8]) -> DecodeResult<GeometryHeader> {
        read_header(&mut ReadCursor::new(buf))
    }

    /// Encode a geometry in the given dialect.
    ///
    /// Returns `Ok(None)` when the geometry is empty: empty geometries are never encoded.
    pub fn encode(
        &self,
        value: &GeometryValue,
        format: FormatType,
        version: u8,
    ) -> EncodeResult<Option<Vec<u8>>> {
        write_geometry_value(
            value,
            FormatDescriptor::new(format, version),
            self.options.byte_order,
            self.options.max_depth,
        )
    }
}

/// Parse a blob in any supported dialect with the default options.
///
/// ```
/// use geoblob::io::wkb::decode;
///
/// // EWKB POINT(10 20) with SRID 4326
/// let buf = [
///     0x01, 0x01, 0x00, 0x00, 0x20, 0xE6, 0x10, 0x00, 0x00, //
///     0, 0, 0, 0, 0, 0, 0x24, 0x40, 0, 0, 0, 0, 0, 0, 0x34, 0x40,
/// ];
/// let value = decode(&buf).unwrap();
/// assert_eq!(value.srid, 4326);
/// ```
pub fn decode(buf: &[u8]) -> DecodeResult<GeometryValue> {
    GeometryCodec::default().decode(buf)
}

/// Parse the root header of a blob.
pub fn peek_header(buf: &[u8]) -> DecodeResult<GeometryHeader> {
    GeometryCodec::default().peek_header(buf)
}

/// Encode a geometry little-endian with the default options.
pub fn encode(
    value: &GeometryValue,
    format: FormatType,
    version: u8,
) -> EncodeResult<Option<Vec<u8>>> {
    GeometryCodec::default().encode(value, format, version)
}
