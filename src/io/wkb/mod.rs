//! Reading and writing geometry blobs in the native, WKB and EWKB dialects.

mod api;
pub mod common;
pub mod cursor;
pub mod reader;
pub mod writer;

pub use api::{decode, encode, peek_header, CodecOptions, GeometryCodec, DEFAULT_MAX_DEPTH};
pub use common::{FormatDescriptor, FormatType, GeometryKind, NO_SRID};
pub use cursor::Endianness;
pub use reader::GeometryHeader;
