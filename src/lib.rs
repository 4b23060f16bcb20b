//! A codec for binary geometry blobs.
//!
//! Three dialects are supported: a compact native format that shares the SRID and
//! dimensionality across a whole geometry tree, [WKB](https://libgeos.org/specifications/wkb/),
//! and its SRID-embedding extended variant, EWKB.
//!
//! ```
//! use geoblob::geometry::{Coord, GeometryValue, Point};
//! use geoblob::io::wkb::{decode, encode, FormatType};
//!
//! let value = GeometryValue::new(Point::new(Coord::xy(10., 20.)), 4326);
//! let buf = encode(&value, FormatType::NativeVectorial, 0).unwrap().unwrap();
//! assert_eq!(decode(&buf).unwrap(), value);
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;

pub use error::{GeoBlobError, Result};
pub use geometry::{Geometry, GeometryValue};
pub use io::wkb::{CodecOptions, GeometryCodec};
