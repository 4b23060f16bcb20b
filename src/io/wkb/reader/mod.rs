//! Parse geometry blobs in any of the supported dialects.
//!
//! The root header establishes the dialect, byte order, SRID and dimension of the whole tree.
//! Those facts are carried down to every member geometry by argument; members never re-read
//! them from the native dialect.

mod geometry;
mod header;
mod linestring;
mod point;
mod polygon;

pub use geometry::read_geometry;
pub use header::{read_header, GeometryHeader};
