//! Encode geometry trees with a size pass followed by a write pass.
//!
//! Every geometry kind has a `*_size` function and a `write_*` function with the same recursive
//! shape. The size pass decides the exact buffer length; the write pass fills it.

mod geometry;
mod geometrycollection;
mod header;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometry::write_geometry_value;
