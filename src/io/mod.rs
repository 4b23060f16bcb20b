//! The binary codec, and interoperability with the `geo` crate.

pub mod geo;
pub mod wkb;
