use crate::geometry::{Coord, Dimension};

/// A single position, or the empty point.
///
/// A point whose X and Y are both NaN is empty too, as that is how the empty point is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Option<Coord>);

impl Point {
    pub fn new(coord: Coord) -> Self {
        Self(Some(coord))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.map_or(true, |c| c.is_nan_xy())
    }

    pub fn dim(&self) -> Option<Dimension> {
        self.0.map(|c| c.dim())
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Point::new(value)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Point::new(value.into())
    }
}
