use crate::geometry::Coord;

/// An ordered sequence of coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last coordinates are equal, NaN ordinates matching each other. An
    /// empty line string is closed.
    pub fn is_closed(&self) -> bool {
        is_closed(&self.0)
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl From<LinearRing> for LineString {
    fn from(value: LinearRing) -> Self {
        Self(value.0)
    }
}

/// A closed [LineString], used as a polygon boundary.
///
/// The first and last coordinates of a non-empty ring are always equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing(Vec<Coord>);

impl LinearRing {
    /// Construct a ring, returning `None` if the coordinates are not closed.
    pub fn try_new(coords: Vec<Coord>) -> Option<Self> {
        is_closed(&coords).then_some(Self(coords))
    }

    /// Construct a ring, appending the first coordinate if the sequence is not already closed.
    pub fn new_closed(mut coords: Vec<Coord>) -> Self {
        if !is_closed(&coords) {
            coords.push(coords[0]);
        }
        Self(coords)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<LineString> for LinearRing {
    type Error = LineString;

    fn try_from(value: LineString) -> std::result::Result<Self, Self::Error> {
        if value.is_closed() {
            Ok(Self(value.0))
        } else {
            Err(value)
        }
    }
}

fn is_closed(coords: &[Coord]) -> bool {
    match (coords.first(), coords.last()) {
        (Some(first), Some(last)) => first.same_position(last),
        _ => true,
    }
}
