use crate::geometry::Geometry;

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.0.iter()
    }

    /// Whether every member is empty. A collection with no members is empty.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|g| g.is_empty())
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self(value)
    }
}
