//! In-memory geometry values consumed by the encoder and produced by the decoder.

pub use collection::GeometryCollection;
pub use coord::{Coord, Dimension};
pub use linestring::{LineString, LinearRing};
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;

mod collection;
mod coord;
mod linestring;
mod multi;
mod point;
mod polygon;

use crate::io::wkb::common::{GeometryKind, NO_SRID};

/// A geometry of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The wire kind of this geometry. A [LinearRing] is encoded as a line string.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) | Geometry::LinearRing(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Whether this geometry has no coordinates at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::LinearRing(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// The number of direct members of a multi-geometry or collection, or 1 for any other kind.
    pub fn num_elements(&self) -> usize {
        match self {
            Geometry::MultiPoint(g) => g.num_geometries(),
            Geometry::MultiLineString(g) => g.num_geometries(),
            Geometry::MultiPolygon(g) => g.num_geometries(),
            Geometry::GeometryCollection(g) => g.num_geometries(),
            _ => 1,
        }
    }

    /// The first coordinate of the tree in depth-first order, ignoring empty points.
    pub fn first_coord(&self) -> Option<&Coord> {
        match self {
            Geometry::Point(g) => g.coord().filter(|_| !g.is_empty()),
            Geometry::LineString(g) => g.coords().first(),
            Geometry::LinearRing(g) => g.coords().first(),
            Geometry::Polygon(g) => g.rings().find_map(|r| r.coords().first()),
            Geometry::MultiPoint(g) => g
                .iter()
                .find_map(|p| p.coord().filter(|_| !p.is_empty())),
            Geometry::MultiLineString(g) => g.iter().find_map(|l| l.coords().first()),
            Geometry::MultiPolygon(g) => g
                .iter()
                .find_map(|p| p.rings().find_map(|r| r.coords().first())),
            Geometry::GeometryCollection(g) => g.iter().find_map(|g| g.first_coord()),
        }
    }

    /// Whether any coordinate of the tree, outside empty points, satisfies `pred`.
    pub fn any_coord(&self, pred: &impl Fn(&Coord) -> bool) -> bool {
        let in_rings = |p: &Polygon| p.rings().any(|r| r.coords().iter().any(pred));
        match self {
            Geometry::Point(g) => !g.is_empty() && g.coord().is_some_and(pred),
            Geometry::LineString(g) => g.coords().iter().any(pred),
            Geometry::LinearRing(g) => g.coords().iter().any(pred),
            Geometry::Polygon(g) => in_rings(g),
            Geometry::MultiPoint(g) => g
                .iter()
                .any(|p| !p.is_empty() && p.coord().is_some_and(pred)),
            Geometry::MultiLineString(g) => g.iter().any(|l| l.coords().iter().any(pred)),
            Geometry::MultiPolygon(g) => g.iter().any(in_rings),
            Geometry::GeometryCollection(g) => g.iter().any(|g| g.any_coord(pred)),
        }
    }

    /// The dimension of the whole tree, taken from its first coordinate.
    ///
    /// An empty tree is [Dimension::Xy].
    pub fn dimension(&self) -> Dimension {
        self.first_coord().map(|c| c.dim()).unwrap_or_default()
    }
}

macro_rules! impl_into_geometry {
    ($ty:ident) => {
        impl From<$ty> for Geometry {
            fn from(value: $ty) -> Self {
                Geometry::$ty(value)
            }
        }
    };
}

impl_into_geometry!(Point);
impl_into_geometry!(LineString);
impl_into_geometry!(LinearRing);
impl_into_geometry!(Polygon);
impl_into_geometry!(MultiPoint);
impl_into_geometry!(MultiLineString);
impl_into_geometry!(MultiPolygon);
impl_into_geometry!(GeometryCollection);

/// The root of a geometry tree together with its spatial reference identifier.
///
/// Every sub-geometry of `geometry` shares `srid`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryValue {
    pub srid: i32,
    pub geometry: Geometry,
}

impl GeometryValue {
    pub fn new(geometry: impl Into<Geometry>, srid: i32) -> Self {
        Self {
            srid,
            geometry: geometry.into(),
        }
    }

    /// Whether `srid` is set to something other than [NO_SRID].
    pub fn has_srid(&self) -> bool {
        self.srid != NO_SRID
    }
}

impl From<Geometry> for GeometryValue {
    fn from(value: Geometry) -> Self {
        Self::new(value, NO_SRID)
    }
}
