use crate::geometry::{LineString, Point, Polygon};

/// A collection of [Point]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(pub Vec<Point>);

/// A collection of [LineString]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

/// A collection of [Polygon]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

macro_rules! impl_multi {
    ($multi:ident, $item:ident) => {
        impl $multi {
            pub fn new(items: Vec<$item>) -> Self {
                Self(items)
            }

            pub fn num_geometries(&self) -> usize {
                self.0.len()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }

            /// Whether every member is empty. A multi-geometry with no members is empty.
            pub fn is_empty(&self) -> bool {
                self.0.iter().all(|g| g.is_empty())
            }
        }

        impl From<Vec<$item>> for $multi {
            fn from(value: Vec<$item>) -> Self {
                Self(value)
            }
        }
    };
}

impl_multi!(MultiPoint, Point);
impl_multi!(MultiLineString, LineString);
impl_multi!(MultiPolygon, Polygon);
