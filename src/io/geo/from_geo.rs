use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

impl From<geo::Coord> for Coord {
    fn from(value: geo::Coord) -> Self {
        Coord::xy(value.x, value.y)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Point::new(value.0.into())
    }
}

impl From<geo::LineString> for LineString {
    fn from(value: geo::LineString) -> Self {
        LineString::new(value.0.into_iter().map(Coord::from).collect())
    }
}

/// `geo` closes polygon rings on construction; rings are closed again here in case the
/// [`geo::LineString`] was edited afterwards.
fn ring_from_geo(value: &geo::LineString) -> LinearRing {
    LinearRing::new_closed(value.coords().map(|c| Coord::from(*c)).collect())
}

impl From<geo::Polygon> for Polygon {
    fn from(value: geo::Polygon) -> Self {
        let exterior = ring_from_geo(value.exterior());
        let interiors = value.interiors().iter().map(ring_from_geo).collect();
        Polygon::new(exterior, interiors)
    }
}

impl From<geo::MultiPoint> for MultiPoint {
    fn from(value: geo::MultiPoint) -> Self {
        MultiPoint::new(value.0.into_iter().map(Point::from).collect())
    }
}

impl From<geo::MultiLineString> for MultiLineString {
    fn from(value: geo::MultiLineString) -> Self {
        MultiLineString::new(value.0.into_iter().map(LineString::from).collect())
    }
}

impl From<geo::MultiPolygon> for MultiPolygon {
    fn from(value: geo::MultiPolygon) -> Self {
        MultiPolygon::new(value.0.into_iter().map(Polygon::from).collect())
    }
}

impl From<geo::GeometryCollection> for GeometryCollection {
    fn from(value: geo::GeometryCollection) -> Self {
        GeometryCollection::new(value.0.into_iter().map(Geometry::from).collect())
    }
}

impl From<geo::Geometry> for Geometry {
    /// [`geo::Line`] becomes a two-point line string; [`geo::Rect`] and [`geo::Triangle`] become
    /// polygons.
    fn from(value: geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Point::from(g).into(),
            geo::Geometry::Line(g) => {
                LineString::new(vec![g.start.into(), g.end.into()]).into()
            }
            geo::Geometry::LineString(g) => LineString::from(g).into(),
            geo::Geometry::Polygon(g) => Polygon::from(g).into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::from(g).into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::from(g).into(),
            geo::Geometry::Rect(g) => Polygon::from(g.to_polygon()).into(),
            geo::Geometry::Triangle(g) => Polygon::from(g.to_polygon()).into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{line_string, point, polygon, Rect};

    #[test]
    fn from_geo_point() {
        let p: Point = point!(x: 1., y: 2.).into();
        assert_eq!(p, Point::new(Coord::xy(1., 2.)));
    }

    #[test]
    fn from_geo_line() {
        let line = geo::Line::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 1., y: 1. });
        let geom = Geometry::from(geo::Geometry::Line(line));
        assert_eq!(
            geom,
            LineString::new(vec![Coord::xy(0., 0.), Coord::xy(1., 1.)]).into()
        );
    }

    #[test]
    fn from_geo_polygon_rings_closed() {
        let poly: Polygon = polygon![
            exterior: [(x: 0., y: 0.), (x: 4., y: 0.), (x: 4., y: 4.), (x: 0., y: 4.)],
            interiors: [[(x: 1., y: 1.), (x: 2., y: 1.), (x: 2., y: 2.)]],
        ]
        .into();
        assert_eq!(poly.exterior().num_coords(), 5);
        assert_eq!(poly.num_interior_rings(), 1);
        assert_eq!(poly.interiors()[0].num_coords(), 4);
    }

    #[test]
    fn from_geo_rect() {
        let rect = Rect::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 1., y: 1. });
        let geom = Geometry::from(geo::Geometry::Rect(rect));
        match geom {
            Geometry::Polygon(p) => assert_eq!(p.exterior().num_coords(), 5),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn from_geo_line_string() {
        let ls: LineString = line_string![(x: 0., y: 0.), (x: 1., y: 2.)].into();
        assert_eq!(ls.num_coords(), 2);
    }
}
