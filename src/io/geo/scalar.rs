use crate::geometry::{
    Coord, Geometry, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Convert a coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a Point to a [`geo::Point`], or `None` for the empty point.
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> Option<geo::Point> {
    point.coord().map(|coord| geo::Point(coord_to_geo(coord)))
}

/// Convert a coordinate sequence to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(coords: &[Coord]) -> geo::LineString {
    geo::LineString::new(coords.iter().map(coord_to_geo).collect())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = line_string_to_geo(polygon.exterior().coords());
    let interiors = polygon
        .interiors()
        .iter()
        .map(|interior| line_string_to_geo(interior.coords()))
        .collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`]. Empty points are dropped.
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.iter().filter_map(point_to_geo).collect())
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .iter()
            .map(|line_string| line_string_to_geo(line_string.coords()))
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.iter().map(polygon_to_geo).collect())
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(collection: &GeometryCollection) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(collection.iter().map(geometry_to_geo).collect())
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// `geo` has no empty point, so the empty point becomes an empty [`geo::MultiPoint`]. A
/// [LinearRing][crate::geometry::LinearRing] becomes a [`geo::LineString`]. Only the first two
/// dimensions will be kept.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(p) => match point_to_geo(p) {
            Some(p) => geo::Geometry::Point(p),
            None => geo::Geometry::MultiPoint(geo::MultiPoint::new(vec![])),
        },
        Geometry::LineString(ls) => geo::Geometry::LineString(line_string_to_geo(ls.coords())),
        Geometry::LinearRing(lr) => geo::Geometry::LineString(line_string_to_geo(lr.coords())),
        Geometry::Polygon(p) => geo::Geometry::Polygon(polygon_to_geo(p)),
        Geometry::MultiPoint(mp) => geo::Geometry::MultiPoint(multi_point_to_geo(mp)),
        Geometry::MultiLineString(ml) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(ml))
        }
        Geometry::MultiPolygon(mp) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(mp)),
        Geometry::GeometryCollection(gc) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(gc))
        }
    }
}
