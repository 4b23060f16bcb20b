use geo::polygon;

use crate::geometry::{Coord, LinearRing, Polygon};

/// A unit square with no holes; its exterior has five coordinates.
pub(crate) fn square() -> Polygon {
    polygon![
        (x: 0., y: 0.),
        (x: 1., y: 0.),
        (x: 1., y: 1.),
        (x: 0., y: 1.),
    ]
    .into()
}

/// A polygon with one hole.
pub(crate) fn p1() -> Polygon {
    polygon!(
        exterior: [
            (x: -111., y: 45.),
            (x: -111., y: 41.),
            (x: -104., y: 41.),
            (x: -104., y: 45.),
        ],
        interiors: [
            [
                (x: -110., y: 44.),
                (x: -110., y: 42.),
                (x: -105., y: 42.),
                (x: -105., y: 44.),
            ],
        ],
    )
    .into()
}

pub(crate) fn p_xyzm() -> Polygon {
    let exterior = LinearRing::new_closed(vec![
        Coord::xyzm(0., 0., 1., 0.),
        Coord::xyzm(4., 0., 1., 1.),
        Coord::xyzm(4., 4., 1., 2.),
    ]);
    Polygon::new(exterior, vec![])
}
