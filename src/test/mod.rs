pub(crate) mod polygon;

use crate::geometry::Geometry;

/// One non-empty geometry of every kind, in every supported dimension.
pub(crate) fn all_geometries() -> Vec<Geometry> {
    vec![
        point::p0().into(),
        point::p_xyz().into(),
        point::p_xyzm().into(),
        linestring::ls0().into(),
        linestring::ls_xyz().into(),
        linestring::ring0().into(),
        polygon::square().into(),
        polygon::p1().into(),
        polygon::p_xyzm().into(),
        multipoint::mp0().into(),
        multilinestring::ml0().into(),
        multipolygon::mp0().into(),
        geometrycollection::gc0().into(),
        geometrycollection::gc_nested().into(),
        geometrycollection::gc_with_empties().into(),
    ]
}
