use serde::{Deserialize, Serialize};

/// The dimension of a geometry tree's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// X and Y
    #[default]
    Xy,
    /// X, Y and Z
    Xyz,
    /// X, Y and M
    ///
    /// Representable, but rejected by both the encoder and the decoder.
    Xym,
    /// X, Y, Z and M
    Xyzm,
}

impl Dimension {
    /// Construct from the presence of Z and M ordinates.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::Xy,
            (true, false) => Dimension::Xyz,
            (false, true) => Dimension::Xym,
            (true, true) => Dimension::Xyzm,
        }
    }

    /// The number of ordinates in each coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::Xy => 2,
            Dimension::Xyz | Dimension::Xym => 3,
            Dimension::Xyzm => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::Xyz | Dimension::Xyzm)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::Xym | Dimension::Xyzm)
    }
}

/// A single coordinate with optional Z and M ordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// The dimension implied by the ordinates this coordinate carries.
    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// Whether both coordinates carry the same ordinates with equal values. Unlike `==`, NaN
    /// matches NaN.
    pub fn same_position(&self, other: &Coord) -> bool {
        fn eq(a: f64, b: f64) -> bool {
            a == b || (a.is_nan() && b.is_nan())
        }
        fn eq_opt(a: Option<f64>, b: Option<f64>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        eq(self.x, other.x)
            && eq(self.y, other.y)
            && eq_opt(self.z, other.z)
            && eq_opt(self.m, other.m)
    }

    /// Whether X and Y are both NaN, the representation of an empty point on the wire.
    pub(crate) fn is_nan_xy(&self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coord::xyz(x, y, z)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_from_coord() {
        assert_eq!(Coord::xy(1., 2.).dim(), Dimension::Xy);
        assert_eq!(Coord::xyz(1., 2., 3.).dim(), Dimension::Xyz);
        assert_eq!(Coord::xym(1., 2., 3.).dim(), Dimension::Xym);
        assert_eq!(Coord::xyzm(1., 2., 3., 4.).dim(), Dimension::Xyzm);
    }

    #[test]
    fn dimension_size() {
        assert_eq!(Dimension::Xy.size(), 2);
        assert_eq!(Dimension::Xyz.size(), 3);
        assert_eq!(Dimension::Xyzm.size(), 4);
        assert!(Dimension::Xyzm.has_z() && Dimension::Xyzm.has_m());
        assert!(!Dimension::Xym.has_z());
    }

    #[test]
    fn same_position_matches_nan() {
        let a = Coord::xyz(1., 2., f64::NAN);
        assert_ne!(a, a);
        assert!(a.same_position(&a));
        assert!(!a.same_position(&Coord::xy(1., 2.)));
        assert!(!a.same_position(&Coord::xyz(1., 2., 0.)));
        assert!(Coord::xy(0., 0.).same_position(&Coord::xy(-0., 0.)));
    }
}
