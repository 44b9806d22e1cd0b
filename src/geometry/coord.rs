/// A 3D coordinate.
///
/// The `z` component is carried through the feature model for callers that
/// need it, but the GEOS conversion is planar: `z` is dropped on import and
/// zeroed on export.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A coordinate in the z = 0 plane.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0. }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coord::new(x, y, z)
    }
}
