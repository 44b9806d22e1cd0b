use crate::geometry::Coord;

/// An unordered-in-meaning but ordered-in-storage set of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet(pub Vec<Coord>);

impl PointSet {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> impl ExactSizeIterator<Item = &Coord> {
        self.0.iter()
    }
}

/// An open polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> impl ExactSizeIterator<Item = &Coord> {
        self.0.iter()
    }
}

impl<C: Into<Coord>> FromIterator<C> for PointSet {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<Coord>> FromIterator<C> for LineString {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
