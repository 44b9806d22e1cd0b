use crate::geometry::Coord;

/// Winding direction of a ring, computed over the x/y plane.
///
/// The model's convention is counter-clockwise polygon shells and clockwise
/// holes; [`Ring::rewind`] normalizes a ring to either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Ccw,
    Cw,
}

/// A polygon boundary: a point sequence treated as closed.
///
/// A ring may be stored open (last point not repeating the first); any
/// consumer that requires explicit closure applies it on the fly. The stored
/// order is the winding order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring(pub Vec<Coord>);

impl Ring {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> impl ExactSizeIterator<Item = &Coord> {
        self.0.iter()
    }

    /// Whether the stored sequence explicitly repeats its first point last.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Explicitly close the ring by repeating the first point, if it is not
    /// already closed. Sequences of 2 or fewer points are left alone.
    pub fn close(&mut self) {
        if self.0.len() > 2 && !self.is_closed() {
            self.0.push(self.0[0]);
        }
    }

    /// Twice the signed area over x/y, positive for counter-clockwise
    /// winding. The wrap-around edge makes this correct for both open and
    /// explicitly closed storage.
    fn signed_area2(&self) -> f64 {
        let coords = &self.0;
        if coords.len() < 3 {
            return 0.;
        }
        let mut sum = 0.;
        for i in 0..coords.len() {
            let a = coords[i];
            let b = coords[(i + 1) % coords.len()];
            sum += a.x * b.y - b.x * a.y;
        }
        sum
    }

    pub fn orientation(&self) -> Orientation {
        if self.signed_area2() >= 0. {
            Orientation::Ccw
        } else {
            Orientation::Cw
        }
    }

    /// Reverse the point order in place if the ring is not already wound in
    /// the requested direction.
    pub fn rewind(&mut self, target: Orientation) {
        if self.orientation() != target {
            self.0.reverse();
        }
    }
}

impl<C: Into<Coord>> FromIterator<C> for Ring {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
