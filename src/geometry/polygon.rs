use crate::geometry::Ring;

/// A polygon: one exterior shell plus zero or more interior holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }

    pub fn push_interior(&mut self, interior: Ring) {
        self.interiors.push(interior);
    }
}

impl From<Ring> for Polygon {
    fn from(exterior: Ring) -> Self {
        Self::new(exterior, Vec::new())
    }
}
