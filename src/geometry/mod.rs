//! The feature geometry model: a polymorphic tree of point sets, linestrings,
//! rings, polygons-with-holes, and multi-geometries.
//!
//! Coordinates are 3D (`x`, `y`, `z`); conversion to and from GEOS uses only
//! `x`/`y` since the engine is planar.

pub mod coord;
pub mod line_string;
pub mod multi;
pub mod polygon;
pub mod ring;

pub use coord::Coord;
pub use line_string::{LineString, PointSet};
pub use multi::{GeometryType, MultiGeometry};
pub use polygon::Polygon;
pub use ring::{Orientation, Ring};

/// A feature geometry node.
///
/// `Unknown` is the sentinel for geometry whose kind could not be determined
/// by the producer; it never converts to anything.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Unknown,
    PointSet(PointSet),
    LineString(LineString),
    Ring(Ring),
    Polygon(Polygon),
    Multi(MultiGeometry),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Unknown => GeometryType::Unknown,
            Geometry::PointSet(_) => GeometryType::PointSet,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Ring(_) => GeometryType::Ring,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::Multi(_) => GeometryType::Multi,
        }
    }

    /// Structural validity: does this node have enough points to denote its
    /// shape at all? This is not geometric validity (self-intersection etc.),
    /// which is the engine's job.
    pub fn is_valid(&self) -> bool {
        match self {
            Geometry::Unknown => false,
            Geometry::PointSet(ps) => !ps.0.is_empty(),
            Geometry::LineString(ls) => ls.0.len() >= 2,
            Geometry::Ring(ring) => ring.0.len() >= 3,
            Geometry::Polygon(polygon) => polygon.exterior().0.len() >= 3,
            Geometry::Multi(multi) => !multi.parts().is_empty(),
        }
    }
}

impl From<PointSet> for Geometry {
    fn from(value: PointSet) -> Self {
        Geometry::PointSet(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Ring> for Geometry {
    fn from(value: Ring) -> Self {
        Geometry::Ring(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiGeometry> for Geometry {
    fn from(value: MultiGeometry) -> Self {
        Geometry::Multi(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn structural_validity() {
        assert!(!Geometry::Unknown.is_valid());
        assert!(!Geometry::PointSet(PointSet(vec![])).is_valid());
        assert!(Geometry::PointSet(PointSet(vec![Coord::xy(0., 0.)])).is_valid());
        assert!(!Geometry::LineString(LineString(vec![Coord::xy(0., 0.)])).is_valid());
        assert!(
            Geometry::LineString(LineString(vec![Coord::xy(0., 0.), Coord::xy(1., 1.)]))
                .is_valid()
        );
        assert!(!Geometry::Ring(Ring(vec![Coord::xy(0., 0.), Coord::xy(1., 0.)])).is_valid());
    }
}
