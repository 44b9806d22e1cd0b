use crate::geometry::Geometry;

/// Tag identifying the kind of a [`Geometry`] node.
///
/// Also used as the declared component type of a [`MultiGeometry`], where
/// `Unknown` doubles as the mixed/heterogeneous sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryType {
    Unknown,
    PointSet,
    LineString,
    Ring,
    Polygon,
    Multi,
}

/// An ordered collection of geometry parts.
///
/// The component type is stored explicitly rather than recomputed on every
/// query; [`MultiGeometry::new`] infers it from the parts.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiGeometry {
    component_type: GeometryType,
    parts: Vec<Geometry>,
}

impl MultiGeometry {
    /// Build a collection whose component type is inferred: the common type
    /// of all parts, or `Unknown` for a mixed or empty collection.
    pub fn new(parts: Vec<Geometry>) -> Self {
        let component_type = infer_component_type(&parts);
        Self {
            component_type,
            parts,
        }
    }

    /// Build a collection with a caller-declared component type. The declared
    /// type drives homogeneous conversion (e.g. to a GEOS MultiPolygon) and
    /// is trusted, not checked against the parts.
    pub fn with_component_type(component_type: GeometryType, parts: Vec<Geometry>) -> Self {
        Self {
            component_type,
            parts,
        }
    }

    pub fn component_type(&self) -> GeometryType {
        self.component_type
    }

    pub fn parts(&self) -> &[Geometry] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Geometry> {
        self.parts
    }
}

fn infer_component_type(parts: &[Geometry]) -> GeometryType {
    let mut iter = parts.iter().map(Geometry::geometry_type);
    match iter.next() {
        Some(first) if iter.all(|t| t == first) => first,
        _ => GeometryType::Unknown,
    }
}
