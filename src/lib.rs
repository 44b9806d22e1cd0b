//! Bidirectional conversion between a simple feature geometry model and
//! [GEOS](https://libgeos.org/) geometries, for feeding feature data into
//! planar-geometry operations (validity, buffering, overlay) and reading the
//! results back.
//!
//! The two entry points are [`to_geos`] (feature model → GEOS) and
//! [`from_geos`] (GEOS → feature model). Both are total over their inputs:
//! degenerate sub-geometries are dropped with a warning rather than failing
//! the whole conversion, and "no usable geometry" is reported as `None`.

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod error;
pub mod geometry;
pub mod io;

pub use geometry::{
    Coord, Geometry, GeometryType, LineString, MultiGeometry, Orientation, PointSet, Polygon, Ring,
};
pub use io::geos::{from_geos, to_geos};
