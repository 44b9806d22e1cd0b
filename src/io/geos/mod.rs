//! Conversion between the feature geometry model and GEOS geometries.
//!
//! [`to_geos`] walks a [`crate::geometry::Geometry`] tree and builds the
//! corresponding `geos::Geometry`; [`from_geos`] does the reverse. Both drop
//! degenerate parts with a warning instead of failing the whole conversion.

pub(crate) mod coord;
pub mod export;
pub mod import;

pub use export::from_geos;
pub use import::to_geos;
