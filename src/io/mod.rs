//! Conversion to and from external geometry representations.

pub mod geos;
