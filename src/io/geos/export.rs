//! GEOS → feature geometry.

use crate::error::Result;
use crate::geometry::{
    Coord, Geometry, LineString, MultiGeometry, Orientation, PointSet, Polygon, Ring,
};
use crate::io::geos::coord::from_coord_seq;
use geos::{Geom, GeometryTypes};
use log::warn;

/// Convert a GEOS geometry back into a feature geometry tree.
///
/// A single-part result is returned directly; multiple parts are wrapped in a
/// [`MultiGeometry`]; zero usable parts yield `None`. Exported polygon rings
/// are rewound to the model's convention (counter-clockwise shells, clockwise
/// holes) regardless of the winding GEOS produced, and every coordinate comes
/// back with z = 0.
///
/// Single GEOS `Point`s are an unsupported input kind and are dropped with a
/// warning; points travel as MultiPoint / point sets.
pub fn from_geos<G: Geom>(input: &G) -> Option<Geometry> {
    let mut parts: Vec<Geometry> = Vec::new();

    let collected = match input.geometry_type() {
        Ok(GeometryTypes::Point) => {
            warn!("single Point export is not supported; dropping");
            Ok(())
        }
        Ok(GeometryTypes::MultiPoint) => {
            export_multi_point(input).map(|part| parts.push(part.into()))
        }
        Ok(GeometryTypes::LineString) | Ok(GeometryTypes::LinearRing) => {
            export_line_string(input).map(|part| parts.push(part.into()))
        }
        Ok(GeometryTypes::Polygon) => export_polygon(input).map(|part| {
            if let Some(polygon) = part {
                parts.push(polygon.into());
            }
        }),
        Ok(GeometryTypes::MultiLineString)
        | Ok(GeometryTypes::MultiPolygon)
        | Ok(GeometryTypes::GeometryCollection) => export_members(input, &mut parts),
        Err(x) => {
            warn!("cannot export GEOS geometry of unknown kind {x}; dropping");
            Ok(())
        }
    };
    if let Err(err) = collected {
        warn!("dropping geometry that could not be read back from GEOS: {err}");
    }

    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => Some(Geometry::Multi(MultiGeometry::new(parts))),
    }
}

fn export_multi_point(geom: &impl Geom) -> Result<PointSet> {
    let num_points = geom.get_num_geometries()?;
    let mut coords = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let point = geom.get_geometry_n(i)?;
        coords.push(Coord::xy(point.get_x()?, point.get_y()?));
    }
    Ok(PointSet(coords))
}

fn export_line_string(geom: &impl Geom) -> Result<LineString> {
    Ok(LineString(from_coord_seq(&geom.get_coord_seq()?)?))
}

/// Exports one polygon, rewinding the shell CCW and every hole CW. An empty
/// polygon (no exterior ring) yields `Ok(None)`.
fn export_polygon(geom: &impl Geom) -> Result<Option<Polygon>> {
    if geom.is_empty()? {
        return Ok(None);
    }

    let exterior = geom.get_exterior_ring()?;
    let mut shell = Ring(from_coord_seq(&exterior.get_coord_seq()?)?);
    shell.rewind(Orientation::Ccw);

    let mut polygon = Polygon::new(shell, Vec::new());
    for i in 0..geom.get_num_interior_rings()? {
        let interior = geom.get_interior_ring_n(i)?;
        let mut hole = Ring(from_coord_seq(&interior.get_coord_seq()?)?);
        hole.rewind(Orientation::Cw);
        polygon.push_interior(hole);
    }
    Ok(Some(polygon))
}

/// Exports every member of a multi-geometry or collection, concatenating the
/// non-empty results into `parts`. Wrapping of the final part list happens at
/// the top level only.
fn export_members(geom: &impl Geom, parts: &mut Vec<Geometry>) -> Result<()> {
    for i in 0..geom.get_num_geometries()? {
        let member = geom.get_geometry_n(i)?;
        if let Some(part) = from_geos(&member) {
            parts.push(part);
        }
    }
    Ok(())
}
