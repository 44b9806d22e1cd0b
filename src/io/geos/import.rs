//! Feature geometry → GEOS.

use crate::geometry::{Coord, Geometry, GeometryType, MultiGeometry, Polygon};
use crate::io::geos::coord::to_coord_seq;
use geos::CoordSeq;
use log::warn;

/// Convert a feature geometry tree into a GEOS geometry.
///
/// Returns `None` when the input is structurally invalid or when no part of
/// the tree survives conversion. Sub-geometries rejected by GEOS (e.g. a ring
/// it cannot form) are dropped with a warning; a single bad part never aborts
/// the rest of the tree.
pub fn to_geos(input: &Geometry) -> Option<geos::Geometry> {
    if !input.is_valid() {
        return None;
    }
    import(input)
}

fn import(input: &Geometry) -> Option<geos::Geometry> {
    match input {
        Geometry::Unknown => None,
        Geometry::PointSet(point_set) => {
            import_shape(&point_set.0, false, geos::Geometry::create_point)
        }
        Geometry::LineString(line_string) => {
            import_shape(&line_string.0, false, geos::Geometry::create_line_string)
        }
        Geometry::Ring(ring) => import_shape(&ring.0, true, geos::Geometry::create_linear_ring),
        Geometry::Polygon(polygon) => import_polygon(polygon),
        Geometry::Multi(multi) => import_multi(multi),
    }
}

/// Build one coordinate-sequence-backed shape, absorbing failure into `None`.
fn import_shape(
    coords: &[Coord],
    close: bool,
    create: fn(CoordSeq) -> std::result::Result<geos::Geometry, geos::Error>,
) -> Option<geos::Geometry> {
    let seq = match to_coord_seq(coords, close) {
        Ok(seq) => seq,
        Err(err) => {
            warn!("dropping geometry whose coordinates could not be converted: {err}");
            return None;
        }
    };
    match create(seq) {
        Ok(geom) => Some(geom),
        Err(err) => {
            warn!("dropping degenerate geometry rejected by GEOS: {err}");
            None
        }
    }
}

fn import_polygon(polygon: &Polygon) -> Option<geos::Geometry> {
    // No shell, no polygon. Holes are best-effort: the ones GEOS rejects are
    // dropped and the polygon keeps the rest.
    let shell = import_shape(
        &polygon.exterior().0,
        true,
        geos::Geometry::create_linear_ring,
    )?;

    let holes: Vec<geos::Geometry> = polygon
        .interiors()
        .iter()
        .filter_map(|hole| import_shape(&hole.0, true, geos::Geometry::create_linear_ring))
        .collect();

    match geos::Geometry::create_polygon(shell, holes) {
        Ok(geom) => Some(geom),
        Err(err) => {
            warn!("dropping polygon rejected by GEOS: {err}");
            None
        }
    }
}

fn import_multi(multi: &MultiGeometry) -> Option<geos::Geometry> {
    let children: Vec<geos::Geometry> = multi.parts().iter().filter_map(import).collect();
    if children.is_empty() {
        return None;
    }

    let built = match multi.component_type() {
        GeometryType::Polygon => geos::Geometry::create_multipolygon(children),
        GeometryType::LineString => geos::Geometry::create_multiline_string(children),
        GeometryType::PointSet => geos::Geometry::create_multipoint(children),
        // Mixed or unrecognized component types go into the generic
        // collection.
        _ => geos::Geometry::create_geometry_collection(children),
    };
    match built {
        Ok(geom) => Some(geom),
        Err(err) => {
            warn!("dropping multi-geometry rejected by GEOS: {err}");
            None
        }
    }
}
