use crate::error::Result;
use crate::geometry::Coord;
use geos::{CoordSeq, CoordType};

/// Convert feature coordinates into a GEOS coordinate sequence, using only
/// x/y.
///
/// With `close` set, a sequence of more than 2 points whose first and last
/// points differ gets the first point appended again at the end. Degenerate
/// (0/1-point) sequences pass through untouched; whether they are usable is
/// decided by the shape constructor downstream.
pub(crate) fn to_coord_seq(coords: &[Coord], close: bool) -> Result<CoordSeq> {
    let need_close = close && coords.len() > 2 && coords.first() != coords.last();

    let len = coords.len() + usize::from(need_close);
    let mut seq = CoordSeq::new(len as u32, CoordType::XY)?;
    for (i, coord) in coords.iter().enumerate() {
        seq.set_x(i, coord.x)?;
        seq.set_y(i, coord.y)?;
    }
    if need_close {
        seq.set_x(coords.len(), coords[0].x)?;
        seq.set_y(coords.len(), coords[0].y)?;
    }
    Ok(seq)
}

/// Read a GEOS coordinate sequence back into feature coordinates, in order,
/// with z = 0.
pub(crate) fn from_coord_seq(seq: &CoordSeq) -> Result<Vec<Coord>> {
    let size = seq.size()?;
    let mut coords = Vec::with_capacity(size);
    for i in 0..size {
        coords.push(Coord::xy(seq.get_x(i)?, seq.get_y(i)?));
    }
    Ok(coords)
}

#[cfg(test)]
mod test {
    use super::*;

    fn seq_coords(seq: &CoordSeq) -> Vec<(f64, f64)> {
        (0..seq.size().unwrap())
            .map(|i| (seq.get_x(i).unwrap(), seq.get_y(i).unwrap()))
            .collect()
    }

    #[test]
    fn close_appends_first_point() {
        let coords = vec![
            Coord::xy(0., 0.),
            Coord::xy(4., 0.),
            Coord::xy(4., 4.),
            Coord::xy(0., 4.),
        ];
        let seq = to_coord_seq(&coords, true).unwrap();
        assert_eq!(
            seq_coords(&seq),
            vec![(0., 0.), (4., 0.), (4., 4.), (0., 4.), (0., 0.)]
        );
    }

    #[test]
    fn already_closed_left_alone() {
        let coords = vec![
            Coord::xy(0., 0.),
            Coord::xy(4., 0.),
            Coord::xy(4., 4.),
            Coord::xy(0., 0.),
        ];
        let seq = to_coord_seq(&coords, true).unwrap();
        assert_eq!(seq.size().unwrap(), 4);
    }

    #[test]
    fn no_close_requested() {
        let coords = vec![Coord::xy(0., 0.), Coord::xy(4., 0.), Coord::xy(4., 4.)];
        let seq = to_coord_seq(&coords, false).unwrap();
        assert_eq!(seq.size().unwrap(), 3);
    }

    #[test]
    fn too_short_to_close() {
        let coords = vec![Coord::xy(0., 0.), Coord::xy(1., 1.)];
        let seq = to_coord_seq(&coords, true).unwrap();
        assert_eq!(seq.size().unwrap(), 2);
    }

    #[test]
    fn z_is_dropped_and_zeroed() {
        let coords = vec![Coord::new(1., 2., 7.), Coord::new(3., 4., 8.)];
        let seq = to_coord_seq(&coords, false).unwrap();
        let back = from_coord_seq(&seq).unwrap();
        assert_eq!(back, vec![Coord::xy(1., 2.), Coord::xy(3., 4.)]);
    }
}
