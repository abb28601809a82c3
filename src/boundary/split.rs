//! Continental splitting of country polygons along the boundary line
//!
//! Splits a country polygon into its western (European) and eastern
//! (Asian) parts using the ordered boundary path. The primary approach
//! closes the path into a clip ring via a far-west edge; when that ring is
//! too degenerate to use, a buffer-strip / ray-casting fallback classifies
//! the polygon pieces instead.

use std::sync::OnceLock;

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{
    coord, BooleanOps, BoundingRect, Centroid, Coord, Line, LineString, MultiPolygon, Polygon,
    Validation,
};
use log::{debug, warn};

use crate::geometry::ops::{dissolve, polyline_strip, repair, split_parts_by_lon};

use super::path::{merge_segments, ordered_path};

/// Padding west of the region before the closing edge is placed.
const WEST_EDGE_PAD_DEG: f64 = 10.0;

/// Westernmost allowed closing edge. Clamping here keeps the clip ring from
/// wrapping past the antimeridian and capturing far-eastern territory
/// (Chukotka sits at about -170 degrees).
const WEST_EDGE_CLAMP_DEG: f64 = -30.0;

/// Half-width of the boundary strip used by the fallback classifier.
const FALLBACK_STRIP_DEG: f64 = 0.005;

/// Longitude the classification rays are cast from.
const RAY_ORIGIN_LON: f64 = -180.0;

/// Which side of the boundary to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The European side, west of the boundary
    West,
    /// The Asian side, east of the boundary
    East,
}

impl Side {
    /// Get the side name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Side::West => "west",
            Side::East => "east",
        }
    }
}

/// The closure ring could not be turned into usable clip area.
///
/// This is the only condition that routes a split through the fallback
/// classifier; every other failure mode resolves to "return the region
/// unchanged" instead.
#[derive(Debug)]
struct DegenerateRing;

/// Splits region polygons along an ordered boundary line.
///
/// The ordered path is computed from the raw segments once, on first use,
/// and shared read-only afterwards; a splitter can therefore be handed out
/// by reference to parallel extraction tasks.
pub struct BoundarySplitter {
    segments: Vec<LineString<f64>>,
    path: OnceLock<Vec<Coord<f64>>>,
}

impl BoundarySplitter {
    /// Create a splitter from raw boundary segments
    pub fn new(segments: Vec<LineString<f64>>) -> Self {
        BoundarySplitter {
            segments,
            path: OnceLock::new(),
        }
    }

    /// The ordered south-to-north boundary path.
    ///
    /// Computed once; repeated calls return the identical sequence.
    pub fn path(&self) -> &[Coord<f64>] {
        self.path.get_or_init(|| ordered_path(&self.segments))
    }

    /// Split a region and keep the requested side.
    ///
    /// Never returns an empty or invalid geometry: whenever a side cannot
    /// be cut out, the unmodified region is returned instead.
    pub fn split(&self, region: &MultiPolygon<f64>, side: Side) -> MultiPolygon<f64> {
        let western = match self.western_part(region) {
            Ok(western) => western,
            Err(DegenerateRing) => {
                warn!("boundary clip ring degenerate, using ray-casting fallback");
                let Some(result) = self.fallback(region, side) else {
                    return region.clone();
                };
                let mut result = result;
                if !result.is_valid() {
                    result = repair(&result);
                }
                if result.0.is_empty() {
                    return region.clone();
                }
                return result;
            }
        };

        match side {
            Side::West => {
                if western.0.is_empty() {
                    region.clone()
                } else {
                    western
                }
            }
            Side::East => {
                // The eastern part is always region minus the western part;
                // building a second clip ring on the east side would double
                // count or drop the pockets where the ring self-touches.
                if western.0.is_empty() {
                    return region.clone();
                }
                let mut eastern = region.difference(&western);
                if eastern.0.is_empty() {
                    return region.clone();
                }
                if !eastern.is_valid() {
                    eastern = repair(&eastern);
                }
                eastern
            }
        }
    }

    /// Cut the western part of the region with the closed clip ring.
    fn western_part(&self, region: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>, DegenerateRing> {
        let path = self.path();
        if path.len() < 2 {
            return Err(DegenerateRing);
        }
        let bounds = region.bounding_rect().ok_or(DegenerateRing)?;
        let west_edge = (bounds.min().x - WEST_EDGE_PAD_DEG).max(WEST_EDGE_CLAMP_DEG);

        let first = path[0];
        let last = *path.last().unwrap();

        // Boundary path plus a closing leg down the far-west edge
        let mut ring = path.to_vec();
        ring.push(coord! { x: west_edge, y: last.y });
        ring.push(coord! { x: west_edge, y: first.y });
        ring.push(first);

        let mut clip = MultiPolygon::new(vec![Polygon::new(LineString::new(ring), Vec::new())]);
        if !clip.is_valid() {
            debug!("clip ring self-intersects, repairing");
            clip = repair(&clip);
            if clip.0.is_empty() {
                return Err(DegenerateRing);
            }
        }

        let mut western = region.intersection(&clip);
        if !western.is_valid() {
            western = repair(&western);
        }
        Ok(western)
    }

    /// Classify region pieces by ray-casting parity against the boundary.
    ///
    /// The region is cut along a thin strip covering the boundary, then each
    /// remaining piece gets a horizontal ray from the far west to its
    /// centroid; an even crossing count puts the piece on the western side,
    /// odd on the eastern side.
    fn fallback(&self, region: &MultiPolygon<f64>, side: Side) -> Option<MultiPolygon<f64>> {
        let chains = merge_segments(&self.segments);
        let strip = polyline_strip(&chains, FALLBACK_STRIP_DEG);
        let remainder = if strip.0.is_empty() {
            region.clone()
        } else {
            region.difference(&strip)
        };
        if remainder.0.is_empty() {
            return None;
        }

        let mut selected: Vec<MultiPolygon<f64>> = Vec::new();
        for piece in &remainder.0 {
            let Some(centroid) = piece.centroid() else {
                continue;
            };
            let crossings = self.ray_crossings(centroid.x(), centroid.y());
            let piece_side = if crossings % 2 == 0 { Side::West } else { Side::East };
            if piece_side == side {
                selected.push(MultiPolygon::new(vec![piece.clone()]));
            }
        }

        if selected.is_empty() {
            None
        } else {
            Some(dissolve(selected))
        }
    }

    /// Count boundary crossings of a horizontal ray ending at (lon, lat).
    fn ray_crossings(&self, lon: f64, lat: f64) -> usize {
        let ray = Line::new(
            coord! { x: RAY_ORIGIN_LON, y: lat },
            coord! { x: lon, y: lat },
        );
        let mut crossings = 0;
        for segment in &self.segments {
            for line in segment.lines() {
                if let Some(LineIntersection::SinglePoint { .. }) = line_intersection(ray, line) {
                    crossings += 1;
                }
            }
        }
        crossings
    }
}

/// Move stray polygon parts between the two sides of a split result.
///
/// Mountain-ridge boundaries shed slivers onto the wrong side; destinations
/// that declare a longitude window get those parts reassigned. On the
/// western side, opposite-side parts whose centroid longitude falls inside
/// the window are absorbed; on the eastern side, parts inside the window are
/// shed (they belong to the west).
pub fn absorb_lon_window(
    country: &MultiPolygon<f64>,
    result: &MultiPolygon<f64>,
    side: Side,
    west: f64,
    east: f64,
) -> MultiPolygon<f64> {
    match side {
        Side::West => {
            let opposite = country.difference(result);
            let (strays, _) = split_parts_by_lon(&opposite, west, east);
            if strays.is_empty() {
                result.clone()
            } else {
                result.union(&MultiPolygon::new(strays))
            }
        }
        Side::East => {
            let (_, keep) = split_parts_by_lon(result, west, east);
            if keep.is_empty() {
                result.clone()
            } else {
                MultiPolygon::new(keep)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use geo::{line_string, Area};

    fn region(west: f64, south: f64, east: f64, north: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![
            BoundingBox::new(west, south, east, north).to_polygon(),
        ])
    }

    fn vertical_boundary(lon: f64, south: f64, north: f64) -> Vec<LineString<f64>> {
        vec![line_string![(x: lon, y: south), (x: lon, y: north)]]
    }

    #[test]
    fn path_is_idempotent() {
        let splitter = BoundarySplitter::new(vertical_boundary(5.0, -5.0, 15.0));
        let first: Vec<_> = splitter.path().to_vec();
        let second: Vec<_> = splitter.path().to_vec();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn split_box_with_vertical_boundary() {
        // Box from lon 0-20, boundary at lon 5: west keeps [0, 5]
        let splitter = BoundarySplitter::new(vertical_boundary(5.0, -5.0, 15.0));
        let country = region(0.0, 0.0, 20.0, 10.0);

        let west = splitter.split(&country, Side::West);
        let east = splitter.split(&country, Side::East);

        let west_bounds = west.bounding_rect().unwrap();
        let east_bounds = east.bounding_rect().unwrap();
        assert!((west_bounds.max().x - 5.0).abs() < 1e-6);
        assert!((east_bounds.min().x - 5.0).abs() < 1e-6);

        assert!((west.unsigned_area() - 50.0).abs() < 0.1);
        assert!((east.unsigned_area() - 150.0).abs() < 0.1);
    }

    #[test]
    fn split_preserves_total_area() {
        let splitter = BoundarySplitter::new(vertical_boundary(12.0, -90.0, 90.0));
        let country = region(3.0, 2.0, 27.0, 14.0);

        let west = splitter.split(&country, Side::West);
        let east = splitter.split(&country, Side::East);
        let combined = west.union(&east);

        let total = country.unsigned_area();
        assert!((combined.unsigned_area() - total).abs() < total * 1e-6);
    }

    #[test]
    fn split_misses_boundary_returns_region_unchanged() {
        // Boundary entirely east of the region: the west clip keeps the
        // whole region, the east side falls back to the unchanged region
        let splitter = BoundarySplitter::new(vertical_boundary(50.0, -5.0, 15.0));
        let country = region(0.0, 0.0, 20.0, 10.0);

        let west = splitter.split(&country, Side::West);
        assert!((west.unsigned_area() - country.unsigned_area()).abs() < 1e-6);

        let east = splitter.split(&country, Side::East);
        assert!((east.unsigned_area() - country.unsigned_area()).abs() < 1e-6);
    }

    #[test]
    fn empty_boundary_returns_region_unchanged() {
        let splitter = BoundarySplitter::new(Vec::new());
        let country = region(0.0, 0.0, 20.0, 10.0);
        let west = splitter.split(&country, Side::West);
        assert_eq!(west.unsigned_area(), country.unsigned_area());
    }

    #[test]
    fn fallback_agrees_with_primary_on_vertical_boundary() {
        let splitter = BoundarySplitter::new(vertical_boundary(5.0, -5.0, 15.0));
        let country = region(0.0, 0.0, 20.0, 10.0);

        let primary_west = splitter.split(&country, Side::West);
        let fallback_west = splitter.fallback(&country, Side::West).unwrap();
        let fallback_east = splitter.fallback(&country, Side::East).unwrap();

        // Same side assignment: the fallback's western piece sits left of
        // the boundary, its eastern piece right of it
        assert!(fallback_west.bounding_rect().unwrap().max().x <= 5.01);
        assert!(fallback_east.bounding_rect().unwrap().min().x >= 4.99);
        assert!(
            (primary_west.unsigned_area() - fallback_west.unsigned_area()).abs()
                < country.unsigned_area() * 0.01
        );
    }

    #[test]
    fn ray_crossings_parity() {
        let splitter = BoundarySplitter::new(vertical_boundary(5.0, -5.0, 15.0));
        // West of the boundary: no crossing
        assert_eq!(splitter.ray_crossings(2.0, 5.0), 0);
        // East of the boundary: one crossing
        assert_eq!(splitter.ray_crossings(10.0, 5.0), 1);
    }

    #[test]
    fn absorb_window_moves_strays_west() {
        // Country made of three parts; the middle one is a stray sliver
        // that ended up outside the western result
        let country = dissolve(vec![
            region(0.0, 0.0, 5.0, 10.0),
            region(6.0, 0.0, 7.0, 10.0),
            region(10.0, 0.0, 20.0, 10.0),
        ]);
        let western = region(0.0, 0.0, 5.0, 10.0);
        let absorbed = absorb_lon_window(&country, &western, Side::West, 5.0, 8.0);
        assert!((absorbed.unsigned_area() - 60.0).abs() < 1e-6);
    }

    #[test]
    fn absorb_window_sheds_parts_east() {
        // Eastern result with a stray part inside the window
        let eastern = dissolve(vec![region(5.0, 0.0, 8.0, 10.0), region(10.0, 0.0, 20.0, 10.0)]);
        let country = region(0.0, 0.0, 20.0, 10.0);
        let shed = absorb_lon_window(&country, &eastern, Side::East, 5.0, 8.0);
        assert!((shed.unsigned_area() - 100.0).abs() < 1e-6);
        assert!(shed.bounding_rect().unwrap().min().x >= 10.0 - 1e-9);
    }
}
