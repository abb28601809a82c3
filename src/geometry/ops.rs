//! Polygon set operations on top of the `geo` boolean-overlay kernel
//!
//! Dissolve, repair and the strip builder all normalize their results
//! through the overlay fill rule, which resolves self-intersections the
//! same way a zero-width buffer does in other GIS stacks.

use geo::{BooleanOps, Centroid, Coord, Geometry, MultiPolygon, Polygon, Validation};

/// Union a collection of multipolygons into a single geometry.
///
/// Returns an empty multipolygon for an empty input.
pub fn dissolve<I>(geometries: I) -> MultiPolygon<f64>
where
    I: IntoIterator<Item = MultiPolygon<f64>>,
{
    let mut result = MultiPolygon::new(Vec::new());
    for geom in geometries {
        if result.0.is_empty() {
            result = geom;
        } else {
            result = result.union(&geom);
        }
    }
    result
}

/// Fix an invalid (self-intersecting) multipolygon.
///
/// Valid input is returned unchanged. Invalid input is re-run through the
/// boolean overlay, which rebuilds the rings under the fill rule; the result
/// may legitimately be empty when the input had no net area.
pub fn repair(geom: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    if geom.is_valid() {
        return geom.clone();
    }
    geom.union(&MultiPolygon::new(Vec::new()))
}

/// Extract every polygon from any geometry, recursing into collections.
///
/// Points and lines are discarded; multipolygons are flattened.
pub fn collect_polygons(geom: &Geometry<f64>) -> Vec<Polygon<f64>> {
    match geom {
        Geometry::Polygon(p) => vec![p.clone()],
        Geometry::MultiPolygon(mp) => mp.0.clone(),
        Geometry::GeometryCollection(gc) => {
            gc.0.iter().flat_map(collect_polygons).collect()
        }
        _ => Vec::new(),
    }
}

/// Split multipolygon parts by whether their centroid longitude falls in
/// `[west, east]`. Returns `(inside, outside)`.
pub fn split_parts_by_lon(
    geom: &MultiPolygon<f64>,
    west: f64,
    east: f64,
) -> (Vec<Polygon<f64>>, Vec<Polygon<f64>>) {
    let mut inside = Vec::new();
    let mut outside = Vec::new();
    for part in &geom.0 {
        let lon = part.centroid().map(|c| c.x());
        match lon {
            Some(x) if x >= west && x <= east => inside.push(part.clone()),
            _ => outside.push(part.clone()),
        }
    }
    (inside, outside)
}

/// Build a thin area strip covering a set of polyline chains.
///
/// Each segment becomes a rectangle of `half_width` on either side, extended
/// by `half_width` past both endpoints so consecutive rectangles overlap at
/// the joints; the rectangles are unioned into one strip.
pub fn polyline_strip(chains: &[Vec<Coord<f64>>], half_width: f64) -> MultiPolygon<f64> {
    let mut quads: Vec<MultiPolygon<f64>> = Vec::new();
    for chain in chains {
        for pair in chain.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let len = (dx * dx + dy * dy).sqrt();
            if len == 0.0 {
                continue;
            }
            let (ux, uy) = (dx / len, dy / len);
            let (nx, ny) = (-uy * half_width, ux * half_width);
            // Square end caps so adjacent segments stay connected
            let ax = a.x - ux * half_width;
            let ay = a.y - uy * half_width;
            let bx = b.x + ux * half_width;
            let by = b.y + uy * half_width;
            let quad = Polygon::new(
                geo::LineString::new(vec![
                    Coord { x: ax + nx, y: ay + ny },
                    Coord { x: bx + nx, y: by + ny },
                    Coord { x: bx - nx, y: by - ny },
                    Coord { x: ax - nx, y: ay - ny },
                    Coord { x: ax + nx, y: ay + ny },
                ]),
                Vec::new(),
            );
            quads.push(MultiPolygon::new(vec![quad]));
        }
    }
    dissolve(quads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use geo::Area;

    fn square(west: f64, south: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![
            BoundingBox::new(west, south, west + size, south + size).to_polygon(),
        ])
    }

    #[test]
    fn dissolve_disjoint_squares_sums_area() {
        let merged = dissolve(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]);
        assert_eq!(merged.0.len(), 2);
        assert!((merged.unsigned_area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn dissolve_overlapping_squares_merges() {
        let merged = dissolve(vec![square(0.0, 0.0, 2.0), square(1.0, 0.0, 2.0)]);
        assert_eq!(merged.0.len(), 1);
        assert!((merged.unsigned_area() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn dissolve_empty_input() {
        let merged = dissolve(Vec::new());
        assert!(merged.0.is_empty());
    }

    #[test]
    fn repair_keeps_valid_geometry() {
        let sq = square(0.0, 0.0, 4.0);
        let repaired = repair(&sq);
        assert_eq!(repaired, sq);
    }

    #[test]
    fn repair_resolves_bowtie() {
        // Self-intersecting "bowtie" ring: two triangles pinched at (1, 1)
        let bowtie = MultiPolygon::new(vec![Polygon::new(
            geo::LineString::new(vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 2.0, y: 2.0 },
                Coord { x: 2.0, y: 0.0 },
                Coord { x: 0.0, y: 2.0 },
                Coord { x: 0.0, y: 0.0 },
            ]),
            Vec::new(),
        )]);
        let repaired = repair(&bowtie);
        assert!(repaired.is_valid());
        assert!(repaired.unsigned_area() > 0.0);
    }

    #[test]
    fn collect_polygons_flattens() {
        let single = Geometry::Polygon(BoundingBox::new(0.0, 0.0, 1.0, 1.0).to_polygon());
        assert_eq!(collect_polygons(&single).len(), 1);

        let multi = Geometry::MultiPolygon(dissolve(vec![
            square(0.0, 0.0, 1.0),
            square(3.0, 3.0, 1.0),
        ]));
        assert_eq!(collect_polygons(&multi).len(), 2);

        let line = Geometry::LineString(geo::LineString::new(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
        ]));
        assert!(collect_polygons(&line).is_empty());
    }

    #[test]
    fn split_parts_by_lon_window() {
        let geom = dissolve(vec![square(0.0, 0.0, 1.0), square(10.0, 0.0, 1.0)]);
        let (inside, outside) = split_parts_by_lon(&geom, 9.0, 12.0);
        assert_eq!(inside.len(), 1);
        assert_eq!(outside.len(), 1);
    }

    #[test]
    fn polyline_strip_covers_segment() {
        let chain = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
        ];
        let strip = polyline_strip(&[chain], 0.5);
        assert!(!strip.0.is_empty());
        // 11 long (extended by 0.5 each end) and 1 wide
        assert!((strip.unsigned_area() - 11.0).abs() < 1e-6);
    }
}
