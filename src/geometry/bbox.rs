//! Geographic bounding box for island extraction

use geo::{coord, Contains, Intersects, LineString, Point, Polygon};

/// A bounding box in (longitude, latitude) degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western longitude bound
    pub west: f64,
    /// Southern latitude bound
    pub south: f64,
    /// Eastern longitude bound
    pub east: f64,
    /// Northern latitude bound
    pub north: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        BoundingBox {
            west,
            south,
            east,
            north,
        }
    }

    /// Get the width of the bounding box in degrees
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Get the height of the bounding box in degrees
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Check if this bounding box contains a point
    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        point.x() >= self.west
            && point.x() <= self.east
            && point.y() >= self.south
            && point.y() <= self.north
    }

    /// Convert to a rectangular polygon
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(
            LineString::new(vec![
                coord! { x: self.west, y: self.south },
                coord! { x: self.east, y: self.south },
                coord! { x: self.east, y: self.north },
                coord! { x: self.west, y: self.north },
                coord! { x: self.west, y: self.south },
            ]),
            Vec::new(),
        )
    }

    /// Check if this bounding box intersects a polygon
    pub fn intersects(&self, polygon: &Polygon<f64>) -> bool {
        self.to_polygon().intersects(polygon)
    }

    /// Check if this bounding box fully contains a polygon
    pub fn contains_polygon(&self, polygon: &Polygon<f64>) -> bool {
        self.to_polygon().contains(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn contains_point() {
        let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0);
        assert!(bbox.contains_point(&Point::new(0.0, 0.0)));
        assert!(bbox.contains_point(&Point::new(-10.0, 5.0)));
        assert!(!bbox.contains_point(&Point::new(11.0, 0.0)));
        assert!(!bbox.contains_point(&Point::new(0.0, -6.0)));
    }

    #[test]
    fn polygon_area_matches_extent() {
        let bbox = BoundingBox::new(0.0, 0.0, 20.0, 10.0);
        assert_eq!(bbox.width(), 20.0);
        assert_eq!(bbox.height(), 10.0);
        let poly = bbox.to_polygon();
        assert!((poly.unsigned_area() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn intersects_overlapping_polygon() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let other = BoundingBox::new(5.0, 5.0, 15.0, 15.0).to_polygon();
        let disjoint = BoundingBox::new(20.0, 20.0, 30.0, 30.0).to_polygon();
        assert!(bbox.intersects(&other));
        assert!(!bbox.intersects(&disjoint));
    }
}
