//! Geometry helpers shared across the extraction pipeline
//!
//! This module provides the small set of polygon operations the extractors
//! need on top of the `geo` kernel: bounding boxes, dissolve, repair and
//! polygon-part filtering.

pub mod bbox;
pub mod ops;

pub use bbox::BoundingBox;
pub use ops::{collect_polygons, dissolve, polyline_strip, repair};
