//! # tccmap
//!
//! Builds one polygon (or point) per Travelers' Century Club destination
//! by combining and splitting Natural Earth country and province
//! polygons: direct code lookups, province dissolves, remainders,
//! transcontinental splits along the Europe-Asia boundary, Antarctic
//! sector wedges and island extraction by bounding box.

pub mod api;
pub mod boundary;
pub mod build;
pub mod catalog;
pub mod extract;
pub mod features;
pub mod geometry;
pub mod layers;

pub use crate::api::TccMap;

pub use boundary::{BoundarySplitter, Side};
pub use build::errors::{BuildError, BuildResult};
pub use build::{build_features, BuildFailure, BuildReport};
pub use catalog::{catalog, Destination, DestinationClass, Strategy};
pub use extract::{extract_feature, BuiltMap};
pub use features::{BuiltFeature, FeatureGeometry, FeatureProperties};
pub use geometry::BoundingBox;
pub use layers::{LayerRow, LayerSet, SourceLayer};
