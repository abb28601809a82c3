//! Main interface to the tccmap library

use std::fs;
use std::path::Path;

use geojson::FeatureCollection;
use log::info;

use crate::boundary::BoundarySplitter;
use crate::build::errors::BuildResult;
use crate::build::{build_features, BuildReport};
use crate::catalog;
use crate::extract::BuiltMap;
use crate::layers::{self, LayerSet};

/// Main interface to the tccmap library
pub struct TccMap {
    layers: LayerSet,
    splitter: BoundarySplitter,
}

impl TccMap {
    /// Load all source layers from a data directory
    ///
    /// # Arguments
    /// * `data_dir` - Directory holding the converted Natural Earth
    ///   GeoJSON files and the boundary line
    ///
    /// # Returns
    /// A TccMap instance, or an error when a layer is missing or unreadable
    pub fn load(data_dir: &Path) -> BuildResult<Self> {
        let layers = layers::load_dir(data_dir)?;
        let splitter = BoundarySplitter::new(layers.boundary.clone());
        Ok(TccMap { layers, splitter })
    }

    /// Build every destination in the catalog
    ///
    /// # Returns
    /// The index-to-feature map and the failure report
    pub fn build(&self) -> (BuiltMap, BuildReport) {
        build_features(catalog::catalog(), &self.layers, &self.splitter)
    }

    /// The loaded source layers
    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    /// Write built features to a GeoJSON FeatureCollection.
    ///
    /// Features are written in ascending index order; parent directories
    /// are created as needed.
    pub fn write_geojson(features: &BuiltMap, output_path: &Path) -> BuildResult<()> {
        let collection = FeatureCollection {
            bbox: None,
            features: features.values().map(|f| f.to_geojson()).collect(),
            foreign_members: None,
        };

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&collection)?;
        fs::write(output_path, &json)?;

        let size_mb = json.len() as f64 / (1024.0 * 1024.0);
        info!(
            "wrote {} features to {} ({:.1} MB)",
            features.len(),
            output_path.display(),
            size_mb
        );
        Ok(())
    }
}
