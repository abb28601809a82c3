//! GeoJSON loading for the Natural Earth source layers
//!
//! The build consumes the 10m admin layers converted from shapefile to
//! GeoJSON (one FeatureCollection per file) plus the Europe-Asia boundary
//! line. Conversion from the upstream shapefiles is a separate concern;
//! this loader only reads the converted files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use geo::{Geometry, LineString, MultiPolygon};
use geojson::{FeatureCollection, GeoJson};
use log::info;

use crate::build::errors::{BuildError, BuildResult};
use crate::geometry::ops::collect_polygons;

use super::{LayerRow, LayerSet, SourceLayer};

/// File names expected inside the data directory
pub const SUBUNITS_FILE: &str = "ne_10m_admin_0_map_subunits.geojson";
pub const UNITS_FILE: &str = "ne_10m_admin_0_map_units.geojson";
pub const ADMIN1_FILE: &str = "ne_10m_admin_1_states_provinces.geojson";
pub const DISPUTED_FILE: &str = "ne_10m_admin_0_disputed_areas.geojson";
pub const BOUNDARY_FILE: &str = "europe_asia_boundary.geojson";

/// Load all source layers from a data directory
pub fn load_dir(dir: &Path) -> BuildResult<LayerSet> {
    info!("loading source data from {}", dir.display());
    let subunits = load_polygon_layer(&dir.join(SUBUNITS_FILE), "subunits")?;
    let units = load_polygon_layer(&dir.join(UNITS_FILE), "units")?;
    let admin1 = load_polygon_layer(&dir.join(ADMIN1_FILE), "admin1")?;
    let disputed = load_polygon_layer(&dir.join(DISPUTED_FILE), "disputed")?;
    let boundary = load_boundary(&dir.join(BOUNDARY_FILE))?;

    Ok(LayerSet {
        subunits,
        units,
        admin1,
        disputed,
        boundary,
    })
}

/// Parse a GeoJSON file into a FeatureCollection
fn read_collection(path: &Path) -> BuildResult<FeatureCollection> {
    let content = fs::read_to_string(path).map_err(|e| {
        BuildError::InvalidLayer(format!("cannot read {}: {}", path.display(), e))
    })?;
    let geojson: GeoJson = content.parse()?;
    let collection = FeatureCollection::try_from(geojson)?;
    Ok(collection)
}

/// Load a polygon layer, one row per feature.
///
/// Rows whose geometry is not areal are kept with empty geometry so their
/// attributes still participate in lookups.
fn load_polygon_layer(path: &Path, name: &str) -> BuildResult<SourceLayer> {
    let collection = read_collection(path)?;
    let mut rows = Vec::with_capacity(collection.features.len());

    for feature in collection.features {
        let geometry = match feature.geometry {
            Some(geom) => {
                let converted = Geometry::<f64>::try_from(geom.value)?;
                MultiPolygon::new(collect_polygons(&converted))
            }
            None => MultiPolygon::new(Vec::new()),
        };
        let attrs = feature
            .properties
            .map(properties_to_attrs)
            .unwrap_or_default();
        rows.push(LayerRow::new(geometry, attrs));
    }

    info!("  {}: {} features", name, rows.len());
    Ok(SourceLayer::new(name, rows))
}

/// Load the boundary line as raw LineString segments
fn load_boundary(path: &Path) -> BuildResult<Vec<LineString<f64>>> {
    let collection = read_collection(path)?;
    let mut segments = Vec::new();

    for feature in collection.features {
        let Some(geom) = feature.geometry else {
            continue;
        };
        match Geometry::<f64>::try_from(geom.value)? {
            Geometry::LineString(line) => segments.push(line),
            Geometry::MultiLineString(lines) => segments.extend(lines.0),
            _ => {}
        }
    }

    if segments.is_empty() {
        return Err(BuildError::InvalidLayer(format!(
            "no line segments in {}",
            path.display()
        )));
    }
    info!("  boundary: {} segments", segments.len());
    Ok(segments)
}

/// Flatten GeoJSON properties into string attributes.
///
/// Nulls, arrays and nested objects are dropped; the extractors only query
/// code and name fields.
fn properties_to_attrs(properties: geojson::JsonObject) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for (key, value) in properties {
        match value {
            serde_json::Value::String(s) => {
                attrs.insert(key, s);
            }
            serde_json::Value::Number(n) => {
                attrs.insert(key, n.to_string());
            }
            serde_json::Value::Bool(b) => {
                attrs.insert(key, b.to_string());
            }
            _ => {}
        }
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_polygon_features_with_attrs() {
        let path = write_temp(
            "tccmap_loader_poly.geojson",
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"ADM0_A3":"FRA","NAME":"France","scalerank":0},
                 "geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]]]}}
            ]}"#,
        );
        let layer = load_polygon_layer(&path, "units").unwrap();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.rows[0].attr("ADM0_A3"), Some("FRA"));
        assert_eq!(layer.rows[0].attr("scalerank"), Some("0"));
        assert_eq!(layer.rows[0].geometry.0.len(), 1);
    }

    #[test]
    fn loads_boundary_segments() {
        let path = write_temp(
            "tccmap_loader_boundary.geojson",
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{},
                 "geometry":{"type":"LineString","coordinates":[[26,40],[40,44]]}},
                {"type":"Feature","properties":{},
                 "geometry":{"type":"MultiLineString","coordinates":[[[50,50],[60,68]],[[60,68],[68,77]]]}}
            ]}"#,
        );
        let segments = load_boundary(&path).unwrap();
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_polygon_layer(Path::new("/nonexistent/layer.geojson"), "units");
        assert!(result.is_err());
    }
}
