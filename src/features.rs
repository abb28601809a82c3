//! Built features and their output properties
//!
//! Every successfully-extracted destination becomes a [`BuiltFeature`]:
//! the standard TCC properties plus either an areal geometry or a point
//! marker. Conversion to GeoJSON happens here so the extractors never
//! touch serialization.

use geo::{MultiPolygon, Point};
use geojson::{Feature, Geometry};
use serde::Serialize;

use crate::catalog::{Destination, DestinationClass};

/// Standard properties carried by every output feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureProperties {
    pub tcc_index: u16,
    pub name: String,
    pub region: String,
    pub iso_a2: Option<String>,
    pub iso_a3: Option<String>,
    pub iso_n3: Option<u16>,
    pub sovereign: String,
    #[serde(rename = "type")]
    pub class: DestinationClass,
    /// Marker features carry `is_point: true`; polygons omit the field
    #[serde(skip_serializing_if = "is_false")]
    pub is_point: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FeatureProperties {
    /// Build the standard properties for a destination
    pub fn for_destination(dest: &Destination) -> Self {
        FeatureProperties {
            tcc_index: dest.tcc_index,
            name: dest.name.to_string(),
            region: dest.region.to_string(),
            iso_a2: dest.iso_a2.map(str::to_string),
            iso_a3: dest.iso_a3.map(str::to_string),
            iso_n3: dest.iso_n3,
            sovereign: dest.sovereign.to_string(),
            class: dest.class,
            is_point: false,
        }
    }
}

/// Geometry of a built feature
#[derive(Debug, Clone)]
pub enum FeatureGeometry {
    /// A polygon or multipolygon destination
    Area(MultiPolygon<f64>),
    /// A point marker for destinations too small to draw
    Marker(Point<f64>),
}

/// A finished destination feature
#[derive(Debug, Clone)]
pub struct BuiltFeature {
    pub properties: FeatureProperties,
    pub geometry: FeatureGeometry,
}

impl BuiltFeature {
    /// Wrap an areal geometry with the destination's properties
    pub fn area(dest: &Destination, geometry: MultiPolygon<f64>) -> Self {
        BuiltFeature {
            properties: FeatureProperties::for_destination(dest),
            geometry: FeatureGeometry::Area(geometry),
        }
    }

    /// Wrap a point marker with the destination's properties
    pub fn marker(dest: &Destination, point: Point<f64>) -> Self {
        let mut properties = FeatureProperties::for_destination(dest);
        properties.is_point = true;
        BuiltFeature {
            properties,
            geometry: FeatureGeometry::Marker(point),
        }
    }

    /// The areal geometry, if this feature has one
    pub fn area_geometry(&self) -> Option<&MultiPolygon<f64>> {
        match &self.geometry {
            FeatureGeometry::Area(geom) => Some(geom),
            FeatureGeometry::Marker(_) => None,
        }
    }

    /// Convert to a GeoJSON feature
    pub fn to_geojson(&self) -> Feature {
        let value = match &self.geometry {
            FeatureGeometry::Area(geom) => geojson::Value::from(geom),
            FeatureGeometry::Marker(point) => geojson::Value::from(point),
        };
        let properties = match serde_json::to_value(&self.properties) {
            Ok(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        };
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(value)),
            id: None,
            properties,
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Strategy;
    use crate::geometry::BoundingBox;

    fn destination() -> Destination {
        Destination {
            tcc_index: 6,
            name: "Fiji Islands",
            region: "Pacific Ocean",
            iso_a2: Some("FJ"),
            iso_a3: Some("FJI"),
            iso_n3: Some(242),
            sovereign: "Fiji",
            class: DestinationClass::Country,
            strategy: Strategy::Direct {
                code: None,
                merge: &[],
            },
        }
    }

    #[test]
    fn area_feature_serializes_without_is_point() {
        let geom = MultiPolygon::new(vec![BoundingBox::new(0.0, 0.0, 1.0, 1.0).to_polygon()]);
        let feature = BuiltFeature::area(&destination(), geom);
        let json = serde_json::to_value(&feature.properties).unwrap();
        assert_eq!(json["tcc_index"], 6);
        assert_eq!(json["type"], "country");
        assert_eq!(json["iso_a3"], "FJI");
        assert!(json.get("is_point").is_none());
    }

    #[test]
    fn marker_feature_sets_is_point() {
        let feature = BuiltFeature::marker(&destination(), Point::new(177.0, -17.8));
        let json = serde_json::to_value(&feature.properties).unwrap();
        assert_eq!(json["is_point"], true);
    }

    #[test]
    fn missing_iso_codes_serialize_as_null() {
        let mut dest = destination();
        dest.iso_a2 = None;
        dest.iso_a3 = None;
        dest.iso_n3 = None;
        let feature = BuiltFeature::marker(&dest, Point::new(0.0, 0.0));
        let json = serde_json::to_value(&feature.properties).unwrap();
        assert!(json["iso_a2"].is_null());
        assert!(json["iso_n3"].is_null());
    }

    #[test]
    fn to_geojson_produces_feature_with_geometry() {
        let geom = MultiPolygon::new(vec![BoundingBox::new(0.0, 0.0, 1.0, 1.0).to_polygon()]);
        let feature = BuiltFeature::area(&destination(), geom).to_geojson();
        assert!(feature.geometry.is_some());
        let props = feature.properties.unwrap();
        assert_eq!(props["name"], "Fiji Islands");
    }
}
