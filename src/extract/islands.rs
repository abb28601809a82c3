//! Island extraction by bounding box and group remainders
//!
//! Destinations that are a handful of islands inside a larger parent
//! feature (Easter Island, Socotra, the Chathams) are selected by
//! centroid-in-box; the parents that remain after their islands were
//! carved off are group remainders built in the second pass.

use geo::{BooleanOps, Centroid, MultiPolygon, Polygon, Validation};
use log::warn;

use crate::catalog::{Destination, Strategy};
use crate::features::BuiltFeature;
use crate::geometry::ops::{dissolve, repair};
use crate::geometry::BoundingBox;
use crate::layers::{dissolve_rows, LayerRow, LayerSet, PROVINCE_NAME_FIELDS};

use super::BuiltMap;

/// Resolve a province geometry by country code and province name
fn admin1_geom(layers: &LayerSet, country: &str, name: &str) -> Option<MultiPolygon<f64>> {
    let rows = layers.admin1.rows_eq("adm0_a3", country);
    let lowered = name.to_lowercase();

    for field in PROVINCE_NAME_FIELDS {
        let matched: Vec<&LayerRow> = rows
            .iter()
            .copied()
            .filter(|row| {
                row.attr(field)
                    .map(|v| v.to_lowercase() == lowered)
                    .unwrap_or(false)
            })
            .collect();
        if !matched.is_empty() {
            return dissolve_rows(&matched);
        }
    }
    None
}

/// Select the polygon parts of a geometry that fall inside a bounding box.
///
/// Centroid containment first; when no centroid qualifies, an intersects
/// test catches parts that straddle the box edge.
fn select_parts_in_bbox(geom: &MultiPolygon<f64>, bbox: &BoundingBox) -> Option<MultiPolygon<f64>> {
    let mut matches: Vec<Polygon<f64>> = geom
        .0
        .iter()
        .filter(|part| {
            part.centroid()
                .map(|c| bbox.contains_point(&c))
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        matches = geom
            .0
            .iter()
            .filter(|part| bbox.intersects(part))
            .cloned()
            .collect();
    }

    if matches.is_empty() {
        None
    } else {
        Some(MultiPolygon::new(matches))
    }
}

/// Extract island polygons from a parent feature by bounding box
pub fn extract_island_bbox(dest: &Destination, layers: &LayerSet) -> Option<BuiltFeature> {
    let Strategy::IslandBbox {
        country,
        province,
        bbox,
    } = dest.strategy
    else {
        return None;
    };

    let parent = match province {
        Some(province) => admin1_geom(layers, country, province),
        None => super::country_geom(country, layers),
    };
    let Some(parent) = parent else {
        warn!("parent feature not found for {}", dest.name);
        return None;
    };

    let Some(selected) = select_parts_in_bbox(&parent, &bbox) else {
        warn!("no polygons in bbox for {}", dest.name);
        return None;
    };

    Some(BuiltFeature::area(dest, selected))
}

/// Extract the remainder of a country after subtracting sibling
/// destinations' already-built geometries.
///
/// A sibling missing from the built map contributes nothing; the feature
/// is still produced from whatever remains.
pub fn extract_group_remainder(
    dest: &Destination,
    layers: &LayerSet,
    built: &BuiltMap,
) -> Option<BuiltFeature> {
    let Strategy::GroupRemainder { country, subtract } = dest.strategy else {
        return None;
    };

    let country_geom = super::country_geom(country, layers)?;
    if subtract.is_empty() {
        return Some(BuiltFeature::area(dest, country_geom));
    }

    let siblings: Vec<MultiPolygon<f64>> = subtract
        .iter()
        .filter_map(|index| built.get(index))
        .filter_map(|feature| feature.area_geometry().cloned())
        .collect();
    if siblings.is_empty() {
        return Some(BuiltFeature::area(dest, country_geom));
    }

    let mut result = country_geom.difference(&repair(&dissolve(siblings)));
    if !result.is_valid() {
        result = repair(&result);
    }
    if result.0.is_empty() {
        warn!("group remainder is empty for {}", dest.name);
        return None;
    }

    Some(BuiltFeature::area(dest, result))
}
