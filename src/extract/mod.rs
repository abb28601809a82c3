//! Strategy functions mapping destinations to geometries
//!
//! One pure function per extraction strategy. Every function takes the
//! destination record and the read-only source layers and returns the
//! built feature, or `None` when the destination cannot be produced;
//! failures never panic and never abort the surrounding build.

pub mod admin;
pub mod antarctic;
pub mod clip;
pub mod direct;
pub mod disputed;
pub mod islands;

use std::collections::BTreeMap;

use geo::{MultiPolygon, Point};

use crate::boundary::BoundarySplitter;
use crate::catalog::{Destination, Strategy};
use crate::features::BuiltFeature;
use crate::layers::{LayerSet, COUNTRY_CODE_FIELDS};

/// Features already built, keyed by destination index
pub type BuiltMap = BTreeMap<u16, BuiltFeature>;

/// Dispatch a destination to its strategy function.
///
/// `built` supplies already-built features for strategies that subtract
/// sibling destinations; `antarctica` is the dissolved coastline used by
/// the Antarctic strategy.
pub fn extract_feature(
    dest: &Destination,
    layers: &LayerSet,
    splitter: &BoundarySplitter,
    built: &BuiltMap,
    antarctica: Option<&MultiPolygon<f64>>,
) -> Option<BuiltFeature> {
    match &dest.strategy {
        Strategy::Direct { .. } => direct::extract_direct(dest, layers),
        Strategy::Subunit { .. } => direct::extract_subunit(dest, layers),
        Strategy::Admin1 { .. } => admin::extract_admin1(dest, layers),
        Strategy::Remainder { .. } => admin::extract_remainder(dest, layers),
        Strategy::DisputedRemainder { .. } => admin::extract_disputed_remainder(dest, layers),
        Strategy::GroupRemainder { .. } => islands::extract_group_remainder(dest, layers, built),
        Strategy::Clip { .. } => clip::extract_clip(dest, layers, splitter, built),
        Strategy::Disputed { .. } => disputed::extract_disputed(dest, layers),
        Strategy::IslandBbox { .. } => islands::extract_island_bbox(dest, layers),
        Strategy::Antarctic { .. } => antarctic::extract_antarctic(dest, antarctica),
        Strategy::Point { .. } => extract_point(dest),
    }
}

/// Wrap a literal coordinate pair as a point-marker feature
pub fn extract_point(dest: &Destination) -> Option<BuiltFeature> {
    let Strategy::Point { lat, lon } = dest.strategy else {
        return None;
    };
    Some(BuiltFeature::marker(dest, Point::new(lon, lat)))
}

/// Resolve a whole country geometry from the admin_0 layers by A3 code.
///
/// Searches the subunits layer first, then units, across the standard
/// country code fields, dissolving multi-row matches.
pub(crate) fn country_geom(code: &str, layers: &LayerSet) -> Option<MultiPolygon<f64>> {
    for layer in [&layers.subunits, &layers.units] {
        for field in COUNTRY_CODE_FIELDS {
            if let Some(geom) = layer.dissolve_eq(field, code) {
                return Some(geom);
            }
        }
    }
    None
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn country_geom_prefers_subunits_layer() {
        let mut layers = empty_layers();
        layers
            .subunits
            .rows
            .push(row(boxed(0.0, 0.0, 1.0, 1.0), &[("ADM0_A3", "AAA")]));
        layers
            .units
            .rows
            .push(row(boxed(10.0, 10.0, 12.0, 12.0), &[("ADM0_A3", "AAA")]));

        let geom = country_geom("AAA", &layers).unwrap();
        use geo::BoundingRect;
        assert!(geom.bounding_rect().unwrap().max().x < 2.0);
    }

    #[test]
    fn country_geom_falls_through_to_units() {
        let mut layers = empty_layers();
        layers
            .units
            .rows
            .push(row(boxed(0.0, 0.0, 1.0, 1.0), &[("GU_A3", "BBB")]));
        assert!(country_geom("BBB", &layers).is_some());
        assert!(country_geom("CCC", &layers).is_none());
    }

    #[test]
    fn point_strategy_builds_marker() {
        let dest = destination(
            500,
            "Tiny Atoll",
            Strategy::Point {
                lat: -9.2,
                lon: -171.8,
            },
        );
        let feature = extract_point(&dest).unwrap();
        assert!(feature.properties.is_point);
        match feature.geometry {
            crate::features::FeatureGeometry::Marker(p) => {
                assert_eq!(p.x(), -171.8);
                assert_eq!(p.y(), -9.2);
            }
            _ => panic!("expected a marker geometry"),
        }
    }
}
