//! Transcontinental clips along the Europe-Asia boundary
//!
//! Russia and Turkey each appear twice in the catalog, once per
//! continent. Their recipes delegate to the boundary splitter, then
//! optionally reassign ridge slivers, subtract sibling destinations and
//! subtract named subunits (Crimea out of European Russia).

use geo::{BooleanOps, MultiPolygon, Validation};
use log::warn;

use crate::boundary::{absorb_lon_window, BoundarySplitter};
use crate::catalog::{Destination, Strategy};
use crate::features::BuiltFeature;
use crate::geometry::ops::{dissolve, repair};
use crate::layers::LayerSet;

use super::BuiltMap;

/// Clip a country polygon to one side of the boundary
pub fn extract_clip(
    dest: &Destination,
    layers: &LayerSet,
    splitter: &BoundarySplitter,
    built: &BuiltMap,
) -> Option<BuiltFeature> {
    let Strategy::Clip {
        country,
        side,
        absorb,
        subtract,
        subtract_codes,
    } = dest.strategy
    else {
        return None;
    };

    let Some(country_geom) = super::country_geom(country, layers) else {
        warn!("could not find {} for clip", country);
        return None;
    };

    let mut result = splitter.split(&country_geom, side);
    if result.0.is_empty() {
        warn!("clip result empty for {}", dest.name);
        return None;
    }

    if let Some((window_west, window_east)) = absorb {
        result = absorb_lon_window(&country_geom, &result, side, window_west, window_east);
    }

    if !subtract.is_empty() {
        let siblings: Vec<MultiPolygon<f64>> = subtract
            .iter()
            .filter_map(|index| built.get(index))
            .filter_map(|feature| feature.area_geometry().cloned())
            .collect();
        if !siblings.is_empty() {
            result = result.difference(&repair(&dissolve(siblings)));
            if result.0.is_empty() {
                warn!("clip result empty after sibling subtraction for {}", dest.name);
                return None;
            }
            if !result.is_valid() {
                result = repair(&result);
            }
        }
    }

    if !subtract_codes.is_empty() {
        let subunits: Vec<MultiPolygon<f64>> = subtract_codes
            .iter()
            .filter_map(|code| layers.subunits.dissolve_eq("SU_A3", code))
            .collect();
        if !subunits.is_empty() {
            result = result.difference(&repair(&dissolve(subunits)));
            if result.0.is_empty() {
                warn!("clip result empty after subunit subtraction for {}", dest.name);
                return None;
            }
            if !result.is_valid() {
                result = repair(&result);
            }
        }
    }

    Some(BuiltFeature::area(dest, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Side;
    use crate::extract::test_support::*;
    use geo::{line_string, Area};

    fn clip_fixture() -> (LayerSet, BoundarySplitter) {
        let mut layers = empty_layers();
        layers
            .units
            .rows
            .push(row(boxed(0.0, 0.0, 20.0, 10.0), &[("ADM0_A3", "SPA")]));
        let splitter =
            BoundarySplitter::new(vec![line_string![(x: 5.0, y: -5.0), (x: 5.0, y: 15.0)]]);
        (layers, splitter)
    }

    #[test]
    fn clip_keeps_requested_side() {
        let (layers, splitter) = clip_fixture();
        let dest = destination(
            440,
            "Spanning West",
            Strategy::Clip {
                country: "SPA",
                side: Side::West,
                absorb: None,
                subtract: &[],
                subtract_codes: &[],
            },
        );
        let feature = extract_clip(&dest, &layers, &splitter, &BuiltMap::new()).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 50.0).abs() < 0.1);
    }

    #[test]
    fn clip_subtracts_built_siblings() {
        let (layers, splitter) = clip_fixture();
        let sibling = destination(441, "Enclave", Strategy::Direct { code: None, merge: &[] });
        let mut built = BuiltMap::new();
        built.insert(441, BuiltFeature::area(&sibling, boxed(0.0, 0.0, 2.0, 2.0)));

        let dest = destination(
            442,
            "Spanning West",
            Strategy::Clip {
                country: "SPA",
                side: Side::West,
                absorb: None,
                subtract: &[441],
                subtract_codes: &[],
            },
        );
        let feature = extract_clip(&dest, &layers, &splitter, &built).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 46.0).abs() < 0.1);
    }

    #[test]
    fn clip_subtracts_subunits_by_code() {
        let (mut layers, splitter) = clip_fixture();
        layers
            .subunits
            .rows
            .push(row(boxed(6.0, 0.0, 8.0, 2.0), &[("SU_A3", "ENC")]));

        let dest = destination(
            443,
            "Spanning East",
            Strategy::Clip {
                country: "SPA",
                side: Side::East,
                absorb: None,
                subtract: &[],
                subtract_codes: &["ENC"],
            },
        );
        let feature = extract_clip(&dest, &layers, &splitter, &BuiltMap::new()).unwrap();
        // Eastern part is 150, minus the 4-square subunit
        assert!((feature.area_geometry().unwrap().unsigned_area() - 146.0).abs() < 0.1);
    }

    #[test]
    fn clip_missing_country_is_absent() {
        let (layers, splitter) = clip_fixture();
        let dest = destination(
            444,
            "Nowhere",
            Strategy::Clip {
                country: "QQQ",
                side: Side::West,
                absorb: None,
                subtract: &[],
                subtract_codes: &[],
            },
        );
        assert!(extract_clip(&dest, &layers, &splitter, &BuiltMap::new()).is_none());
    }
}
