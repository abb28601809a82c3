//! Province selection and remainder extraction
//!
//! Destinations carved out of a country at the admin_1 level: dissolved
//! province groups, and the "everything else" remainders left after
//! subtracting provinces or disputed areas.

use std::collections::BTreeSet;

use geo::{BooleanOps, MultiPolygon, Validation};
use log::warn;

use crate::catalog::{Destination, Strategy};
use crate::features::BuiltFeature;
use crate::geometry::ops::{dissolve, repair};
use crate::layers::{
    dissolve_rows, LayerRow, LayerSet, SourceLayer, DISPUTED_SUBTRACT_FIELDS,
    PROVINCE_NAME_FIELDS,
};

/// Provinces of one country, with an ISO A2 fallback when the A3 filter
/// comes up empty.
fn country_provinces<'a>(
    layers: &'a LayerSet,
    dest: &Destination,
    country: &str,
) -> Vec<&'a LayerRow> {
    let rows = layers.admin1.rows_eq("adm0_a3", country);
    if !rows.is_empty() {
        return rows;
    }
    match dest.iso_a2 {
        Some(a2) => layers.admin1.rows_eq("iso_a2", a2),
        None => rows,
    }
}

/// Match provinces by name, case-insensitively.
///
/// Exact matches are accumulated across every name field first, so a
/// province whose accented name only appears in one field is still found
/// through whichever field stores the plain variant. Substring matching
/// runs only when the exact pass found nothing.
fn match_provinces<'a>(rows: &[&'a LayerRow], names: &[&str]) -> Vec<&'a LayerRow> {
    let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    let mut matched: BTreeSet<usize> = BTreeSet::new();

    for field in PROVINCE_NAME_FIELDS {
        for (i, row) in rows.iter().enumerate() {
            if let Some(value) = row.attr(field) {
                let value = value.to_lowercase();
                if lowered.iter().any(|n| *n == value) {
                    matched.insert(i);
                }
            }
        }
    }

    if matched.is_empty() {
        for field in PROVINCE_NAME_FIELDS {
            for (i, row) in rows.iter().enumerate() {
                if let Some(value) = row.attr(field) {
                    let value = value.to_lowercase();
                    if lowered.iter().any(|n| value.contains(n.as_str())) {
                        matched.insert(i);
                    }
                }
            }
        }
    }

    matched.into_iter().map(|i| rows[i]).collect()
}

/// Dissolve the disputed-layer features matching a name.
///
/// Tries each subtract field in order; the first field with any
/// case-insensitive substring hits wins.
pub(super) fn find_disputed_subtract(
    name: &str,
    disputed: &SourceLayer,
) -> Option<MultiPolygon<f64>> {
    for field in DISPUTED_SUBTRACT_FIELDS {
        let rows = disputed.rows_contains_ci(field, name);
        if !rows.is_empty() {
            return dissolve_rows(&rows);
        }
    }
    None
}

/// Select and dissolve named admin_1 provinces into a single feature
pub fn extract_admin1(dest: &Destination, layers: &LayerSet) -> Option<BuiltFeature> {
    let Strategy::Admin1 { country, provinces } = dest.strategy else {
        return None;
    };
    if provinces.is_empty() {
        return None;
    }

    let rows = country_provinces(layers, dest, country);
    let matched = match_provinces(&rows, provinces);
    if matched.is_empty() {
        warn!(
            "no province matches for {} (country={}, names={:?})",
            dest.name, country, provinces
        );
        return None;
    }

    let geom = dissolve_rows(&matched)?;
    Some(BuiltFeature::area(dest, geom))
}

/// Extract a country polygon minus named provinces and disputed areas.
///
/// Applied strictly in order: subtract provinces, subtract disputed
/// features, then merge disputed features back in.
pub fn extract_remainder(dest: &Destination, layers: &LayerSet) -> Option<BuiltFeature> {
    let Strategy::Remainder {
        country,
        subtract_provinces,
        subtract_disputed,
        merge_disputed,
    } = dest.strategy
    else {
        return None;
    };

    let Some(country_geom) = super::country_geom(country, layers) else {
        warn!("could not find country {} for {}", country, dest.name);
        return None;
    };
    let mut result = country_geom;

    if !subtract_provinces.is_empty() {
        let rows = layers.admin1.rows_eq("adm0_a3", country);
        let matched = match_provinces(&rows, subtract_provinces);
        if matched.is_empty() {
            warn!("no provinces to subtract for {}", dest.name);
        } else if let Some(geom) = dissolve_rows(&matched) {
            result = result.difference(&repair(&geom));
        }
    }

    for name in subtract_disputed {
        if let Some(geom) = find_disputed_subtract(name, &layers.disputed) {
            result = result.difference(&repair(&geom));
        }
    }

    for name in merge_disputed {
        if let Some(geom) = find_disputed_subtract(name, &layers.disputed) {
            result = result.union(&geom);
        }
    }

    if result.0.is_empty() {
        warn!("remainder is empty for {}", dest.name);
        return None;
    }
    if !result.is_valid() {
        result = repair(&result);
    }

    Some(BuiltFeature::area(dest, result))
}

/// Extract a country polygon minus named disputed-layer features.
///
/// Returns the unmodified country geometry when the recipe names nothing
/// or nothing matches.
pub fn extract_disputed_remainder(dest: &Destination, layers: &LayerSet) -> Option<BuiltFeature> {
    let Strategy::DisputedRemainder { country, subtract } = dest.strategy else {
        return None;
    };

    let country_geom = super::country_geom(country, layers)?;
    if subtract.is_empty() {
        return Some(BuiltFeature::area(dest, country_geom));
    }

    let subtrahends: Vec<MultiPolygon<f64>> = subtract
        .iter()
        .filter_map(|name| find_disputed_subtract(name, &layers.disputed))
        .collect();
    if subtrahends.is_empty() {
        return Some(BuiltFeature::area(dest, country_geom));
    }

    let mut result = country_geom.difference(&repair(&dissolve(subtrahends)));
    if result.0.is_empty() {
        warn!("disputed remainder is empty for {}", dest.name);
        return None;
    }
    if !result.is_valid() {
        result = repair(&result);
    }

    Some(BuiltFeature::area(dest, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_support::*;
    use geo::Area;

    fn layers_with_provinces() -> LayerSet {
        let mut layers = empty_layers();
        layers
            .units
            .rows
            .push(row(boxed(10.0, 10.0, 20.0, 20.0), &[("ADM0_A3", "AAA")]));
        layers.admin1.rows.push(row(
            boxed(10.0, 15.0, 20.0, 20.0),
            &[("adm0_a3", "AAA"), ("name", "North Province")],
        ));
        layers.admin1.rows.push(row(
            boxed(10.0, 10.0, 20.0, 15.0),
            &[("adm0_a3", "AAA"), ("name", "South Province")],
        ));
        layers
    }

    #[test]
    fn admin1_dissolves_named_provinces() {
        let layers = layers_with_provinces();
        let dest = destination(
            410,
            "North Province",
            Strategy::Admin1 { country: "AAA", provinces: &["North Province"] },
        );
        let feature = extract_admin1(&dest, &layers).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn admin1_exact_match_wins_over_contains() {
        let mut layers = layers_with_provinces();
        layers.admin1.rows.push(row(
            boxed(30.0, 30.0, 31.0, 31.0),
            &[("adm0_a3", "AAA"), ("name", "North Province Extension")],
        ));
        let dest = destination(
            411,
            "North Province",
            Strategy::Admin1 { country: "AAA", provinces: &["North Province"] },
        );
        // Exact pass finds one row, so the contains pass never runs
        let feature = extract_admin1(&dest, &layers).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn admin1_contains_pass_runs_when_exact_fails() {
        let layers = layers_with_provinces();
        let dest = destination(
            412,
            "North",
            Strategy::Admin1 { country: "AAA", provinces: &["north prov"] },
        );
        assert!(extract_admin1(&dest, &layers).is_some());
    }

    #[test]
    fn admin1_missing_provinces_is_absent() {
        let layers = layers_with_provinces();
        let dest = destination(
            413,
            "Ghost",
            Strategy::Admin1 { country: "AAA", provinces: &["Ghost Province"] },
        );
        assert!(extract_admin1(&dest, &layers).is_none());
    }

    #[test]
    fn remainder_subtracts_province_area() {
        // Country 10x10 (area 100) minus its northern half (area 50)
        let layers = layers_with_provinces();
        let dest = destination(
            414,
            "Mainland",
            Strategy::Remainder {
                country: "AAA",
                subtract_provinces: &["North Province"],
                subtract_disputed: &[],
                merge_disputed: &[],
            },
        );
        let feature = extract_remainder(&dest, &layers).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 50.0).abs() < 0.01);
    }

    #[test]
    fn remainder_subtracts_and_merges_disputed() {
        let mut layers = layers_with_provinces();
        layers.disputed.rows.push(row(
            boxed(10.0, 10.0, 12.0, 12.0),
            &[("NAME", "Contested Corner")],
        ));
        layers.disputed.rows.push(row(
            boxed(20.0, 10.0, 22.0, 12.0),
            &[("BRK_NAME", "Annexed Strip")],
        ));
        let dest = destination(
            415,
            "Mainland",
            Strategy::Remainder {
                country: "AAA",
                subtract_provinces: &[],
                subtract_disputed: &["Contested Corner"],
                merge_disputed: &["Annexed Strip"],
            },
        );
        let feature = extract_remainder(&dest, &layers).unwrap();
        // 100 - 4 + 4
        assert!((feature.area_geometry().unwrap().unsigned_area() - 100.0).abs() < 0.01);
    }

    #[test]
    fn remainder_missing_country_is_absent() {
        let layers = layers_with_provinces();
        let dest = destination(
            416,
            "Nowhere",
            Strategy::Remainder {
                country: "ZZZ",
                subtract_provinces: &["North Province"],
                subtract_disputed: &[],
                merge_disputed: &[],
            },
        );
        assert!(extract_remainder(&dest, &layers).is_none());
    }

    #[test]
    fn disputed_remainder_subtracts_matches() {
        let mut layers = layers_with_provinces();
        layers.disputed.rows.push(row(
            boxed(10.0, 10.0, 15.0, 20.0),
            &[("NAME", "Western Claim")],
        ));
        let dest = destination(
            417,
            "Recognized Part",
            Strategy::DisputedRemainder { country: "AAA", subtract: &["Western Claim"] },
        );
        let feature = extract_disputed_remainder(&dest, &layers).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 50.0).abs() < 0.01);
    }

    #[test]
    fn disputed_remainder_without_matches_keeps_country() {
        let layers = layers_with_provinces();
        let dest = destination(
            418,
            "Whole Country",
            Strategy::DisputedRemainder { country: "AAA", subtract: &["No Such Claim"] },
        );
        let feature = extract_disputed_remainder(&dest, &layers).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 100.0).abs() < 1e-9);
    }
}
