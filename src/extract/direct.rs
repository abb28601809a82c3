//! Direct admin_0 feature extraction
//!
//! Covers the majority of the catalog: sovereign nations and territories
//! matched straight off the Natural Earth admin_0 layers by A3 code, plus
//! named subunits such as England or Corsica.

use geo::{BooleanOps, MultiPolygon};

use crate::catalog::{Destination, Strategy};
use crate::features::BuiltFeature;
use crate::layers::{dissolve_rows, LayerRow, LayerSet, DIRECT_CODE_FIELDS};

/// Find a geometry by A3 code across the admin_0 layers.
///
/// Searches subunits first, then units, trying each standard code field in
/// order; the first field with matches wins and multi-row matches are
/// dissolved.
fn find_code_geom(code: &str, layers: &LayerSet) -> Option<MultiPolygon<f64>> {
    for layer in [&layers.subunits, &layers.units] {
        for field in DIRECT_CODE_FIELDS {
            if let Some(geom) = layer.dissolve_eq(field, code) {
                return Some(geom);
            }
        }
    }
    None
}

/// Rows whose field matches a name, case-insensitively
fn rows_by_name<'a>(
    rows: &'a [LayerRow],
    field: &str,
    name: &str,
) -> Vec<&'a LayerRow> {
    let name = name.to_lowercase();
    rows.iter()
        .filter(|row| {
            row.attr(field)
                .map(|v| v.to_lowercase() == name)
                .unwrap_or(false)
        })
        .collect()
}

/// Extract a feature directly from the admin_0 layers.
///
/// Matches the recipe code (or the record's ISO A3) against the standard
/// code fields, falling back to a case-insensitive NAME match. Additional
/// code-matched features are dissolved into the result when the recipe
/// lists them, like Baikonur into Kazakhstan.
pub fn extract_direct(dest: &Destination, layers: &LayerSet) -> Option<BuiltFeature> {
    let Strategy::Direct { code, merge } = dest.strategy else {
        return None;
    };
    let code = code.or(dest.iso_a3);

    let mut geom = code.and_then(|c| find_code_geom(c, layers));

    // Last resort: name match
    if geom.is_none() {
        for layer in [&layers.subunits, &layers.units] {
            let rows = rows_by_name(&layer.rows, "NAME", dest.name);
            if !rows.is_empty() {
                geom = dissolve_rows(&rows);
                break;
            }
        }
    }

    let mut geom = geom?;

    for merge_code in merge {
        if let Some(extra) = find_code_geom(merge_code, layers) {
            geom = geom.union(&extra);
        }
    }

    Some(BuiltFeature::area(dest, geom))
}

/// Extract a specific subunit from the fine layer by SU_A3 code.
///
/// When the code matches several rows and the recipe names one feature,
/// the match narrows to that name. A failed code lookup falls back to
/// matching the destination name on NAME_EN and NAME.
pub fn extract_subunit(dest: &Destination, layers: &LayerSet) -> Option<BuiltFeature> {
    let Strategy::Subunit { code, narrow } = dest.strategy else {
        return None;
    };

    let mut rows = layers.subunits.rows_eq("SU_A3", code);

    if let Some(narrow_name) = narrow {
        if rows.len() > 1 {
            let named: Vec<&LayerRow> = rows
                .iter()
                .copied()
                .filter(|row| row.attr("NAME") == Some(narrow_name))
                .collect();
            if !named.is_empty() {
                rows = named;
            }
        }
    }

    if rows.is_empty() {
        for field in ["NAME_EN", "NAME"] {
            rows = rows_by_name(&layers.subunits.rows, field, dest.name);
            if !rows.is_empty() {
                break;
            }
        }
    }

    let geom = dissolve_rows(&rows)?;
    Some(BuiltFeature::area(dest, geom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_support::*;
    use geo::Area;

    #[test]
    fn direct_matches_record_iso_code() {
        let mut layers = empty_layers();
        layers
            .units
            .rows
            .push(row(boxed(0.0, 0.0, 4.0, 4.0), &[("ADM0_A3", "FJI")]));

        let mut dest = destination(6, "Fiji Islands", Strategy::Direct { code: None, merge: &[] });
        dest.iso_a3 = Some("FJI");

        let feature = extract_direct(&dest, &layers).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn direct_recipe_code_overrides_iso() {
        let mut layers = empty_layers();
        layers
            .units
            .rows
            .push(row(boxed(0.0, 0.0, 1.0, 1.0), &[("ADM0_A3", "ALD")]));

        let mut dest = destination(
            113,
            "Aland Islands",
            Strategy::Direct { code: Some("ALD"), merge: &[] },
        );
        dest.iso_a3 = Some("ALA");

        assert!(extract_direct(&dest, &layers).is_some());
    }

    #[test]
    fn direct_falls_back_to_name_match() {
        let mut layers = empty_layers();
        layers
            .units
            .rows
            .push(row(boxed(0.0, 0.0, 1.0, 1.0), &[("NAME", "Somewhere")]));

        let dest = destination(400, "somewhere", Strategy::Direct { code: None, merge: &[] });
        assert!(extract_direct(&dest, &layers).is_some());

        let missing = destination(401, "Elsewhere", Strategy::Direct { code: None, merge: &[] });
        assert!(extract_direct(&missing, &layers).is_none());
    }

    #[test]
    fn direct_merges_additional_codes() {
        let mut layers = empty_layers();
        layers
            .units
            .rows
            .push(row(boxed(0.0, 0.0, 10.0, 10.0), &[("ADM0_A3", "UKR")]));
        layers
            .subunits
            .rows
            .push(row(boxed(10.0, 0.0, 14.0, 10.0), &[("SU_A3", "RUC")]));

        let dest = destination(
            178,
            "Ukraine",
            Strategy::Direct { code: Some("UKR"), merge: &["RUC"] },
        );
        let feature = extract_direct(&dest, &layers).unwrap();
        assert!((feature.area_geometry().unwrap().unsigned_area() - 140.0).abs() < 1e-6);
    }

    #[test]
    fn subunit_matches_by_code() {
        let mut layers = empty_layers();
        layers
            .subunits
            .rows
            .push(row(boxed(0.0, 50.0, 2.0, 56.0), &[("SU_A3", "SCT"), ("NAME", "Scotland")]));

        let dest = destination(166, "Scotland", Strategy::Subunit { code: "SCT", narrow: None });
        assert!(extract_subunit(&dest, &layers).is_some());
    }

    #[test]
    fn subunit_narrows_ambiguous_code_by_name() {
        let mut layers = empty_layers();
        layers
            .subunits
            .rows
            .push(row(boxed(0.0, 0.0, 1.0, 1.0), &[("SU_A3", "XXI"), ("NAME", "North Rock")]));
        layers
            .subunits
            .rows
            .push(row(boxed(5.0, 5.0, 6.0, 6.0), &[("SU_A3", "XXI"), ("NAME", "South Rock")]));

        let dest = destination(
            402,
            "South Rock",
            Strategy::Subunit { code: "XXI", narrow: Some("South Rock") },
        );
        let feature = extract_subunit(&dest, &layers).unwrap();
        use geo::BoundingRect;
        assert!(feature.area_geometry().unwrap().bounding_rect().unwrap().min().x >= 5.0);
    }

    #[test]
    fn subunit_falls_back_to_name_fields() {
        let mut layers = empty_layers();
        layers
            .subunits
            .rows
            .push(row(boxed(0.0, 0.0, 1.0, 1.0), &[("SU_A3", "ZZZ"), ("NAME_EN", "Hidden Isle")]));

        let dest = destination(403, "Hidden Isle", Strategy::Subunit { code: "QQQ", narrow: None });
        assert!(extract_subunit(&dest, &layers).is_some());
    }
}
