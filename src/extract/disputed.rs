//! Extraction from the breakaway / disputed areas layer

use geo::{BooleanOps, MultiPolygon};
use log::warn;

use crate::catalog::{Destination, Strategy};
use crate::features::BuiltFeature;
use crate::layers::{dissolve_rows, LayerSet, SourceLayer, DISPUTED_NAME_FIELDS};

/// Find a disputed-layer geometry by name.
///
/// Substring match, case-insensitive, across the four name fields; the
/// first field with hits wins and its matches are dissolved.
fn find_disputed_geom(name: &str, disputed: &SourceLayer) -> Option<MultiPolygon<f64>> {
    for field in DISPUTED_NAME_FIELDS {
        let rows = disputed.rows_contains_ci(field, name);
        if !rows.is_empty() {
            return dissolve_rows(&rows);
        }
    }
    None
}

/// Extract a feature from the disputed areas layer.
///
/// Additional named features are dissolved into the result when the
/// recipe lists them, like Siachen Glacier into Kashmir.
pub fn extract_disputed(dest: &Destination, layers: &LayerSet) -> Option<BuiltFeature> {
    let Strategy::Disputed { query, merge } = dest.strategy else {
        return None;
    };

    let Some(mut geom) = find_disputed_geom(query, &layers.disputed) else {
        warn!("disputed feature not found: {}", query);
        return None;
    };

    for extra in merge {
        if let Some(extra_geom) = find_disputed_geom(extra, &layers.disputed) {
            geom = geom.union(&extra_geom);
        }
    }

    Some(BuiltFeature::area(dest, geom))
}
