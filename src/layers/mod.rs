//! Natural Earth source layers
//!
//! A source layer is a read-only collection of rows, each carrying a
//! polygon geometry and a bag of string attributes. The extractors only
//! ever need three queries: filter by field equality, filter by
//! case-insensitive substring, and dissolve a set of rows into one
//! geometry.

pub mod loader;

use std::collections::HashMap;

use geo::{LineString, MultiPolygon};

use crate::geometry::ops::dissolve;

pub use loader::load_dir;

/// Code fields searched for direct feature lookups, most specific first.
pub const DIRECT_CODE_FIELDS: &[&str] = &["SU_A3", "ADM0_A3", "ISO_A3", "GU_A3"];

/// Code fields searched when resolving a whole parent country.
pub const COUNTRY_CODE_FIELDS: &[&str] = &["ADM0_A3", "SU_A3", "GU_A3", "ISO_A3"];

/// Name fields on the provinces layer, in search order.
pub const PROVINCE_NAME_FIELDS: &[&str] = &["name", "name_en", "NAME", "NAME_EN"];

/// Name fields searched when looking up disputed-layer features.
pub const DISPUTED_NAME_FIELDS: &[&str] = &["NAME", "BRK_NAME", "NAME_LONG", "ADMIN"];

/// Name fields searched when subtracting or merging disputed features.
pub const DISPUTED_SUBTRACT_FIELDS: &[&str] = &["NAME", "BRK_NAME", "NAME_LONG"];

/// One feature row of a source layer
#[derive(Debug, Clone)]
pub struct LayerRow {
    /// Row geometry; empty for rows without areal geometry
    pub geometry: MultiPolygon<f64>,
    /// Attribute fields as strings
    pub attrs: HashMap<String, String>,
}

impl LayerRow {
    /// Create a new row
    pub fn new(geometry: MultiPolygon<f64>, attrs: HashMap<String, String>) -> Self {
        LayerRow { geometry, attrs }
    }

    /// Get an attribute value
    pub fn attr(&self, field: &str) -> Option<&str> {
        self.attrs.get(field).map(|s| s.as_str())
    }
}

/// A labeled collection of feature rows
#[derive(Debug, Clone)]
pub struct SourceLayer {
    /// Layer name, used in log output
    pub name: String,
    /// All rows of the layer
    pub rows: Vec<LayerRow>,
}

impl SourceLayer {
    /// Create a new layer
    pub fn new(name: &str, rows: Vec<LayerRow>) -> Self {
        SourceLayer {
            name: name.to_string(),
            rows,
        }
    }

    /// Number of rows in the layer
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the layer has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose field equals the given value exactly
    pub fn rows_eq(&self, field: &str, value: &str) -> Vec<&LayerRow> {
        self.rows
            .iter()
            .filter(|row| row.attr(field) == Some(value))
            .collect()
    }

    /// Rows whose field contains the needle, case-insensitively
    pub fn rows_contains_ci(&self, field: &str, needle: &str) -> Vec<&LayerRow> {
        let needle = needle.to_lowercase();
        self.rows
            .iter()
            .filter(|row| {
                row.attr(field)
                    .map(|v| v.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Dissolve all rows matching a field value into one geometry.
    ///
    /// Returns `None` when no row matches.
    pub fn dissolve_eq(&self, field: &str, value: &str) -> Option<MultiPolygon<f64>> {
        dissolve_rows(&self.rows_eq(field, value))
    }
}

/// Dissolve a set of rows into a single geometry, `None` if there are none.
pub fn dissolve_rows(rows: &[&LayerRow]) -> Option<MultiPolygon<f64>> {
    if rows.is_empty() {
        return None;
    }
    Some(dissolve(rows.iter().map(|row| row.geometry.clone())))
}

/// The four Natural Earth layers plus the boundary line the build consumes
#[derive(Debug)]
pub struct LayerSet {
    /// admin_0 map subunits (fine subdivisions)
    pub subunits: SourceLayer,
    /// admin_0 map units (country-level)
    pub units: SourceLayer,
    /// admin_1 states and provinces
    pub admin1: SourceLayer,
    /// breakaway and disputed areas
    pub disputed: SourceLayer,
    /// Europe-Asia boundary line segments
    pub boundary: Vec<LineString<f64>>,
}
