//! TCC destination catalog
//!
//! The 330 destinations of the Travelers' Century Club list, each paired
//! with the extraction recipe that produces its geometry from the Natural
//! Earth layers. Records are immutable and assembled once at first use.

mod recipes;
mod table;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::boundary::Side;
use crate::geometry::BoundingBox;

/// Number of destinations in the reference catalog
pub const DESTINATION_COUNT: usize = 330;

/// Destination classification tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationClass {
    Country,
    Territory,
    Disputed,
    Subnational,
    Antarctic,
}

/// One Antarctic sector between two longitude bounds.
///
/// A sector whose western bound exceeds its eastern bound crosses the
/// antimeridian and is rendered as two wedges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub west: f64,
    pub east: f64,
}

/// Extraction recipe for one destination.
///
/// Each variant carries exactly the parameters its extractor needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Match admin_0 rows by A3 code (the record's ISO A3 when `code` is
    /// unset), optionally merging further code-matched features
    Direct {
        code: Option<&'static str>,
        merge: &'static [&'static str],
    },
    /// Match a single subunit row by SU_A3 code, optionally narrowed by
    /// feature name when the code is ambiguous
    Subunit {
        code: &'static str,
        narrow: Option<&'static str>,
    },
    /// Dissolve named admin_1 provinces of one country
    Admin1 {
        country: &'static str,
        provinces: &'static [&'static str],
    },
    /// Country geometry minus named provinces and disputed areas, plus
    /// optional disputed areas merged back in
    Remainder {
        country: &'static str,
        subtract_provinces: &'static [&'static str],
        subtract_disputed: &'static [&'static str],
        merge_disputed: &'static [&'static str],
    },
    /// Country geometry minus other destinations' built geometries
    GroupRemainder {
        country: &'static str,
        subtract: &'static [u16],
    },
    /// Continental split of a country along the Europe-Asia boundary
    Clip {
        country: &'static str,
        side: Side,
        absorb: Option<(f64, f64)>,
        subtract: &'static [u16],
        subtract_codes: &'static [&'static str],
    },
    /// Match disputed-layer rows by name substring
    Disputed {
        query: &'static str,
        merge: &'static [&'static str],
    },
    /// Country geometry minus named disputed-layer features
    DisputedRemainder {
        country: &'static str,
        subtract: &'static [&'static str],
    },
    /// Polygon parts of a parent feature inside a bounding box
    IslandBbox {
        country: &'static str,
        province: Option<&'static str>,
        bbox: BoundingBox,
    },
    /// Pole sectors between longitude bounds, clipped to the coastline
    Antarctic {
        sectors: &'static [Sector],
        north: f64,
    },
    /// A literal point marker for islands too small to draw
    Point { lat: f64, lon: f64 },
}

impl Strategy {
    /// Get the strategy name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Direct { .. } => "direct",
            Strategy::Subunit { .. } => "subunit",
            Strategy::Admin1 { .. } => "admin1",
            Strategy::Remainder { .. } => "remainder",
            Strategy::GroupRemainder { .. } => "group_remainder",
            Strategy::Clip { .. } => "clip",
            Strategy::Disputed { .. } => "disputed",
            Strategy::DisputedRemainder { .. } => "disputed_remainder",
            Strategy::IslandBbox { .. } => "island_bbox",
            Strategy::Antarctic { .. } => "antarctic",
            Strategy::Point { .. } => "point",
        }
    }

    /// Indices of destinations this recipe subtracts from its own result.
    ///
    /// Destinations with dependencies are built in the second pass, after
    /// every independent destination has been attempted.
    pub fn depends_on(&self) -> &'static [u16] {
        match *self {
            Strategy::GroupRemainder { subtract, .. } => subtract,
            Strategy::Clip { subtract, .. } => subtract,
            _ => &[],
        }
    }
}

/// One destination record
#[derive(Debug, Clone)]
pub struct Destination {
    /// TCC destination number, unique within the catalog
    pub tcc_index: u16,
    /// TCC destination name
    pub name: &'static str,
    /// TCC region name
    pub region: &'static str,
    /// ISO 3166-1 alpha-2 code, absent for sub-national entries
    pub iso_a2: Option<&'static str>,
    /// ISO 3166-1 alpha-3 code
    pub iso_a3: Option<&'static str>,
    /// ISO 3166-1 numeric code
    pub iso_n3: Option<u16>,
    /// Sovereign state name
    pub sovereign: &'static str,
    /// Classification tag
    pub class: DestinationClass,
    /// Extraction recipe
    pub strategy: Strategy,
}

lazy_static! {
    static ref CATALOG: Vec<Destination> = {
        let catalog: Vec<Destination> = table::ROWS
            .iter()
            .map(|&(tcc_index, name, region, iso_a2, iso_a3, iso_n3, sovereign, class)| {
                Destination {
                    tcc_index,
                    name,
                    region,
                    iso_a2,
                    iso_a3,
                    iso_n3,
                    sovereign,
                    class,
                    strategy: recipes::strategy_for(tcc_index),
                }
            })
            .collect();
        assert_eq!(catalog.len(), DESTINATION_COUNT);
        validate(&catalog).expect("destination catalog is inconsistent");
        catalog
    };
}

/// All destinations, in catalog order
pub fn catalog() -> &'static [Destination] {
    &CATALOG
}

/// Check the structural invariants of a destination list.
///
/// Indices must be unique and positive, every subtracted index must exist,
/// and no dependency may point at a destination that itself has
/// dependencies (the build resolves exactly one level in its second pass).
pub fn validate(destinations: &[Destination]) -> Result<(), String> {
    let mut seen = std::collections::BTreeSet::new();
    for dest in destinations {
        if dest.tcc_index == 0 {
            return Err(format!("destination '{}' has index 0", dest.name));
        }
        if !seen.insert(dest.tcc_index) {
            return Err(format!("duplicate tcc_index {}", dest.tcc_index));
        }
    }

    for dest in destinations {
        for &dep in dest.strategy.depends_on() {
            let target = destinations
                .iter()
                .find(|d| d.tcc_index == dep)
                .ok_or_else(|| {
                    format!(
                        "[{}] {} subtracts unknown destination {}",
                        dest.tcc_index, dest.name, dep
                    )
                })?;
            if !target.strategy.depends_on().is_empty() {
                return Err(format!(
                    "[{}] {} depends on [{}] {}, which has dependencies of its own",
                    dest.tcc_index, dest.name, target.tcc_index, target.name
                ));
            }
        }
    }

    Ok(())
}
