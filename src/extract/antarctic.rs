//! Antarctic sector wedges
//!
//! Territorial claims on Antarctica are longitude sectors from the South
//! Pole up to a cutoff latitude. A wedge is generated per sector and then
//! intersected with the real coastline so the result follows the ice
//! edge instead of the raw sector outline.

use geo::{coord, BooleanOps, Coord, LineString, MultiPolygon, Polygon, Validation};
use log::warn;

use crate::catalog::{Destination, Sector, Strategy};
use crate::features::BuiltFeature;
use crate::geometry::ops::{dissolve, repair};

/// Points along the northern arc of a wedge
const WEDGE_ARC_POINTS: usize = 60;

/// Southern latitude every wedge closes at
const WEDGE_SOUTH_LAT: f64 = -90.0;

/// Build one wedge polygon between two longitudes.
///
/// The northern edge is sampled so the arc stays smooth after map
/// projection.
fn make_wedge(west: f64, east: f64, north: f64) -> MultiPolygon<f64> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(WEDGE_ARC_POINTS + 4);
    for i in 0..=WEDGE_ARC_POINTS {
        let lon = west + (east - west) * i as f64 / WEDGE_ARC_POINTS as f64;
        coords.push(coord! { x: lon, y: north });
    }
    coords.push(coord! { x: east, y: WEDGE_SOUTH_LAT });
    coords.push(coord! { x: west, y: WEDGE_SOUTH_LAT });
    coords.push(coords[0]);

    MultiPolygon::new(vec![Polygon::new(LineString::new(coords), Vec::new())])
}

/// Build the wedge for one sector, splitting at the antimeridian when the
/// western bound exceeds the eastern bound (Ross Dependency, 160°E-150°W).
fn sector_wedge(sector: &Sector, north: f64) -> MultiPolygon<f64> {
    if sector.west > sector.east {
        let west_half = make_wedge(sector.west, 180.0, north);
        let east_half = make_wedge(-180.0, sector.east, north);
        west_half.union(&east_half)
    } else {
        make_wedge(sector.west, sector.east, north)
    }
}

/// Generate an Antarctic sector clipped to the real coastline.
///
/// Without a coastline, or when the coastline intersection comes up
/// empty, the raw wedge is used instead.
pub fn extract_antarctic(
    dest: &Destination,
    coastline: Option<&MultiPolygon<f64>>,
) -> Option<BuiltFeature> {
    let Strategy::Antarctic { sectors, north } = dest.strategy else {
        return None;
    };
    if sectors.is_empty() {
        return None;
    }

    let wedge = dissolve(sectors.iter().map(|sector| sector_wedge(sector, north)));

    let result = match coastline {
        Some(coast) => {
            let mut clipped = coast.intersection(&wedge);
            if clipped.0.is_empty() {
                warn!("coastline clip empty for {}, using raw wedge", dest.name);
                wedge
            } else {
                if !clipped.is_valid() {
                    clipped = repair(&clipped);
                }
                clipped
            }
        }
        None => wedge,
    };

    Some(BuiltFeature::area(dest, result))
}
