//! Two-pass build orchestration
//!
//! Destinations whose recipes subtract sibling destinations are deferred
//! to a second pass; everything else is extracted in a parallel first
//! pass over the read-only layers. Per-destination failures are recorded
//! and reported, never fatal.

pub mod errors;

use std::collections::BTreeMap;

use indicatif::ProgressBar;
use log::{info, warn};
use rayon::prelude::*;

use crate::boundary::BoundarySplitter;
use crate::catalog::Destination;
use crate::extract::{extract_feature, BuiltMap};
use crate::layers::LayerSet;

/// One destination that could not be built
#[derive(Debug, Clone)]
pub struct BuildFailure {
    pub tcc_index: u16,
    pub name: &'static str,
    pub strategy: &'static str,
}

/// Terminal summary of a build run
#[derive(Debug)]
pub struct BuildReport {
    /// Destinations in the catalog
    pub total: usize,
    /// Destinations successfully built
    pub built: usize,
    /// Every destination that produced no feature
    pub failures: Vec<BuildFailure>,
}

impl BuildReport {
    /// Indices missing from the final map, in ascending order
    pub fn missing_indices(&self) -> Vec<u16> {
        let mut indices: Vec<u16> = self.failures.iter().map(|f| f.tcc_index).collect();
        indices.sort_unstable();
        indices
    }
}

/// Build every destination of a catalog against the loaded layers.
///
/// Returns the index-to-feature map plus the failure report. The ordered
/// boundary path is computed up front so the parallel pass shares it
/// read-only, and the Antarctica coastline is resolved once for the
/// wedge recipes.
pub fn build_features(
    catalog: &[Destination],
    layers: &LayerSet,
    splitter: &BoundarySplitter,
) -> (BuiltMap, BuildReport) {
    info!("building {} destinations", catalog.len());

    splitter.path();
    let antarctica = layers.units.dissolve_eq("ADM0_A3", "ATA");

    let (deferred, immediate): (Vec<&Destination>, Vec<&Destination>) = catalog
        .iter()
        .partition(|dest| !dest.strategy.depends_on().is_empty());

    let mut built: BuiltMap = BTreeMap::new();
    let mut failures: Vec<BuildFailure> = Vec::new();

    // First pass: independent destinations, extracted in parallel against
    // an empty built map and merged afterwards
    let progress = ProgressBar::new(immediate.len() as u64);
    let no_siblings = BuiltMap::new();
    let first_pass: Vec<_> = immediate
        .par_iter()
        .map(|dest| {
            let feature =
                extract_feature(dest, layers, splitter, &no_siblings, antarctica.as_ref());
            progress.inc(1);
            (*dest, feature)
        })
        .collect();
    progress.finish_and_clear();

    for (dest, feature) in first_pass {
        match feature {
            Some(feature) => {
                built.insert(dest.tcc_index, feature);
            }
            None => {
                warn!(
                    "FAILED: [{}] {} (strategy={})",
                    dest.tcc_index,
                    dest.name,
                    dest.strategy.name()
                );
                failures.push(BuildFailure {
                    tcc_index: dest.tcc_index,
                    name: dest.name,
                    strategy: dest.strategy.name(),
                });
            }
        }
    }

    // Second pass: destinations that subtract first-pass results
    for dest in deferred {
        match extract_feature(dest, layers, splitter, &built, antarctica.as_ref()) {
            Some(feature) => {
                built.insert(dest.tcc_index, feature);
            }
            None => {
                warn!(
                    "FAILED: [{}] {} (strategy={})",
                    dest.tcc_index,
                    dest.name,
                    dest.strategy.name()
                );
                failures.push(BuildFailure {
                    tcc_index: dest.tcc_index,
                    name: dest.name,
                    strategy: dest.strategy.name(),
                });
            }
        }
    }

    let report = BuildReport {
        total: catalog.len(),
        built: built.len(),
        failures,
    };
    info!("built {}/{} features", report.built, report.total);

    (built, report)
}
