//! Boundary segment chaining and south-to-north path ordering
//!
//! The Europe-Asia boundary dataset ships as hundreds of short line
//! segments. This module first merges segments that share exact endpoints
//! into maximal chains, then orders the chains into a single coordinate
//! path running from the Mediterranean up to the Arctic.

use std::collections::HashMap;

use geo::{Coord, LineString};
use log::debug;

/// Maximum endpoint gap, in degrees, the chain ordering will jump across.
///
/// The real dataset merges into three nearly-touching chains with gaps of
/// about 0.003 degrees; anything further apart than this is treated as
/// unreachable and dropped from the ordered path.
pub const GAP_THRESHOLD_DEG: f64 = 5.0;

/// Euclidean distance between two coordinates in (lon, lat) degree space.
#[inline]
fn point_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Hash key for exact endpoint matching.
#[inline]
fn endpoint_key(c: Coord<f64>) -> (u64, u64) {
    (c.x.to_bits(), c.y.to_bits())
}

/// Southernmost latitude of a chain.
fn min_latitude(chain: &[Coord<f64>]) -> f64 {
    chain
        .iter()
        .map(|c| c.y)
        .fold(f64::INFINITY, f64::min)
}

/// Merge segments that share exact endpoints into maximal chains.
///
/// Segments are consumed in input order; at a junction where more than one
/// unused segment touches, the first-indexed segment wins, so the output is
/// deterministic for a fixed input ordering.
pub fn merge_segments(segments: &[LineString<f64>]) -> Vec<Vec<Coord<f64>>> {
    if segments.is_empty() {
        return Vec::new();
    }

    // Endpoint index: coordinate -> (segment index, touches at start?)
    let mut index: HashMap<(u64, u64), Vec<(usize, bool)>> = HashMap::new();
    for (i, seg) in segments.iter().enumerate() {
        if seg.0.len() < 2 {
            continue;
        }
        index.entry(endpoint_key(seg.0[0])).or_default().push((i, true));
        index
            .entry(endpoint_key(*seg.0.last().unwrap()))
            .or_default()
            .push((i, false));
    }

    let mut used = vec![false; segments.len()];
    let mut chains = Vec::new();

    for start in 0..segments.len() {
        if used[start] || segments[start].0.len() < 2 {
            continue;
        }
        used[start] = true;
        let mut chain: Vec<Coord<f64>> = segments[start].0.clone();

        // Extend forward from the tail, then flip and extend again so the
        // head gets the same treatment.
        for _ in 0..2 {
            loop {
                let end = *chain.last().unwrap();
                let Some(&(next, at_start)) = index
                    .get(&endpoint_key(end))
                    .and_then(|c| c.iter().find(|&&(i, _)| !used[i]))
                else {
                    break;
                };
                used[next] = true;
                let coords = &segments[next].0;
                if at_start {
                    chain.extend(coords.iter().skip(1).copied());
                } else {
                    chain.extend(coords.iter().rev().skip(1).copied());
                }
            }
            chain.reverse();
        }

        chains.push(chain);
    }

    chains
}

/// Build a single ordered coordinate path from disconnected segments.
///
/// Chains are seeded from the southernmost one and greedily extended with
/// the nearest remaining chain endpoint, reversing chains as needed. Chains
/// further than [`GAP_THRESHOLD_DEG`] from the growing path are dropped.
/// The result always runs south to north.
pub fn ordered_path(segments: &[LineString<f64>]) -> Vec<Coord<f64>> {
    let mut chains = merge_segments(segments);
    if chains.is_empty() {
        return Vec::new();
    }

    let mut path = if chains.len() == 1 {
        chains.pop().unwrap()
    } else {
        chains.sort_by(|a, b| {
            min_latitude(a)
                .partial_cmp(&min_latitude(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut remaining = chains;
        let mut path = remaining.remove(0);

        loop {
            let end = *path.last().unwrap();
            let mut best: Option<(usize, bool, f64)> = None;
            for (i, chain) in remaining.iter().enumerate() {
                let d_start = point_distance(end, chain[0]);
                let d_end = point_distance(end, *chain.last().unwrap());
                if best.map_or(true, |(_, _, d)| d_start < d) {
                    best = Some((i, false, d_start));
                }
                if best.map_or(true, |(_, _, d)| d_end < d) {
                    best = Some((i, true, d_end));
                }
            }
            match best {
                Some((i, reverse, dist)) if dist < GAP_THRESHOLD_DEG => {
                    let mut chain = remaining.remove(i);
                    if reverse {
                        chain.reverse();
                    }
                    path.extend(chain);
                }
                _ => break,
            }
        }

        if !remaining.is_empty() {
            debug!(
                "boundary path: dropped {} chains beyond the {} degree gap threshold",
                remaining.len(),
                GAP_THRESHOLD_DEG
            );
        }
        path
    };

    // Orient south to north
    if path.len() >= 2 && path[0].y > path.last().unwrap().y {
        path.reverse();
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn merge_empty() {
        assert!(merge_segments(&[]).is_empty());
    }

    #[test]
    fn merge_two_touching_segments() {
        let segments = vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
            line_string![(x: 1.0, y: 1.0), (x: 2.0, y: 2.0)],
        ];
        let chains = merge_segments(&segments);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 3);
    }

    #[test]
    fn merge_keeps_disconnected_apart() {
        let segments = vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
            line_string![(x: 5.0, y: 5.0), (x: 6.0, y: 6.0)],
        ];
        assert_eq!(merge_segments(&segments).len(), 2);
    }

    #[test]
    fn merge_handles_reversed_orientation() {
        // Second segment runs toward the shared endpoint
        let segments = vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
            line_string![(x: 2.0, y: 2.0), (x: 1.0, y: 1.0)],
        ];
        let chains = merge_segments(&segments);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 3);
    }

    #[test]
    fn ordered_path_runs_south_to_north() {
        let segments = vec![
            line_string![(x: 30.0, y: 54.0), (x: 31.0, y: 70.0)],
            line_string![(x: 29.0, y: 40.0), (x: 30.0, y: 50.0)],
        ];
        let path = ordered_path(&segments);
        assert_eq!(path.len(), 4);
        assert!(path[0].y <= path.last().unwrap().y);
        assert_eq!(path[0].y, 40.0);
        assert_eq!(path.last().unwrap().y, 70.0);
    }

    #[test]
    fn ordered_path_reverses_single_north_first_chain() {
        let segments = vec![line_string![(x: 0.0, y: 50.0), (x: 0.0, y: 10.0)]];
        let path = ordered_path(&segments);
        assert_eq!(path[0].y, 10.0);
        assert_eq!(path.last().unwrap().y, 50.0);
    }

    #[test]
    fn ordered_path_bridges_small_gaps() {
        // Two chains 0.003 degrees apart, like the real dataset
        let segments = vec![
            line_string![(x: 28.0, y: 40.0), (x: 29.0, y: 45.0)],
            line_string![(x: 29.003, y: 45.0), (x: 30.0, y: 55.0)],
        ];
        let path = ordered_path(&segments);
        assert_eq!(path.len(), 4);
        assert_eq!(path.last().unwrap().y, 55.0);
    }

    #[test]
    fn ordered_path_drops_far_chains() {
        let segments = vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0)],
            line_string![(x: 50.0, y: 50.0), (x: 50.0, y: 60.0)],
        ];
        let path = ordered_path(&segments);
        // The far chain is unreachable within the gap threshold
        assert_eq!(path.len(), 2);
        assert_eq!(path.last().unwrap().y, 10.0);
    }

    #[test]
    fn ordered_path_reverses_chains_to_connect() {
        // Second chain's far end is the nearer endpoint
        let segments = vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0)],
            line_string![(x: 0.0, y: 20.0), (x: 0.1, y: 10.1)],
        ];
        let path = ordered_path(&segments);
        assert_eq!(path.len(), 4);
        assert_eq!(path.last().unwrap().y, 20.0);
    }
}
