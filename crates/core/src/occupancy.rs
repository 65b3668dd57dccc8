//! Per-coordinate occupancy counting and density filtering.
//!
//! The occupancy map is built once per input list and shared read-only by
//! the density filter, the cluster filter and the report formatter, so all
//! of them agree on the same counts.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::model::Coord;

/// Count of settlements per distinct coordinate.
///
/// Insertion-ordered: iteration follows the first appearance of each
/// coordinate in the input list, which keeps report output reproducible.
pub type OccupancyMap = IndexMap<Coord, u64, FxBuildHasher>;

/// Counts how many entries of `coords` fall on each distinct coordinate.
///
/// Pure function. Every count is positive and the counts sum to
/// `coords.len()`. Empty input yields an empty map.
pub fn count_cities(coords: &[Coord]) -> OccupancyMap {
    let mut counts = OccupancyMap::default();
    for &coord in coords {
        *counts.entry(coord).or_insert(0) += 1;
    }
    counts
}

/// Keeps the entries of `coords` whose occupancy is at least `min_cities`.
///
/// Order-preserving: duplicates of a qualifying coordinate are all
/// retained, not collapsed. A threshold of 0 keeps everything.
///
/// Takes the occupancy map as an argument rather than recomputing it so
/// that filtering and later reporting stages see identical counts.
pub fn filter_by_occupancy(
    coords: &[Coord],
    occupancy: &OccupancyMap,
    min_cities: u64,
) -> Vec<Coord> {
    coords
        .iter()
        .copied()
        .filter(|c| occupancy.get(c).copied().unwrap_or(0) >= min_cities)
        .collect()
}
