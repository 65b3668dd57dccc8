//! High-level pipeline API.
//!
//! Provides the main public entry points for turning a raw coordinate list
//! into a cluster report:
//! - `analyze_map()` - run the full pipeline, returning all intermediates
//! - `analyze_to_string()` - run the pipeline and render the report
//! - `analyze_to_fp()` - run the pipeline and write the report to a writer
//! - `analyze_to_path()` - run the pipeline and export the report to a file

use std::io::Write;
use std::path::Path;

use crate::cluster::{Cluster, ClusterParams, cluster_islands};
use crate::error::Result;
use crate::model::Coord;
use crate::occupancy::{OccupancyMap, count_cities, filter_by_occupancy};
use crate::report::{
    ClusterReport, export_clusters, filter_clusters, format_clusters, render_clusters,
    write_clusters,
};

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct MapAnalysis {
    /// Occupancy of the density-filtered coordinate list. Built once and
    /// shared by the cluster filter and the report formatter.
    pub occupancy: OccupancyMap,

    /// The complete partition of the filtered coordinates into connected
    /// components, before any relevance filtering.
    pub clusters: Vec<Cluster>,

    /// Report blocks for the clusters that survived both filter stages,
    /// in discovery order.
    pub reports: Vec<ClusterReport>,
}

/// Runs the full clustering pipeline over `coords`.
///
/// Stages: occupancy count, density filter, connected-component discovery,
/// per-cluster relevance filter, aggregate filter plus formatting. The
/// occupancy map driving the later stages is rebuilt from the filtered
/// list, so reported counts always match the coordinates that were
/// actually clustered.
///
/// Pure and infallible; the only fallible step in this module is writing
/// a report out.
pub fn analyze_map(coords: &[Coord], params: &ClusterParams) -> MapAnalysis {
    let raw_occupancy = count_cities(coords);
    let filtered = filter_by_occupancy(coords, &raw_occupancy, params.min_cities_per_island);

    let occupancy = count_cities(&filtered);
    let clusters = cluster_islands(&filtered, params.max_distance);

    let relevant = filter_clusters(&clusters, &occupancy, params.min_cities_for_relevance);
    let reports = format_clusters(&relevant, &occupancy, params.min_total_cities);

    MapAnalysis {
        occupancy,
        clusters,
        reports,
    }
}

/// Runs the pipeline and returns the rendered report document.
pub fn analyze_to_string(coords: &[Coord], params: &ClusterParams) -> String {
    let analysis = analyze_map(coords, params);
    render_clusters(&analysis.reports)
}

/// Runs the pipeline and writes the report document to `writer`.
pub fn analyze_to_fp<W: Write>(coords: &[Coord], params: &ClusterParams, writer: &mut W) -> Result<()> {
    let analysis = analyze_map(coords, params);
    write_clusters(&analysis.reports, writer)
}

/// Runs the pipeline and exports the report document to `path`, returning
/// the analysis for further inspection.
pub fn analyze_to_path(coords: &[Coord], params: &ClusterParams, path: &Path) -> Result<MapAnalysis> {
    let analysis = analyze_map(coords, params);
    export_clusters(&analysis.reports, path)?;
    Ok(analysis)
}
