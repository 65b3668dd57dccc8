//! archipel - island clustering for alliance game maps.
//!
//! Groups settlement coordinates into spatially contiguous islands and
//! clusters of islands, filters them by population density, and renders a
//! markdown report.

pub mod cluster;
pub mod error;
pub mod high_level;
pub mod model;
pub mod occupancy;
pub mod report;
pub mod utils;

pub use cluster::{Cluster, ClusterParams, cluster_islands};
pub use error::{ClusterError, Result};
pub use high_level::{
    MapAnalysis, analyze_map, analyze_to_fp, analyze_to_path, analyze_to_string,
};
pub use model::Coord;
pub use occupancy::{OccupancyMap, count_cities, filter_by_occupancy};
pub use report::{
    ClusterReport, REPORT_HEADING, export_clusters, filter_clusters, format_clusters,
    render_clusters, write_clusters,
};
