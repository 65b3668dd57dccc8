//! Cluster relevance filtering and markdown report output.

use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cluster::Cluster;
use crate::error::Result;
use crate::model::Coord;
use crate::occupancy::OccupancyMap;
use crate::utils::format_int_alpha;

/// Heading line of every exported report.
pub const REPORT_HEADING: &str = "# City Clusters:";

/// Keeps the clusters that contain at least one coordinate with occupancy
/// `min_cities` or more. Relative cluster order is preserved.
pub fn filter_clusters(
    clusters: &[Cluster],
    occupancy: &OccupancyMap,
    min_cities: u64,
) -> Vec<Cluster> {
    clusters
        .iter()
        .filter(|cluster| {
            cluster
                .iter()
                .any(|c| occupancy.get(c).copied().unwrap_or(0) >= min_cities)
        })
        .cloned()
        .collect()
}

/// A named, render-ready cluster: display label, aggregate occupancy and
/// the per-coordinate counts in engine discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterReport {
    pub name: String,
    pub total_cities: u64,
    pub islands: Vec<(Coord, u64)>,
}

impl fmt::Display for ClusterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#### {} - total of {}", self.name, self.total_cities)?;
        for (coord, count) in &self.islands {
            write!(f, "\n- {} -> {} cities", coord, count)?;
        }
        Ok(())
    }
}

/// Builds display blocks for the clusters whose aggregate occupancy reaches
/// `min_total_cities`; clusters below the floor are skipped entirely.
///
/// Labels run "City Cluster A", "City Cluster B", ... in emission order:
/// a skipped cluster never consumes a letter, so the Nth emitted block
/// always carries the Nth label. Past "Z" the sequence continues "AA".
pub fn format_clusters(
    clusters: &[Cluster],
    occupancy: &OccupancyMap,
    min_total_cities: u64,
) -> Vec<ClusterReport> {
    let mut reports = Vec::new();

    for cluster in clusters {
        let islands: Vec<(Coord, u64)> = cluster
            .iter()
            .map(|&c| (c, occupancy.get(&c).copied().unwrap_or(0)))
            .collect();
        let total_cities: u64 = islands.iter().map(|(_, count)| count).sum();

        if total_cities < min_total_cities {
            continue;
        }

        let name = format!("City Cluster {}", format_int_alpha(reports.len() as u32 + 1));
        reports.push(ClusterReport {
            name,
            total_cities,
            islands,
        });
    }

    reports
}

/// Renders the full report document: the heading, then each block followed
/// by a blank line. An empty report list yields just the heading.
pub fn render_clusters(reports: &[ClusterReport]) -> String {
    let mut out = String::from(REPORT_HEADING);
    out.push('\n');
    for report in reports {
        out.push_str(&report.to_string());
        out.push_str("\n\n");
    }
    out
}

/// Writes the rendered report document to `writer`.
pub fn write_clusters<W: Write>(reports: &[ClusterReport], writer: &mut W) -> Result<()> {
    writer.write_all(render_clusters(reports).as_bytes())?;
    Ok(())
}

/// Writes the report document to `path` as a full-file overwrite.
///
/// The document is written to a sibling temp file first and renamed into
/// place, so a failed write never leaves a truncated report behind.
pub fn export_clusters(reports: &[ClusterReport], path: &Path) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    {
        let file = fs::File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        write_clusters(reports, &mut writer)?;
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}
