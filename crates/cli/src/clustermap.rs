//! clustermap - Cluster alliance settlements into a markdown report
//!
//! A command line tool that reads a coordinate list (the JSON cache
//! produced by the map scraper), groups the settlements into islands and
//! city clusters, and writes the cluster report to a file or stdout.

use archipel_core::cluster::ClusterParams;
use archipel_core::error::{ClusterError, Result};
use archipel_core::high_level::analyze_map;
use archipel_core::model::Coord;
use archipel_core::report::{export_clusters, write_clusters};
use clap::{ArgAction, Parser};
use serde::Deserialize;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A command line tool that clusters alliance settlement coordinates and
/// writes a markdown city-cluster report.
#[derive(Parser, Debug)]
#[command(name = "clustermap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON coordinate file (a list of [x, y] pairs)
    coords: Option<PathBuf>,

    /// Print pipeline stage summaries to stderr
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Input options ===
    /// Alliance name; without a coordinate file, reads <data-dir>/<name>.json
    #[arg(short = 'a', long)]
    alliance: Option<String>,

    /// Directory holding cached coordinate files
    #[arg(long = "data-dir", default_value = "data")]
    data_dir: PathBuf,

    /// Path to a JSON user config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    // === Clustering options ===
    /// Minimum cities on an island for it to count toward a cluster
    #[arg(short = 'm', long = "min-cities")]
    min_cities: Option<u64>,

    /// Maximum Chebyshev distance between islands of one cluster
    #[arg(short = 'D', long = "max-distance")]
    max_distance: Option<u32>,

    /// Minimum total cities for a cluster to be reported
    #[arg(short = 'T', long = "min-total-cities")]
    min_total_cities: Option<u64>,

    // === Output options ===
    /// Path to file where the report is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

/// User config file, in the scraper's `user_config.json` format.
/// Unknown keys (browser settings, etc.) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserConfig {
    alliance_name: Option<String>,
    min_cities_on_island_for_cluster: Option<u64>,
    max_cluster_distance: Option<u32>,
    min_total_cities_for_cluster: Option<u64>,
}

fn load_config(path: &Path) -> Result<UserConfig> {
    let data = std::fs::read(path)?;
    serde_json::from_slice(&data)
        .map_err(|e| ClusterError::Config(format!("invalid config {}: {}", path.display(), e)))
}

/// Reads a coordinate list from the scraper's JSON cache format.
fn load_coordinates(path: &Path) -> Result<Vec<Coord>> {
    let data = std::fs::read(path)?;
    let pairs: Vec<(i64, i64)> = serde_json::from_slice(&data).map_err(|e| {
        ClusterError::Config(format!(
            "invalid coordinate file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(pairs.into_iter().map(Coord::from).collect())
}

/// Picks the coordinate file: an explicit path wins, otherwise the cache
/// path for the alliance named on the command line or in the config.
fn resolve_input(args: &Args, config: &UserConfig) -> Result<PathBuf> {
    if let Some(ref path) = args.coords {
        return Ok(path.clone());
    }

    let alliance = args
        .alliance
        .as_deref()
        .or(config.alliance_name.as_deref())
        .ok_or_else(|| {
            ClusterError::Config(
                "no coordinate file given and no alliance name to resolve one".to_string(),
            )
        })?;
    if alliance.is_empty() {
        return Err(ClusterError::Config("alliance name is empty".to_string()));
    }

    Ok(args.data_dir.join(format!("{alliance}.json")))
}

/// Builds clustering parameters. Command line flags override config file
/// values; the config's single min-cities setting drives both occupancy
/// floors, as the original tool did.
fn build_params(args: &Args, config: &UserConfig) -> ClusterParams {
    let mut params = ClusterParams::default();

    if let Some(min_cities) = config.min_cities_on_island_for_cluster {
        params = params.with_min_cities(min_cities);
    }
    if let Some(min_cities) = args.min_cities {
        params = params.with_min_cities(min_cities);
    }

    if let Some(max_distance) = args.max_distance.or(config.max_cluster_distance) {
        params.max_distance = max_distance;
    }
    if let Some(min_total) = args.min_total_cities.or(config.min_total_cities_for_cluster) {
        params.min_total_cities = min_total;
    }

    params
}

fn run(args: &Args) -> Result<()> {
    let config = match args.config {
        Some(ref path) => load_config(path)?,
        None => UserConfig::default(),
    };

    let input = resolve_input(args, &config)?;
    if !input.exists() {
        return Err(ClusterError::Config(format!(
            "coordinate file not found: {}",
            input.display()
        )));
    }

    let coords = load_coordinates(&input)?;
    let params = build_params(args, &config);

    if args.debug {
        eprintln!("loaded {} coordinates from {}", coords.len(), input.display());
        eprintln!(
            "params: min_cities={} max_distance={} min_total_cities={}",
            params.min_cities_per_island, params.max_distance, params.min_total_cities
        );
    }

    let analysis = analyze_map(&coords, &params);

    if args.debug {
        eprintln!(
            "{} distinct islands, {} clusters, {} reported",
            analysis.occupancy.len(),
            analysis.clusters.len(),
            analysis.reports.len()
        );
    }

    if args.outfile == "-" {
        let mut writer = BufWriter::new(io::stdout());
        write_clusters(&analysis.reports, &mut writer)?;
        writer.flush()?;
    } else {
        export_clusters(&analysis.reports, Path::new(&args.outfile))?;
    }

    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
