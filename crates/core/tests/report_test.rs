//! Tests for cluster relevance filtering and report formatting.

use archipel_core::model::Coord;
use archipel_core::occupancy::count_cities;
use archipel_core::report::{
    REPORT_HEADING, export_clusters, filter_clusters, format_clusters, render_clusters,
    write_clusters,
};

/// Helper to build a coordinate list from pairs
fn coords(pairs: &[(i64, i64)]) -> Vec<Coord> {
    pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

// === filter_clusters (per-cluster relevance) ===

#[test]
fn test_filter_clusters_drops_sparse_clusters() {
    let list = coords(&[(1, 1), (1, 1), (1, 1), (10, 10)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(1, 1)]), coords(&[(10, 10)])];

    let kept = filter_clusters(&clusters, &occupancy, 2);
    assert_eq!(kept, vec![coords(&[(1, 1)])]);
}

#[test]
fn test_filter_clusters_one_dense_coord_is_enough() {
    let list = coords(&[(1, 1), (2, 2), (2, 2), (2, 2)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(1, 1), (2, 2)])];

    // (1,1) has count 1, but (2,2) clears the floor for the whole cluster
    let kept = filter_clusters(&clusters, &occupancy, 3);
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_filter_clusters_zero_threshold_keeps_all() {
    let list = coords(&[(1, 1), (10, 10)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(1, 1)]), coords(&[(10, 10)])];

    let kept = filter_clusters(&clusters, &occupancy, 0);
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_filter_clusters_preserves_order() {
    let list = coords(&[(1, 1), (5, 5), (9, 9)]);
    let occupancy = count_cities(&list);
    let clusters = vec![
        coords(&[(9, 9)]),
        coords(&[(1, 1)]),
        coords(&[(5, 5)]),
    ];

    let kept = filter_clusters(&clusters, &occupancy, 1);
    assert_eq!(kept, clusters);
}

// === format_clusters (aggregate filter + labels) ===

#[test]
fn test_format_clusters_totals_and_labels() {
    let list = coords(&[(1, 1), (1, 1), (2, 2), (10, 10)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(1, 1), (2, 2)]), coords(&[(10, 10)])];

    let reports = format_clusters(&clusters, &occupancy, 0);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "City Cluster A");
    assert_eq!(reports[0].total_cities, 3);
    assert_eq!(
        reports[0].islands,
        vec![(Coord::new(1, 1), 2), (Coord::new(2, 2), 1)]
    );
    assert_eq!(reports[1].name, "City Cluster B");
    assert_eq!(reports[1].total_cities, 1);
}

#[test]
fn test_format_clusters_skipped_cluster_consumes_no_letter() {
    let list = coords(&[(1, 1), (10, 10), (10, 10), (10, 10)]);
    let occupancy = count_cities(&list);
    // First cluster totals 1 and falls below the aggregate floor
    let clusters = vec![coords(&[(1, 1)]), coords(&[(10, 10)])];

    let reports = format_clusters(&clusters, &occupancy, 2);
    assert_eq!(reports.len(), 1);
    // The surviving cluster is the first emitted one, so it is "A", not "B"
    assert_eq!(reports[0].name, "City Cluster A");
    assert_eq!(reports[0].total_cities, 3);
}

#[test]
fn test_format_clusters_aggregate_monotonicity() {
    let list = coords(&[(1, 1), (1, 1), (5, 5), (9, 9), (9, 9), (9, 9)]);
    let occupancy = count_cities(&list);
    let clusters = vec![
        coords(&[(1, 1)]),
        coords(&[(5, 5)]),
        coords(&[(9, 9)]),
    ];

    let mut previous = usize::MAX;
    for floor in 0..5 {
        let emitted = format_clusters(&clusters, &occupancy, floor).len();
        assert!(emitted <= previous);
        previous = emitted;
    }
}

// === Rendering and export ===

#[test]
fn test_report_block_layout() {
    let list = coords(&[(1, 1), (1, 1), (2, 2)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(1, 1), (2, 2)])];

    let reports = format_clusters(&clusters, &occupancy, 0);
    assert_eq!(
        reports[0].to_string(),
        "#### City Cluster A - total of 3\n- 1:1 -> 2 cities\n- 2:2 -> 1 cities"
    );
}

#[test]
fn test_render_empty_report_is_heading_only() {
    assert_eq!(render_clusters(&[]), "# City Clusters:\n");
    assert!(render_clusters(&[]).starts_with(REPORT_HEADING));
}

#[test]
fn test_render_separates_blocks_with_blank_line() {
    let list = coords(&[(1, 1), (10, 10)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(1, 1)]), coords(&[(10, 10)])];
    let reports = format_clusters(&clusters, &occupancy, 0);

    let document = render_clusters(&reports);
    assert_eq!(
        document,
        "# City Clusters:\n\
         #### City Cluster A - total of 1\n\
         - 1:1 -> 1 cities\n\
         \n\
         #### City Cluster B - total of 1\n\
         - 10:10 -> 1 cities\n\
         \n"
    );
}

#[test]
fn test_write_clusters_matches_render() {
    let list = coords(&[(3, 4), (3, 4)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(3, 4)])];
    let reports = format_clusters(&clusters, &occupancy, 0);

    let mut buffer: Vec<u8> = Vec::new();
    write_clusters(&reports, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), render_clusters(&reports));
}

#[test]
fn test_export_overwrites_existing_file() {
    let list = coords(&[(1, 1)]);
    let occupancy = count_cities(&list);
    let clusters = vec![coords(&[(1, 1)])];
    let reports = format_clusters(&clusters, &occupancy, 0);

    let path = std::env::temp_dir().join("archipel_export_test.md");
    std::fs::write(&path, "stale contents that must disappear").unwrap();

    export_clusters(&reports, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_clusters(&reports));

    std::fs::remove_file(&path).unwrap();
}
