// Tests for placement report generation

use serde_json::json;
use tempfile::tempdir;
use webatlas_core::report::{
    ReportFormat, gather_summary, generate_json_report, generate_text_report, save_report,
};
use webatlas_placer::{Grid, LinkGraph, Room};

fn sample_grid() -> Grid {
    let mut grid = Grid::new();
    grid.insert(Room::new("a.com", 0, 0));
    grid.insert(Room::new("b.com", 0, 1));
    grid.insert(Room::new("c.com", 1, 0));
    grid
}

#[test]
fn summary_counts_rooms_and_bounds() {
    let summary = gather_summary(&sample_grid(), None);

    assert_eq!(summary.seed.as_deref(), Some("a.com"));
    assert_eq!(summary.total_rooms, 3);
    let bounds = summary.bounds.unwrap();
    assert_eq!((bounds.min_x, bounds.max_x), (0, 1));
    assert_eq!((bounds.min_y, bounds.max_y), (0, 1));
    // 3 rooms in a 2x2 bounding box.
    assert!((summary.fill_ratio - 0.75).abs() < f64::EPSILON);
    assert!(summary.known_domains.is_none());
    assert!(summary.unplaced_domains.is_none());
}

#[test]
fn summary_of_empty_grid_is_all_zeroes() {
    let summary = gather_summary(&Grid::new(), None);
    assert!(summary.seed.is_none());
    assert_eq!(summary.total_rooms, 0);
    assert!(summary.bounds.is_none());
    assert_eq!(summary.fill_ratio, 0.0);
}

#[test]
fn summary_diffs_unplaced_domains_against_graph() {
    let graph: LinkGraph = serde_json::from_value(json!({
        "linksTo": {
            "a.com": ["b.com", "c.com"],
            "d.com": ["e.com"]
        }
    }))
    .unwrap();

    let summary = gather_summary(&sample_grid(), Some(&graph));
    assert_eq!(summary.known_domains, Some(5));
    // d.com and e.com are known but absent from the grid.
    assert_eq!(summary.unplaced_domains, Some(2));
}

#[test]
fn text_report_mentions_seed_and_counts() {
    let summary = gather_summary(&sample_grid(), None);
    let report = generate_text_report(&summary);

    assert!(report.contains("WEBATLAS PLACEMENT SUMMARY"));
    assert!(report.contains("Seed:            a.com"));
    assert!(report.contains("Rooms placed:    3"));
    assert!(report.contains("Grid size:       2 x 2"));
}

#[test]
fn text_report_handles_empty_grid() {
    let summary = gather_summary(&Grid::new(), None);
    let report = generate_text_report(&summary);

    assert!(report.contains("(no room at origin)"));
    assert!(report.contains("(empty grid)"));
}

#[test]
fn json_report_parses_and_carries_metadata() {
    let summary = gather_summary(&sample_grid(), None);
    let report = generate_json_report(&summary).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed["report"]["metadata"]["generator"], "webatlas");
    assert!(parsed["report"]["metadata"]["generated_at"].is_string());
    assert_eq!(parsed["report"]["summary"]["total_rooms"], 3);
    assert_eq!(parsed["report"]["summary"]["seed"], "a.com");
}

#[test]
fn report_format_parses_known_names() {
    assert!(matches!(
        ReportFormat::from_str("text"),
        Some(ReportFormat::Text)
    ));
    assert!(matches!(
        ReportFormat::from_str("JSON"),
        Some(ReportFormat::Json)
    ));
    assert!(ReportFormat::from_str("csv").is_none());
}

#[test]
fn save_report_writes_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.txt");

    let summary = gather_summary(&sample_grid(), None);
    let content = generate_text_report(&summary);
    save_report(&content, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}
