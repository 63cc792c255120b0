// Report generation from a placed grid

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use webatlas_placer::{Grid, GridBounds, LinkGraph};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementSummary {
    /// Domain sitting at the origin, i.e. the seed of the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    pub total_rooms: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<GridBounds>,
    /// Rooms divided by bounding-box area.
    pub fill_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_domains: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unplaced_domains: Option<usize>,
}

/// Collect summary figures from a grid, diffing against the graph when one
/// is supplied (domains the expansion never reached stay unplaced).
pub fn gather_summary(grid: &Grid, graph: Option<&LinkGraph>) -> PlacementSummary {
    let bounds = grid.bounds();
    let area = bounds.map(|b| b.width() * b.height()).unwrap_or(0);
    let fill_ratio = if area > 0 {
        grid.len() as f64 / area as f64
    } else {
        0.0
    };

    let (known_domains, unplaced_domains) = match graph {
        Some(graph) => {
            let known = graph.domains();
            let placed: HashSet<&str> = grid.rooms().map(|r| r.domain.as_str()).collect();
            let unplaced = known.iter().filter(|d| !placed.contains(*d)).count();
            (Some(known.len()), Some(unplaced))
        }
        None => (None, None),
    };

    PlacementSummary {
        seed: grid.get(0, 0).map(|room| room.domain.clone()),
        total_rooms: grid.len(),
        bounds,
        fill_ratio,
        known_domains,
        unplaced_domains,
    }
}

pub fn generate_text_report(summary: &PlacementSummary) -> String {
    let mut report = String::new();

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("              WEBATLAS PLACEMENT SUMMARY\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    match summary.seed {
        Some(ref seed) => report.push_str(&format!("Seed:            {}\n", seed)),
        None => report.push_str("Seed:            (no room at origin)\n"),
    }
    report.push_str(&format!("Rooms placed:    {}\n", summary.total_rooms));

    match summary.bounds {
        Some(bounds) => {
            report.push_str(&format!(
                "Grid bounds:     x {}..{}, y {}..{}\n",
                bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
            ));
            report.push_str(&format!(
                "Grid size:       {} x {}\n",
                bounds.width(),
                bounds.height()
            ));
            report.push_str(&format!(
                "Fill ratio:      {:.1}%\n",
                summary.fill_ratio * 100.0
            ));
        }
        None => report.push_str("Grid bounds:     (empty grid)\n"),
    }

    if let Some(known) = summary.known_domains {
        report.push_str(&format!("Known domains:   {}\n", known));
    }
    if let Some(unplaced) = summary.unplaced_domains {
        report.push_str(&format!("Unplaced:        {}\n", unplaced));
    }

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    report
}

pub fn generate_json_report(summary: &PlacementSummary) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "webatlas",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "summary": summary
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
