// JSON persistence for link graphs and placed grids

use std::fs;
use std::path::Path;
use tracing::info;
use webatlas_placer::error::Result;
use webatlas_placer::{Grid, LinkGraph};

/// Read a link graph from a JSON file. Missing top-level maps parse as
/// empty; anything else malformed surfaces the JSON error.
pub fn load_graph(path: &Path) -> Result<LinkGraph> {
    info!("Loading graph from {}", path.display());
    let data = fs::read_to_string(path)?;
    let graph = serde_json::from_str(&data)?;
    Ok(graph)
}

/// Write a placed grid to a JSON file in the `"x,y"`-keyed format the
/// viewers consume.
pub fn save_rooms(grid: &Grid, path: &Path) -> Result<()> {
    info!("Writing {} rooms to {}", grid.len(), path.display());
    let data = serde_json::to_string(grid)?;
    fs::write(path, data)?;
    Ok(())
}

/// Read a previously exported grid back.
pub fn load_rooms(path: &Path) -> Result<Grid> {
    info!("Loading rooms from {}", path.display());
    let data = fs::read_to_string(path)?;
    let grid = serde_json::from_str(&data)?;
    Ok(grid)
}
