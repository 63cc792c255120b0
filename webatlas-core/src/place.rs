use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use webatlas_placer::error::Result;
use webatlas_placer::{Grid, GridPlacer, LinkGraph};

/// Options for configuring a placement run
pub struct PlaceOptions {
    pub seed: String,
    pub show_progress_bar: bool,
}

/// Callback for coarse status messages from the run
pub type PlaceProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Execute a placement run with the given options.
/// Returns the finished grid.
pub fn execute_place(
    graph: &LinkGraph,
    options: PlaceOptions,
    progress_callback: Option<PlaceProgressCallback>,
) -> Result<Grid> {
    let PlaceOptions {
        seed,
        show_progress_bar,
    } = options;

    if let Some(ref callback) = progress_callback {
        callback(format!("Placing rooms around {}", seed));
    }

    // Single spinner for overall placement progress (only if enabled)
    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting placement...");
        Some(pb)
    } else {
        None
    };

    let mut placer = GridPlacer::new();
    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        placer = placer.with_progress_callback(Arc::new(move |count: usize, domain: &str| {
            pb_clone.set_message(format!("{} rooms placed (latest: {})", count, domain));
            pb_clone.tick();
        }));
    }

    let grid = placer.place(graph, &seed)?;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("Placement complete! {} rooms placed", grid.len()));
    }

    if let Some(ref callback) = progress_callback {
        callback(format!(
            "Placed {} of {} known domains",
            grid.len(),
            graph.domains().len()
        ));
    }

    Ok(grid)
}
