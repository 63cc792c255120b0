use crate::error::{PlaceError, Result};
use crate::graph::LinkGraph;
use crate::grid::{Grid, Room};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, info};

/// Called after every placed room with (rooms placed so far, domain).
pub type ProgressCallback = Arc<dyn Fn(usize, &str) + Send + Sync>;

/// The four cardinal offsets, in the order candidate cells are probed.
/// Diagonals are not part of adjacency.
const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Everything one placement run mutates. Owned by the run, dropped with it.
struct PlacerState {
    grid: Grid,
    placed: HashSet<String>,
    queue: VecDeque<(i32, i32)>,
    /// Cells whose candidate list came up empty. They stay empty for the
    /// rest of the run and must never be re-queued.
    vacant: HashSet<(i32, i32)>,
}

/// Breadth-first grid placement: domains that link to each other land in
/// adjacent cells, growing in rough rings around the seed at the origin.
pub struct GridPlacer {
    progress_callback: Option<ProgressCallback>,
}

impl GridPlacer {
    pub fn new() -> Self {
        Self {
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Lay the graph out on the grid, starting from `seed` at (0,0).
    ///
    /// Any non-empty seed is accepted whether or not the graph mentions it;
    /// a seed the graph never references simply ends up alone at the origin.
    /// The result is a pure function of the graph's edge-list contents and
    /// their stored order.
    pub fn place(&self, graph: &LinkGraph, seed: &str) -> Result<Grid> {
        if seed.trim().is_empty() {
            return Err(PlaceError::InvalidSeed(seed.to_string()));
        }

        info!(
            "Starting placement of {} known domains from seed {}",
            graph.domains().len(),
            seed
        );

        let mut state = PlacerState {
            grid: Grid::new(),
            placed: HashSet::new(),
            queue: VecDeque::new(),
            vacant: HashSet::new(),
        };

        state.grid.insert(Room::new(seed, 0, 0));
        state.placed.insert(seed.to_string());
        for cell in neighbors(0, 0, true, &state.grid) {
            state.queue.push_back(cell);
        }

        // FIFO discipline is what gives the concentric growth pattern.
        while let Some((x, y)) = state.queue.pop_front() {
            self.try_fill_cell(graph, &mut state, x, y);
        }

        info!("Placement complete. {} rooms placed", state.grid.len());
        Ok(state.grid)
    }

    /// Attempt to fill one dequeued cell from the domains its occupied
    /// neighbors reference.
    fn try_fill_cell(&self, graph: &LinkGraph, state: &mut PlacerState, x: i32, y: i32) {
        let ranked = {
            let occupied: Vec<&Room> = neighbors(x, y, false, &state.grid)
                .into_iter()
                .filter_map(|(nx, ny)| state.grid.get(nx, ny))
                .collect();
            rank_candidates(graph, &occupied)
        };

        let Some(domain) = ranked.into_iter().find(|d| !state.placed.contains(d)) else {
            state.vacant.insert((x, y));
            return;
        };

        debug!("Adding {} at {},{}", domain, x, y);
        state.placed.insert(domain.clone());
        state.grid.insert(Room::new(domain.clone(), x, y));
        if let Some(ref callback) = self.progress_callback {
            callback(state.grid.len(), &domain);
        }

        for cell in neighbors(x, y, true, &state.grid) {
            // Duplicate suppression is a linear scan; the pending queue
            // stays small relative to the grid.
            if !state.queue.contains(&cell) && !state.vacant.contains(&cell) {
                state.queue.push_back(cell);
            }
        }
    }
}

impl Default for GridPlacer {
    fn default() -> Self {
        Self::new()
    }
}

/// The cardinal neighbors of (x, y) that are empty (`want_empty`) or
/// occupied (`!want_empty`). One primitive serves both "where can the grid
/// grow" and "which rooms score this cell".
fn neighbors(x: i32, y: i32, want_empty: bool, grid: &Grid) -> Vec<(i32, i32)> {
    CARDINAL_OFFSETS
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .filter(|&(nx, ny)| grid.is_occupied(nx, ny) != want_empty)
        .collect()
}

/// Tally every domain the occupied neighbors reference, then rank.
///
/// Two stable sorts run in sequence: out-degree first, tally second. The
/// tally sort runs last, so it is the primary key and out-degree only
/// breaks ties between equal tallies. Collapsing the two passes into one
/// comparator would change tie outcomes. Domains keep first-seen order
/// beyond that, which keeps the whole run reproducible.
fn rank_candidates(graph: &LinkGraph, occupied: &[&Room]) -> Vec<String> {
    let mut tally: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<&str> = Vec::new();

    for room in occupied {
        for domain in graph
            .incoming(&room.domain)
            .iter()
            .chain(graph.outgoing(&room.domain))
        {
            let count = tally.entry(domain.as_str()).or_insert(0);
            if *count == 0 {
                ranked.push(domain.as_str());
            }
            *count += 1;
        }
    }

    ranked.sort_by(|a, b| graph.out_degree(b).cmp(&graph.out_degree(a)));
    ranked.sort_by(|a, b| tally[*b].cmp(&tally[*a]));

    ranked.into_iter().map(String::from).collect()
}
