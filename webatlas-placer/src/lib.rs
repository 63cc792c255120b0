pub mod error;
pub mod graph;
pub mod grid;
pub mod placer;

pub use error::PlaceError;
pub use graph::LinkGraph;
pub use grid::{Grid, GridBounds, Room};
pub use placer::{GridPlacer, ProgressCallback};
