// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{expand_path, parse_seed_arg};

// Re-export placement functionality from webatlas-core
pub use webatlas_core::place::{PlaceOptions, PlaceProgressCallback, execute_place};
