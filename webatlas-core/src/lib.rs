pub mod place;
pub mod report;
pub mod store;

pub use place::{PlaceOptions, PlaceProgressCallback, execute_place};

/// Startup banner shown by the CLI unless --quiet is set.
pub fn print_banner() {
    println!();
    println!("  ┌──┬──┐  webatlas v{}", env!("CARGO_PKG_VERSION"));
    println!("  ├──┼──┤  the small web, one room per domain");
    println!("  └──┴──┘");
    println!();
}
