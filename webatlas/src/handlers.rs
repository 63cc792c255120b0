use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use url::Url;
use webatlas_core::place::{PlaceOptions, execute_place};
use webatlas_core::report::{self, ReportFormat};
use webatlas_core::store;

// Helper functions for the place handler

/// Reduce a seed argument to a bare domain. Accepts either a domain
/// ("breq.dev") or a full URL ("https://breq.dev/about"), returning the
/// host in the latter case.
pub fn parse_seed_arg(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains("://") {
        return Url::parse(trimmed)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
    }

    // A bare domain never carries a path or whitespace.
    if trimmed.contains('/') || trimmed.contains(char::is_whitespace) {
        return None;
    }

    Some(trimmed.to_string())
}

/// Expand `~` in a path argument.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn handle_place(args: &ArgMatches, quiet: bool) -> Result<()> {
    let graph_path = expand_path(args.get_one::<String>("graph").unwrap());
    let output_path = expand_path(args.get_one::<String>("output").unwrap());
    let seed_raw = args.get_one::<String>("seed").unwrap();

    let Some(seed) = parse_seed_arg(seed_raw) else {
        bail!("'{}' is not a domain or URL", seed_raw);
    };

    let graph = store::load_graph(&graph_path)
        .with_context(|| format!("Failed to load graph from {}", graph_path.display()))?;

    if !quiet {
        println!(
            "{} {} known domains, seed {}",
            "→".blue(),
            graph.domains().len().to_string().bright_white(),
            seed.bright_white()
        );
    }

    let options = PlaceOptions {
        seed,
        show_progress_bar: !quiet,
    };
    let grid = execute_place(&graph, options, None)?;

    store::save_rooms(&grid, &output_path)
        .with_context(|| format!("Failed to write rooms to {}", output_path.display()))?;

    println!(
        "{} {} rooms written to {}",
        "✓".green().bold(),
        grid.len().to_string().cyan(),
        output_path.display().to_string().bright_white()
    );

    Ok(())
}

pub fn handle_report(args: &ArgMatches) -> Result<()> {
    let rooms_path = expand_path(args.get_one::<String>("rooms").unwrap());
    let graph_path = args.get_one::<String>("graph").map(|p| expand_path(p));
    let format = args.get_one::<String>("format").unwrap();
    let output = args.get_one::<String>("output").map(|p| expand_path(p));

    let grid = store::load_rooms(&rooms_path)
        .with_context(|| format!("Failed to load rooms from {}", rooms_path.display()))?;

    let graph = match graph_path {
        Some(path) => Some(
            store::load_graph(&path)
                .with_context(|| format!("Failed to load graph from {}", path.display()))?,
        ),
        None => None,
    };

    let summary = report::gather_summary(&grid, graph.as_ref());

    let content = match ReportFormat::from_str(format) {
        Some(ReportFormat::Text) => report::generate_text_report(&summary),
        Some(ReportFormat::Json) => report::generate_json_report(&summary)?,
        None => bail!("Unknown report format '{}'", format),
    };

    match output {
        Some(path) => {
            report::save_report(&content, &path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}
