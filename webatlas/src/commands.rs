use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("webatlas")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("webatlas")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and progress output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("place")
                .about(
                    "Lays the link graph out as a grid of rooms, one domain per cell, \
                growing outward from the seed.",
                )
                .arg(
                    arg!(-g --"graph" <PATH>)
                        .required(false)
                        .help("Path to the link graph JSON file")
                        .default_value("graph.json"),
                )
                .arg(
                    arg!(-s --"seed" <DOMAIN>)
                        .required(true)
                        .help("Domain pinned at the grid origin (a URL is reduced to its host)"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to write the placed rooms")
                        .default_value("rooms.json"),
                ),
        )
        .subcommand(
            command!("report")
                .about("Summarizes a placed grid: room count, bounds, and coverage.")
                .arg(
                    arg!(-r --"rooms" <PATH>)
                        .required(false)
                        .help("Path to a previously placed rooms file")
                        .default_value("rooms.json"),
                )
                .arg(
                    arg!(-g --"graph" <PATH>)
                        .required(false)
                        .help("Link graph to diff against, for unplaced-domain counts"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)"),
                ),
        )
}
