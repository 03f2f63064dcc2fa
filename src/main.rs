//! Shipyard CLI - move release packages to and from remote storage
//!
//! Usage: shipyard [OPTIONS] <COMMAND>
//!
//! Commands:
//!   put   Upload the release metadata and packages
//!   get   Download the release metadata and packages
//!   ls    List packages at the destination
//!   rm    Remove the release from the destination

use clap::Parser;

use shipyard::presentation::Cli;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        ui::error::print_error(&err);
        std::process::exit(1);
    }
}
