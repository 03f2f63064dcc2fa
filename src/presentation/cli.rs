//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags are inherited by all subcommands, so
//!   `shipyard -D staging put` and `shipyard put -D staging` are equivalent
//! - Flags take precedence over `SHIPYARD_*` environment variables, which take
//!   precedence over the configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shipyard - move release packages to and from remote storage
#[derive(Parser, Debug)]
#[command(name = "shipyard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML, or TOML by extension)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root; packages are read from and named after it
    #[arg(long, global = true, value_name = "PATH")]
    pub root_path: Option<PathBuf>,

    /// Project name used in package names
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Release timestamp used in package names
    #[arg(long, global = true)]
    pub timestamp: Option<String>,

    /// Configuration environment (top-level section of the config file)
    #[arg(long, global = true, value_name = "ENV")]
    pub environment: Option<String>,

    /// The name of the remote destination
    #[arg(short = 'D', long, global = true, value_name = "DESTINATION")]
    pub destination: Option<String>,

    /// Machine-readable output on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress progress messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Put packages and metadata into remote storage
    #[command(alias = "upload")]
    Put,

    /// Get packages and metadata from remote storage
    #[command(alias = "download")]
    Get {
        /// The local path to write packages (default: current directory)
        #[arg(long, value_name = "PATH")]
        local_path: Option<PathBuf>,
    },

    /// List packages in remote storage
    #[command(alias = "list")]
    Ls {
        /// Show all files in remote storage, not only this project's
        #[arg(long)]
        all: bool,
    },

    /// Delete packages and metadata from remote storage
    #[command(alias = "delete")]
    Rm,

    /// Check destination configuration
    #[command(hide = true)]
    CheckConfig,
}

impl Commands {
    /// Canonical command name
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Put => "put",
            Commands::Get { .. } => "get",
            Commands::Ls { .. } => "ls",
            Commands::Rm => "rm",
            Commands::CheckConfig => "check-config",
        }
    }
}
