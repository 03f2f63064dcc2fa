//! Per-invocation state shared by command handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};

use shipyard::config::{self, Config, Verbosity};
use shipyard::domain::entities::Release;
use shipyard::domain::ports::Reporter;
use shipyard::domain::services::ResolvedRemote;
use shipyard::infrastructure::ConsoleReporter;
use shipyard::presentation::Cli;

use super::project_root::discover_project_root;

const ENVIRONMENT_ENV: &str = "SHIPYARD_ENVIRONMENT";

/// Configuration with every override applied, plus the output sink
pub struct CommandContext {
    pub config: Config,
    pub root: PathBuf,
    pub json: bool,
    pub reporter: ConsoleReporter,
}

impl CommandContext {
    /// Load configuration for `cli`.
    ///
    /// Precedence: flags, then `SHIPYARD_*` variables, then the file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        let search_root = match &cli.root_path {
            Some(root) => cwd.join(root),
            None => discover_project_root(&cwd),
        };

        let environment = cli
            .environment
            .clone()
            .or_else(|| std::env::var(ENVIRONMENT_ENV).ok())
            .filter(|env| !env.is_empty());

        let config_path = cli
            .config
            .as_ref()
            .map(|path| cwd.join(path))
            .or_else(|| config::find_config_file(&search_root));

        let (config, warnings) = match &config_path {
            Some(path) => Config::load_with_warnings(path, environment.as_deref())?,
            None => (Config::default(), Vec::new()),
        };
        let config = apply_flags(config.with_env_overrides(), cli);

        let root = match &cli.root_path {
            Some(_) => search_root,
            None => config
                .root_path
                .as_ref()
                .map(|root| cwd.join(root))
                .unwrap_or(search_root),
        };

        let mut reporter = ConsoleReporter::new(config.output.verbosity, cli.json);
        for warning in &warnings {
            reporter.warn(&warning.to_string());
        }

        Ok(Self {
            config,
            root,
            json: cli.json,
            reporter,
        })
    }

    pub fn project_name(&self) -> String {
        self.config.project_name(&self.root)
    }

    pub fn release(&self) -> Release {
        self.config.release(&self.root)
    }

    /// Canonical destination configuration with the selection applied
    pub fn remote(&self) -> Result<ResolvedRemote> {
        Ok(ResolvedRemote::resolve(
            self.config.plugins.remote.clone(),
            None,
        )?)
    }
}

/// Command-line flags override everything loaded so far
fn apply_flags(mut config: Config, cli: &Cli) -> Config {
    if let Some(name) = &cli.name {
        config.name = Some(name.clone());
    }
    if let Some(timestamp) = &cli.timestamp {
        config.timestamp = Some(timestamp.clone());
    }
    if let Some(destination) = &cli.destination {
        config.plugins.remote.destination = Some(destination.clone());
    }
    if cli.quiet {
        config.output.verbosity = Verbosity::Quiet;
    }
    config
}
