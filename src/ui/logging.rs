//! Diagnostic logging setup
//!
//! `SHIPYARD_LOG` takes an `EnvFilter` directive (e.g. `shipyard=trace`).
//! Without it the level comes from `-v` and the configured verbosity,
//! whichever asks for more.

use shipyard::config::Verbosity;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHIPYARD_LOG";

/// Level for a `-v` count
pub fn level_for(verbose: u8, verbosity: Verbosity) -> LevelFilter {
    let from_config = match verbosity {
        Verbosity::Quiet | Verbosity::Normal => 0,
        Verbosity::Verbose => 1,
        Verbosity::Debug => 2,
    };
    match verbose.max(from_config) {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbose: u8, verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, verbosity).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
