//! Logger initialisation for the CLI.
//!
//! Verbosity flags pick the base level; `KIBANA_ARTEFACT_LOG` accepts the
//! usual `env_logger` filter syntax and takes precedence over the flags.

use log::LevelFilter;

/// Environment variable holding an `env_logger` filter override.
pub const LOG_ENV: &str = "KIBANA_ARTEFACT_LOG";

/// Map the `-v`/`-q` flags onto a log level.
#[must_use]
pub const fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the process-wide logger writing to stderr.
pub fn init_logging(verbose: u8, quiet: bool) {
    let initialised = env_logger::Builder::new()
        .filter_level(level_filter(verbose, quiet))
        .parse_env(env_logger::Env::new().filter(LOG_ENV))
        .format_timestamp(None)
        .try_init();
    if initialised.is_err() {
        // A logger is already installed; keep it.
    }
}
