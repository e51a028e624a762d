//! Diagnostic log setup for the command-line tool

use tracing::Level;

/// Log level for the requested verbosity
///
/// Quiet runs only report errors; verbose runs include layout and compositing
/// detail.
pub const fn log_level(verbose: bool, quiet: bool) -> Level {
    match (verbose, quiet) {
        (true, _) => Level::DEBUG,
        (false, true) => Level::ERROR,
        (false, false) => Level::WARN,
    }
}

/// Install a stderr subscriber at `level`
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one is kept.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
