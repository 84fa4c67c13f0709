// crates/cli/src/logging.rs
use log::LevelFilter;

/// Map `-q` / `-v` flags to a level; warnings are shown by default.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
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

/// Install the stderr logger. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose, quiet))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();
    // Only fails when a logger is already set, e.g. when tests share a process.
    let _ = builder.try_init();
}
