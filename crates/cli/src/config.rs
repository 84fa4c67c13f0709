// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use name_census_engine::config::{Config, ConfigBuilder, ScanOptions, ScanOptionsBuilder};
use name_census_engine::options as engine_options;
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let scan = scan_options_from_args(&args)?;
        let format: engine_options::OutputFormat = args.output.format.into();

        ConfigBuilder::default()
            .scan(scan)
            .format(format)
            .top_n(args.output.top)
            .strict(args.behavior.strict)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn scan_options_from_args(args: &Args) -> Result<ScanOptions, AppError> {
    let scan = &args.scan;

    let roots = if args.roots.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.roots.clone()
    };

    ScanOptionsBuilder::default()
        .roots(roots)
        .patterns(scan.pattern.clone())
        .threads(scan.jobs.unwrap_or_else(num_cpus::get))
        .hidden(scan.hidden)
        .git_ignore(scan.git_ignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .names_from(scan.names_from.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

// CLI -> Engine の列挙型変換

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Plain,
    Table,
    Csv,
    Json,
    Jsonl,
    Yaml
);
