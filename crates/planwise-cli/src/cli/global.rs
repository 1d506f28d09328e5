//! Flags accepted by every `planwise` subcommand.

use std::path::PathBuf;

use clap::{Args, ValueHint};

/// Flattened into [`super::Cli`]; `global = true` lets them follow the
/// subcommand (`planwise analyze plan.json -v`).
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more; repeat for detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v, -vv, -vvv)",
        long_help = "Log more to stderr. Overridden by PLANWISE_LOG or RUST_LOG:
    (none)  - warnings and errors
    -v      - planning steps (analysis, export)
    -vv     - service and catalog details
    -vvv    - everything, adapters included"
    )]
    pub verbose: u8,

    /// Print only reports, documents and error findings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only requested data and errors"
    )]
    pub quiet: bool,

    /// Plain output; `NO_COLOR` (<https://no-color.org>) sets it too.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Settings file used instead of the platform and `./.planwise.toml`
    /// files. It must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "PLANWISE_CONFIG",
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        help = "Planwise settings file (TOML)"
    )]
    pub config: Option<PathBuf>,
}
