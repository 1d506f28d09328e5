//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber. The application services in
//! `planwise-core` and the adapters emit events; the pure domain emits none.
//!
//! # Filter resolution
//!
//! 1. `PLANWISE_LOG`, if set and valid
//! 2. `RUST_LOG`, if set and valid
//! 3. directives built from `-v` / `-q`:
//!
//! | Flag(s)   | planwise, services | adapters |
//! |-----------|--------------------|----------|
//! | `--quiet` | error              | error    |
//! | (none)    | warn               | warn     |
//! | `-v`      | info               | warn     |
//! | `-vv`     | debug              | info     |
//! | `-vvv`    | trace              | trace    |
//!
//! Adapters trail by one level until `-vvv`: they log once per file read,
//! which drowns out the planning events otherwise.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Project-specific override, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "PLANWISE_LOG";

/// Initialise the global tracing subscriber.
///
/// Must be called once, before any tracing macros fire. Logs go to stderr so
/// stdout stays parseable for `--format json`.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(args.verbose >= 2)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Level for the binary and the core services.
fn verbosity(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Adapters run one level quieter than `level`, except at the extremes.
fn adapter_level(level: LevelFilter) -> LevelFilter {
    if level == LevelFilter::INFO {
        LevelFilter::WARN
    } else if level == LevelFilter::DEBUG {
        LevelFilter::INFO
    } else {
        level
    }
}

fn filter_directives(level: LevelFilter) -> String {
    let adapters = adapter_level(level);
    format!(
        "planwise={level},planwise_core::application={level},planwise_adapters={adapters}"
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(verbosity(&args_with(0, true)), LevelFilter::ERROR);
        assert_eq!(verbosity(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn verbose_count_saturates_at_trace() {
        let levels: Vec<LevelFilter> = (0..=4).map(|v| verbosity(&args_with(v, false))).collect();
        assert_eq!(
            levels,
            vec![
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE
            ]
        );
    }

    #[test]
    fn adapters_trail_services_by_one_level() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "planwise=debug,planwise_core::application=debug,planwise_adapters=info"
        );
        assert_eq!(
            filter_directives(LevelFilter::INFO),
            "planwise=info,planwise_core::application=info,planwise_adapters=warn"
        );
    }

    #[test]
    fn extremes_apply_to_every_layer() {
        assert_eq!(
            filter_directives(LevelFilter::TRACE),
            "planwise=trace,planwise_core::application=trace,planwise_adapters=trace"
        );
        assert_eq!(
            filter_directives(LevelFilter::WARN),
            "planwise=warn,planwise_core::application=warn,planwise_adapters=warn"
        );
    }

    #[test]
    fn generated_directives_parse() {
        for v in 0..=3 {
            let directives = filter_directives(verbosity(&args_with(v, false)));
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }
}
