//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use planwise_core::domain::Severity;

use crate::cli::{GlobalArgs, ReportFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    default_format: ReportFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            default_format: ReportFormat::from_config(&config.output.format),
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !Term::stdout().is_term(),
            term: Term::stdout(),
        }
    }

    /// The `--format` flag if given, else `output.format` from config.
    pub fn resolve_format(&self, flag: Option<ReportFormat>) -> ReportFormat {
        flag.unwrap_or(self.default_format)
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Requested data (documents, completions). Never suppressed.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Pretty JSON on stdout. Never suppressed.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `  label: value`, label dimmed.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("  {label}: {value}")
        } else {
            format!("  {} {value}", format!("{label}:").dimmed())
        };
        self.term.write_line(&line)
    }

    /// One analysis finding, tagged by severity.
    ///
    /// Error findings are shown in quiet mode too.
    pub fn finding(&self, severity: Severity, message: &str, field: &str) -> io::Result<()> {
        if self.quiet && severity != Severity::Error {
            return Ok(());
        }
        let tag = format!("[{severity}]");
        let tag = if self.no_color {
            tag
        } else {
            match severity {
                Severity::Error => tag.red().bold().to_string(),
                Severity::Warning => tag.yellow().bold().to_string(),
                Severity::Info => tag.blue().to_string(),
            }
        };
        self.term.write_line(&format!("  {tag} {message} ({field})"))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, &AppConfig::default());
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
        assert!(out.finding(Severity::Info, "hidden", "x").is_ok());
    }

    #[test]
    fn error_findings_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true, &AppConfig::default());
        assert!(out.finding(Severity::Error, "broken", "security.ssl").is_ok());
    }

    #[test]
    fn no_color_flag_disables_color() {
        let out = make_manager(false, true, &AppConfig::default());
        assert!(out.no_color);
    }

    #[test]
    fn no_color_from_config() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(make_manager(false, false, &config).no_color);
    }

    #[test]
    fn format_flag_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = make_manager(false, true, &config);

        assert_eq!(out.resolve_format(None), ReportFormat::Json);
        assert_eq!(
            out.resolve_format(Some(ReportFormat::Human)),
            ReportFormat::Human
        );
    }

    #[test]
    fn json_writes_serializable_values() {
        let out = make_manager(true, true, &AppConfig::default());
        assert!(out.json(&["a", "b"]).is_ok());
    }
}
