//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use planwise_core::domain::DocumentKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "planwise",
    bin_name = "planwise",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Configuration intelligence for setup wizards",
    long_about = "Planwise analyzes a setup-wizard configuration, ranks recommendations \
                  for open choices and generates an AI init prompt and a development \
                  concept from it.",
    after_help = "EXAMPLES:\n\
        \x20 planwise analyze wizard.json\n\
        \x20 planwise recommend wizard.json framework\n\
        \x20 planwise generate wizard.json --out docs/ --with-analysis\n\
        \x20 planwise completions bash > /usr/share/bash-completion/completions/planwise",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a configuration and list warnings, suggestions and conflicts.
    #[command(
        visible_alias = "a",
        about = "Analyze a configuration",
        after_help = "EXAMPLES:\n\
            \x20 planwise analyze wizard.json\n\
            \x20 planwise analyze wizard.toml --format json\n\
            \x20 planwise analyze wizard.json --fail-on-error   # exit 2 on error findings"
    )]
    Analyze(AnalyzeArgs),

    /// Rank candidate values for open choices.
    #[command(
        visible_alias = "r",
        about = "Recommend values for configuration fields",
        after_help = "EXAMPLES:\n\
            \x20 planwise recommend wizard.json framework\n\
            \x20 planwise recommend wizard.json authMethods paymentProviders\n\
            \x20 planwise recommend wizard.json --all --format json"
    )]
    Recommend(RecommendArgs),

    /// Generate the planning documents.
    #[command(
        visible_alias = "g",
        about = "Generate the init prompt and development concept",
        after_help = "EXAMPLES:\n\
            \x20 planwise generate wizard.json                    # print to stdout\n\
            \x20 planwise generate wizard.json --document concept\n\
            \x20 planwise generate wizard.json --out docs/ --force --with-analysis"
    )]
    Generate(GenerateArgs),

    /// Show the stack profile for a deployment target and framework.
    #[command(
        about = "Show a stack profile",
        after_help = "EXAMPLES:\n\
            \x20 planwise profile --target vercel --framework nextjs\n\
            \x20 planwise profile --framework django --name \"Corner Bakery\""
    )]
    Profile(ProfileArgs),

    /// List the option catalog.
    #[command(
        visible_alias = "ls",
        about = "List catalog groups and options",
        after_help = "EXAMPLES:\n\
            \x20 planwise catalog\n\
            \x20 planwise catalog --group framework\n\
            \x20 planwise catalog --group payment-provider --format json"
    )]
    Catalog(CatalogArgs),

    /// Initialise a Planwise configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 planwise init           # platform config directory\n\
            \x20 planwise init --local   # ./.planwise.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 planwise completions bash > ~/.local/share/bash-completion/completions/planwise\n\
            \x20 planwise completions zsh  > ~/.zfunc/_planwise\n\
            \x20 planwise completions fish > ~/.config/fish/completions/planwise.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Planwise configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 planwise config get export.directory\n\
            \x20 planwise config list\n\
            \x20 planwise config path"
    )]
    Config(ConfigCommands),
}

// ── analyze ───────────────────────────────────────────────────────────────────

/// Arguments for `planwise analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Wizard configuration (JSON, or TOML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format; defaults to `output.format` from the app config.
    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormat>,

    /// Exit with a user-error code when any error-severity finding exists.
    #[arg(long = "fail-on-error")]
    pub fail_on_error: bool,
}

// ── recommend ─────────────────────────────────────────────────────────────────

/// Arguments for `planwise recommend`.
#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Wizard configuration (JSON, or TOML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field keys, e.g. `framework`, `authMethods`, `payment-providers`.
    #[arg(
        value_name = "FIELD",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub fields: Vec<String>,

    /// Recommend every field.
    #[arg(long = "all")]
    pub all: bool,

    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormat>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `planwise generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Wizard configuration (JSON, or TOML by extension).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Which document to generate.
    #[arg(
        short = 'd',
        long = "document",
        value_enum,
        default_value = "all"
    )]
    pub document: DocumentChoice,

    /// Write documents into this directory instead of stdout.
    ///
    /// Falls back to `export.directory` from the app config.
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Overwrite existing documents.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Also write `analysis.json` next to the documents.
    #[arg(long = "with-analysis")]
    pub with_analysis: bool,
}

/// Document selection for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentChoice {
    #[value(name = "init-prompt", alias = "init")]
    InitPrompt,
    #[value(name = "concept")]
    Concept,
    All,
}

impl DocumentChoice {
    pub fn kinds(&self) -> Vec<DocumentKind> {
        match self {
            Self::InitPrompt => vec![DocumentKind::InitPrompt],
            Self::Concept => vec![DocumentKind::DevelopmentConcept],
            Self::All => DocumentKind::ALL.to_vec(),
        }
    }
}

// ── profile ───────────────────────────────────────────────────────────────────

/// Arguments for `planwise profile`.
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Deployment target id, e.g. `vercel`, `docker`.
    #[arg(short = 't', long = "target", value_name = "TARGET")]
    pub target: Option<String>,

    /// Framework id, e.g. `nextjs`, `django`.
    #[arg(short = 'f', long = "framework", value_name = "FRAMEWORK")]
    pub framework: Option<String>,

    /// Project name used to render the layout tree.
    #[arg(long = "name", value_name = "NAME", default_value = "My Project")]
    pub name: String,

    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormat>,
}

// ── catalog ───────────────────────────────────────────────────────────────────

/// Arguments for `planwise catalog`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Show the options of one group instead of the group list.
    #[arg(short = 'g', long = "group", value_name = "GROUP")]
    pub group: Option<String>,

    /// Overlay catalog files from this directory.
    ///
    /// Falls back to `catalog.directory` from the app config.
    #[arg(long = "catalog-dir", value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormat>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `planwise init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.planwise.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `planwise completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `planwise config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `export.directory`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Rendering for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable, coloured on a terminal.
    #[default]
    Human,
    /// Pretty-printed JSON on stdout.
    Json,
}

impl ReportFormat {
    /// Parse the `output.format` config value; unknown values mean human.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Human
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
