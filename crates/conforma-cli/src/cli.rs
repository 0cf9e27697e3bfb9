//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// conforma-rules - Inspect the metadata of annotated policy rules.
#[derive(Debug, Parser)]
#[command(name = "conforma-rules")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONFORMA_RULES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (codes only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract rule metadata from annotation documents
    Inspect(InspectArgs),

    /// Normalize xref markup in a piece of text
    Xref(XrefArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// JSON annotation documents
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only rules in this collection
    #[arg(long)]
    pub collection: Option<String>,

    /// Only rules of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Arguments for the xref command.
#[derive(Debug, Parser)]
pub struct XrefArgs {
    /// Text containing xref macros
    pub text: String,

    /// Resolve full-form macros to documentation URLs instead of labels
    #[arg(long)]
    pub resolve: bool,
}

/// Arguments for configuration commands.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,
}

/// Rule kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Violations
    Deny,
    /// Warnings
    Warn,
    /// Everything else
    Other,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for conforma_domain::RuleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Deny => conforma_domain::RuleKind::Deny,
            KindArg::Warn => conforma_domain::RuleKind::Warn,
            KindArg::Other => conforma_domain::RuleKind::Other,
        }
    }
}
