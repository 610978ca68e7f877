use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Typography Style Extractor CLI - Maps @apply utility stylesheets onto library text styles
#[derive(Parser, Debug)]
#[command(name = "textstyle-extractor-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview the text styles a stylesheet would create (no registry writes)
    Parse(ParseArgs),
    /// Create text styles from a stylesheet, matched against a library snapshot
    Create(CreateArgs),
    /// Serve the JSON message protocol over stdin/stdout
    Pipe(PipeArgs),
}

/// Arguments for the parse command
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Input stylesheet patterns (glob patterns supported); stdin when omitted
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATTERN",
        num_args = 0..,
        help = "Stylesheet patterns to scan for @apply typography rules"
    )]
    pub input: Vec<String>,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file with custom utility tokens"
    )]
    pub config: Option<PathBuf>,

    /// Also resolve each style's target properties
    #[arg(
        long = "resolve",
        default_value_t = false,
        help = "Include the resolved typographic properties for each found style"
    )]
    pub resolve: bool,

    /// Compact JSON output
    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Emit compact JSON instead of pretty-printed"
    )]
    pub compact: bool,
}

/// Arguments for the create command
#[derive(Parser, Debug, Clone)]
pub struct CreateArgs {
    /// Input stylesheet patterns (glob patterns supported)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATTERN",
        required = true,
        num_args = 1..,
        help = "Stylesheet patterns to scan for @apply typography rules"
    )]
    pub input: Vec<String>,

    /// Library registry snapshot (JSON)
    #[arg(
        short = 'l',
        long = "library",
        value_name = "PATH",
        required = true,
        help = "Path to the library registry snapshot to match against"
    )]
    pub library: PathBuf,

    /// Library collection id
    #[arg(
        long = "collection",
        value_name = "ID",
        help = "Id of the library collection to match against (overrides config)"
    )]
    pub collection: Option<String>,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (collection id, custom utility tokens)"
    )]
    pub config: Option<PathBuf>,

    /// Report output path (JSON)
    #[arg(
        short = 'o',
        long = "output-report",
        value_name = "PATH",
        help = "Path where the synthesis report will be written"
    )]
    pub output_report: Option<PathBuf>,

    /// Compact JSON report
    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Write the report as compact JSON instead of pretty-printed"
    )]
    pub compact: bool,

    /// Dry run (don't write the report)
    #[arg(
        long = "dry-run",
        default_value_t = false,
        help = "Run the synthesis but don't write the report"
    )]
    pub dry_run: bool,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

/// Arguments for the pipe command
#[derive(Parser, Debug, Clone)]
pub struct PipeArgs {
    /// Library registry snapshot (JSON)
    #[arg(
        short = 'l',
        long = "library",
        value_name = "PATH",
        required = true,
        help = "Path to the library registry snapshot to match against"
    )]
    pub library: PathBuf,

    /// Library collection id
    #[arg(
        long = "collection",
        value_name = "ID",
        help = "Id of the library collection to match against (overrides config)"
    )]
    pub collection: Option<String>,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (collection id, custom utility tokens)"
    )]
    pub config: Option<PathBuf>,
}

impl CreateArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_empty() {
            return Err("At least one input pattern must be provided".to_string());
        }

        if let Some(report) = &self.output_report {
            if report == &self.library {
                return Err("Report output and library snapshot paths must be different".to_string());
            }
        }

        Ok(())
    }
}
