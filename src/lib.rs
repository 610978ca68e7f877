pub mod args;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod messages;
pub mod parser;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod synthesizer;
pub mod tokens;

pub use args::{Cli, Commands, CreateArgs, ParseArgs, PipeArgs};
pub use config::{StyleConfig, TokenExtend};
pub use errors::{Result, TextStyleError};
pub use matcher::find_match;
pub use messages::{handle_request, Request, Response};
pub use parser::{parse, ParsedStyle, ParsedStyleSet};
pub use registry::{
    ConsoleNotifier, InMemoryRegistry, LibraryStyle, Notifier, RecordingNotifier,
    RegistrySnapshot, StyleCollection, StyleRegistry, TextAttr, TextStyle,
};
pub use report::{ReportBuilder, SynthesisReport};
pub use resolver::resolve;
pub use synthesizer::{StyleSynthesizer, SynthesisResult};
pub use tokens::{is_typography_class, TextProperties, TokenTable};

#[cfg(feature = "cli")]
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One previewed style: the parsed rule, plus its resolved target properties
/// when requested.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewedStyle {
    #[serde(flatten)]
    pub style: ParsedStyle,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TextProperties>,
}

/// Result of the parse command
#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    pub files_processed: usize,
    pub styles: Vec<PreviewedStyle>,
}

/// Summary of a create run
#[derive(Debug)]
pub struct CreateSummary {
    pub files_processed: usize,
    pub result: SynthesisResult,
    pub report: SynthesisReport,
}

/// Load the configuration named by `path`, or the defaults when absent
#[cfg(feature = "cli")]
fn load_config(path: Option<&PathBuf>) -> Result<StyleConfig> {
    match path {
        Some(path) => StyleConfig::from_file(path),
        None => Ok(StyleConfig::default()),
    }
}

/// The collection id to match against: the command-line flag wins over the
/// configuration file
#[cfg(feature = "cli")]
fn resolve_collection_id(flag: Option<&String>, config: &StyleConfig) -> Result<String> {
    flag.cloned()
        .or_else(|| config.collection.clone())
        .ok_or_else(|| {
            TextStyleError::InvalidInput(
                "No collection id: pass --collection or set `collection` in the config file"
                    .to_string(),
            )
        })
}

/// Collect stylesheet files matching the given patterns, deduplicated, in
/// pattern order
pub fn collect_stylesheets(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let path = entry?;

            if path.is_dir() {
                continue;
            }

            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(TextStyleError::NoFilesFound);
    }

    Ok(files)
}

#[cfg(feature = "cli")]
fn read_stylesheet(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        TextStyleError::InputError(format!("Failed to read stylesheet {}: {}", path.display(), e))
    })
}

/// Run the parse command: scan the inputs (or stdin) and report the styles
/// that would be created, without touching any registry.
#[cfg(feature = "cli")]
pub async fn run_parse(args: ParseArgs) -> Result<PreviewReport> {
    let config = load_config(args.config.as_ref())?;
    let table = config.build_table();

    let (chunks, files_processed) = if args.input.is_empty() {
        (vec![read_stdin().await?], 0)
    } else {
        let files = collect_stylesheets(&args.input)?;
        let mut chunks = Vec::with_capacity(files.len());
        for file in &files {
            chunks.push(read_stylesheet(file)?);
        }
        let count = files.len();
        (chunks, count)
    };

    let mut styles = Vec::new();
    for css in &chunks {
        for style in parse(css).styles {
            let target = args
                .resolve
                .then(|| resolver::resolve(&table, &style.text_classes));
            styles.push(PreviewedStyle { style, target });
        }
    }

    Ok(PreviewReport {
        files_processed,
        styles,
    })
}

/// Run the create command: synthesize text styles from the input stylesheets
/// against the library snapshot and write a synthesis report.
#[cfg(feature = "cli")]
pub async fn create(args: CreateArgs) -> Result<CreateSummary> {
    // Validate arguments
    args.validate().map_err(TextStyleError::InvalidInput)?;

    // Create configuration
    let config = load_config(args.config.as_ref())?;
    let collection_id = resolve_collection_id(args.collection.as_ref(), &config)?;
    let table = config.build_table();

    if args.verbose {
        eprintln!("Starting text style synthesis...");
        eprintln!("Input patterns: {:?}", args.input);
        eprintln!("Library snapshot: {}", args.library.display());
        eprintln!("Collection id: {}", collection_id);
        eprintln!("Token table: {} entries", table.len());
    }

    // Collect stylesheets matching the patterns
    let files = collect_stylesheets(&args.input)?;

    if args.verbose {
        eprintln!("Found {} stylesheets to process", files.len());
    }

    let mut registry = InMemoryRegistry::from_json_file(&args.library)?;
    let synthesizer = StyleSynthesizer::new(table, collection_id.clone());

    // Progress bar for non-verbose runs
    let progress_bar = if !args.verbose {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({msg})")
                .unwrap()
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        pb.set_message("Synthesizing styles...");
        Some(pb)
    } else {
        None
    };

    // Each stylesheet is an independent synthesis pass; the registry
    // accumulates created styles across passes, in input order
    let mut totals = SynthesisResult::default();
    for file in &files {
        let css = read_stylesheet(file)?;
        let result = synthesizer.synthesize(&mut registry, &css)?;
        totals.created += result.created;
        totals.matched += result.matched;

        if let Some(ref pb) = progress_bar {
            pb.inc(1);
            pb.set_message(format!(
                "Processed: {}",
                file.file_name().unwrap_or_default().to_string_lossy()
            ));
        } else {
            eprintln!(
                "{}: {} styles ({} matched)",
                file.display(),
                result.created,
                result.matched
            );
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("✓ Created {} text styles", totals.created));
    }

    let report = ReportBuilder::new()
        .with_files_processed(files.len())
        .with_collection(&collection_id)
        .with_result(totals)
        .with_styles(registry.created_styles().to_vec())
        .build();

    // Write the report if not in dry-run mode
    if !args.dry_run {
        if let Some(path) = &args.output_report {
            write_report(path, &report, args.compact)?;
        }
    }

    if args.verbose {
        eprintln!("\nSynthesis complete:");
        eprintln!("  - Processed {} stylesheets", files.len());
        eprintln!("  - Created {} text styles", totals.created);
        eprintln!("  - Matched {} against the library", totals.matched);
    }

    Ok(CreateSummary {
        files_processed: files.len(),
        result: totals,
        report,
    })
}

/// Write the synthesis report to a file, creating parent directories as needed
#[cfg(feature = "cli")]
fn write_report(path: &Path, report: &SynthesisReport, compact: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if compact {
        report.to_compact_json()?
    } else {
        report.to_pretty_json()?
    };

    std::fs::write(path, content).map_err(|e| TextStyleError::OutputError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(feature = "cli")]
async fn read_stdin() -> Result<String> {
    use tokio::io::{self, AsyncReadExt};

    let mut input = String::new();
    let mut stdin = io::stdin();
    stdin
        .read_to_string(&mut input)
        .await
        .map_err(|e| TextStyleError::InputError(format!("Failed to read from stdin: {}", e)))?;
    Ok(input)
}

/// Handle pipe command - serve the JSON message protocol over stdin/stdout,
/// one request per line, until `cancel` or end of input.
#[cfg(feature = "cli")]
pub async fn handle_pipe_command(args: PipeArgs) -> Result<()> {
    use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

    let config = load_config(args.config.as_ref())?;
    let collection_id = resolve_collection_id(args.collection.as_ref(), &config)?;
    let table = config.build_table();

    let mut registry = InMemoryRegistry::from_json_file(&args.library)?;
    let synthesizer = StyleSynthesizer::new(table, collection_id);
    let notifier = ConsoleNotifier;

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| TextStyleError::InputError(format!("Failed to read from stdin: {}", e)))?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => handle_request(request, &synthesizer, &mut registry, &notifier),
            Err(e) => Response::Error {
                message: format!("Malformed request: {}", e),
            },
        };

        let mut reply = serde_json::to_string(&response)?;
        reply.push('\n');
        stdout
            .write_all(reply.as_bytes())
            .await
            .map_err(|e| TextStyleError::OutputError {
                path: "stdout".to_string(),
                message: e.to_string(),
            })?;
        stdout.flush().await.map_err(|e| TextStyleError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

        if response == Response::Closed {
            break;
        }
    }

    Ok(())
}
