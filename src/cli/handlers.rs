//! Command handlers
//!
//! Each handler returns a process exit code: 0 when the command found what it
//! was asked for, 1 when the run completed but found nothing, 2 on I/O or
//! formatting failure. Handlers never write artifact contents to their
//! declared destination paths; output goes to stdout or the explicit
//! `--output` file only.

use crate::cli::commands::{DetectArgs, ExtractArgs, ExtractorsArgs, OutputFormatArg};
use crate::cli::output::{OutputFormat, OutputFormatter};
use crate::config::HarvestConfig;
use crate::extractors::ExtractorRegistry;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::{error, info};

pub const EXIT_FOUND: i32 = 0;
pub const EXIT_EMPTY: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

/// Handle the `extract` command
pub fn handle_extract(args: ExtractArgs, config: &HarvestConfig) -> i32 {
    let text = match read_input(args.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Failed to read input");
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    let format = match resolve_format(args.format, config) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    let registry = ExtractorRegistry::with_defaults();
    let outcome = match &args.extractor {
        Some(producer) => registry.extract_with(&text, producer),
        None => registry.extract_all(&text),
    };

    let formatter = OutputFormatter::new(format, config.max_preview_chars);
    let rendered = match formatter.format_outcome(&outcome) {
        Ok(rendered) => rendered,
        Err(e) => {
            error!(error = %e, "Failed to format outcome");
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    if let Err(e) = write_output(args.output.as_deref(), &rendered) {
        error!(error = %e, "Failed to write output");
        eprintln!("Error: {:#}", e);
        return EXIT_FAILURE;
    }

    if outcome.succeeded {
        info!(
            total = outcome.all_artifacts.len(),
            valid = outcome.valid_count,
            "Extraction succeeded"
        );
        EXIT_FOUND
    } else {
        info!("No artifacts found");
        EXIT_EMPTY
    }
}

/// Handle the `detect` command
pub fn handle_detect(args: DetectArgs, config: &HarvestConfig) -> i32 {
    let text = match read_input(args.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Failed to read input");
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    let format = match resolve_format(args.format, config) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    let registry = ExtractorRegistry::with_defaults();
    let applicable = registry.detect_applicable(&text);

    let formatter = OutputFormatter::new(format, config.max_preview_chars);
    match formatter.format_detection(&applicable) {
        Ok(rendered) => {
            print!("{}", ensure_newline(rendered));
            if applicable.is_empty() {
                EXIT_EMPTY
            } else {
                EXIT_FOUND
            }
        }
        Err(e) => {
            error!(error = %e, "Failed to format detection");
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

/// Handle the `extractors` command
pub fn handle_extractors(args: ExtractorsArgs, config: &HarvestConfig) -> i32 {
    let format = match resolve_format(args.format, config) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    let registry = ExtractorRegistry::with_defaults();
    let infos = registry.describe_extractors();

    let formatter = OutputFormatter::new(format, config.max_preview_chars);
    match formatter.format_extractors(&infos) {
        Ok(rendered) => {
            print!("{}", ensure_newline(rendered));
            EXIT_FOUND
        }
        Err(e) => {
            error!(error = %e, "Failed to format extractor list");
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

/// An explicit --format flag wins; otherwise the configured default applies
fn resolve_format(arg: Option<OutputFormatArg>, config: &HarvestConfig) -> Result<OutputFormat> {
    match arg {
        Some(arg) => Ok(arg.into()),
        None => OutputFormat::parse(&config.default_format),
    }
}

/// Read response text from a file, or from stdin when the path is absent
/// or "-"
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    let rendered = ensure_newline(rendered.to_string());
    match path {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}

fn ensure_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}
