//! Batch command - extract records from many OCR transcripts.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use invex_core::models::record::ExtractionResult;
use invex_core::source::{ExtractionPipeline, TextFileSource};

use super::extract::{OutputFormat, format_result, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input transcript files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers (default from config)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single transcript.
struct ProcessOutcome {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text" | "ocr")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching transcripts found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} transcripts to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // The extractors are pure functions of their text input with no shared
    // state, so transcripts can be processed concurrently.
    let jobs = args.jobs.unwrap_or(config.batch.jobs).max(1);
    let results: Vec<ProcessOutcome> = stream::iter(files)
        .map(|path| {
            let pb = overall_pb.clone();
            async move {
                let display_path = path.clone();
                let file_start = Instant::now();
                let joined = tokio::task::spawn_blocking(move || process_transcript(path)).await;
                pb.inc(1);

                match joined {
                    Ok(outcome) => outcome,
                    Err(e) => ProcessOutcome {
                        path: display_path,
                        result: None,
                        error: Some(format!("extraction task failed: {}", e)),
                        processing_time_ms: file_start.elapsed().as_millis() as u64,
                    },
                }
            }
        })
        .buffered(jobs)
        .collect()
        .await;

    overall_pb.finish_with_message("Complete");

    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;
    for outcome in &results {
        if let Some(err) = &outcome.error {
            if continue_on_error {
                warn!("Failed to process {}: {}", outcome.path.display(), err);
            } else {
                error!("Failed to process {}: {}", outcome.path.display(), err);
                anyhow::bail!("Processing failed: {}", err);
            }
        }
    }

    let successful: Vec<_> = results.iter().filter(|r| r.result.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    // Write per-file outputs
    for outcome in &successful {
        if let (Some(result), Some(output_dir)) = (&outcome.result, &args.output_dir) {
            let output_name = outcome
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("transcript");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = format_result(result, args.format, config.output.pretty)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} transcripts in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed transcripts:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_transcript(path: PathBuf) -> ProcessOutcome {
    let file_start = Instant::now();
    let pipeline = ExtractionPipeline::new(TextFileSource::new(&path));

    match pipeline.run() {
        Ok(result) => ProcessOutcome {
            path,
            result: Some(result),
            error: None,
            processing_time_ms: file_start.elapsed().as_millis() as u64,
        },
        Err(e) => ProcessOutcome {
            path,
            result: None,
            error: Some(e.to_string()),
            processing_time_ms: file_start.elapsed().as_millis() as u64,
        },
    }
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'a str,
    seller_name: &'a str,
    seller_email: &'a str,
    items: usize,
    order_amount: String,
    processing_time_ms: u64,
    error: &'a str,
}

fn write_summary(path: &PathBuf, results: &[ProcessOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for outcome in results {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let row = match &outcome.result {
            Some(result) => SummaryRow {
                filename,
                status: "success",
                seller_name: result.seller_details.seller_name.as_deref().unwrap_or(""),
                seller_email: result.seller_details.seller_email.as_deref().unwrap_or(""),
                items: result.purchase_details.items.len(),
                order_amount: result
                    .purchase_details
                    .order_amount
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
                processing_time_ms: outcome.processing_time_ms,
                error: "",
            },
            None => SummaryRow {
                filename,
                status: "error",
                seller_name: "",
                seller_email: "",
                items: 0,
                order_amount: String::new(),
                processing_time_ms: outcome.processing_time_ms,
                error: outcome.error.as_deref().unwrap_or(""),
            },
        };

        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
