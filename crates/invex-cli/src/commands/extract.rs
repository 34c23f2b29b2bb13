//! Extract command - pull structured records from a single OCR transcript.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use invex_core::models::config::InvexConfig;
use invex_core::models::record::ExtractionResult;
use invex_core::source::{ExtractionPipeline, TextFileSource};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input transcript file (plain text from an OCR pass over one page)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per line item)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    info!("Processing transcript: {}", args.input.display());

    let pipeline = ExtractionPipeline::new(TextFileSource::new(&args.input));
    let result = pipeline.run()?;

    if result.is_empty() {
        eprintln!(
            "{} No recognizable fields in transcript",
            style("ℹ").blue()
        );
    }

    let pretty = args.pretty || config.output.pretty;
    let output = format_result(&result, args.format, pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration from an explicit path, falling back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<InvexConfig> {
    Ok(if let Some(path) = config_path {
        InvexConfig::from_file(std::path::Path::new(path))?
    } else {
        InvexConfig::default()
    })
}

pub(crate) fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(if pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        }),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["item_code", "item_name", "quantity", "unit_price", "line_total"])?;

    for item in &result.purchase_details.items {
        wtr.write_record([
            &item.item_code,
            &item.item_name,
            &item.quantity.to_string(),
            &item.unit_price.to_string(),
            &item.line_total.to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    let seller = &result.seller_details;
    output.push_str("Seller:\n");
    output.push_str(&format!(
        "  Name:    {}\n",
        seller.seller_name.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  Email:   {}\n",
        seller.seller_email.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  Phone:   {}\n",
        seller.seller_phone.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  Address: {}\n",
        seller.seller_address.as_deref().unwrap_or("-")
    ));
    output.push_str("\n");

    output.push_str("Items:\n");
    if result.purchase_details.items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in &result.purchase_details.items {
        output.push_str(&format!(
            "  [{}] {} x{} @ {} = {}\n",
            item.item_code, item.item_name, item.quantity, item.unit_price, item.line_total
        ));
    }

    match result.purchase_details.order_amount {
        Some(amount) => output.push_str(&format!("\nOrder total: {}\n", amount)),
        None => output.push_str("\nOrder total: not found\n"),
    }

    output
}
