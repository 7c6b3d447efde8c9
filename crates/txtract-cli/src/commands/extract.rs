//! Extract command - pull transactions from a single text file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::{debug, info};

use txtract_core::models::config::TxtractConfig;
use txtract_core::models::transaction::TransactionKind;
use txtract_core::{extract_transactions_from_bytes, DocumentKind, TransactionDraft};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file (OCR output or PDF-export text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document kind (default: from config)
    #[arg(short, long, value_enum)]
    kind: Option<KindArg>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Run date stamped on drafts without a date line (YYYY-MM-DD, default: today)
    #[arg(long, value_parser = parse_run_date)]
    date: Option<NaiveDate>,

    /// Show validation issues for each draft
    #[arg(long)]
    validate: bool,

    /// Exit with an error when no transactions are found
    #[arg(long)]
    fail_on_empty: bool,
}

/// Document kind as exposed on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    /// Free-form POS receipt text
    Pos,
    /// Line-per-transaction structured export
    Structured,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Pos => DocumentKind::PosReceipt,
            KindArg::Structured => DocumentKind::StructuredExport,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        TxtractConfig::from_file(std::path::Path::new(path))?
    } else {
        TxtractConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let kind: DocumentKind = args
        .kind
        .map(Into::into)
        .unwrap_or(config.extraction.default_kind);
    let run_date = args.date.unwrap_or_else(|| Local::now().date_naive());

    info!(
        "Processing file: {} as {:?}",
        args.input.display(),
        kind
    );

    let bytes = fs::read(&args.input)?;
    let drafts = extract_transactions_from_bytes(&bytes, kind, run_date)?;

    if drafts.is_empty() && (args.fail_on_empty || config.extraction.fail_on_empty) {
        anyhow::bail!(
            "No transactions found in {}. Check that the text is a receipt and the right --kind was chosen.",
            args.input.display()
        );
    }

    // Surface validation issues without blocking output
    if args.validate {
        for (i, draft) in drafts.iter().enumerate() {
            let issues = draft.validate();
            if !issues.is_empty() {
                eprintln!(
                    "{} transaction {}:",
                    style("Validation issues for").yellow(),
                    i + 1
                );
                for issue in &issues {
                    eprintln!("  - {}", issue);
                }
            }
        }
    }

    let format = resolve_format(args.format, &config);
    let output = format_drafts(&drafts, format, config.output.pretty)?;

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

    println!(
        "{} Extracted {} transaction(s)",
        style("✓").green(),
        drafts.len()
    );

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Parse the `--date` argument.
pub fn parse_run_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date {:?}: {}", s, e))
}

/// Pick the output format: CLI flag first, then config.
pub fn resolve_format(arg: Option<OutputFormat>, config: &TxtractConfig) -> OutputFormat {
    arg.unwrap_or(match config.output.format.as_str() {
        "csv" => OutputFormat::Csv,
        "text" => OutputFormat::Text,
        _ => OutputFormat::Json,
    })
}

/// Render drafts in the requested output format.
pub fn format_drafts(
    drafts: &[TransactionDraft],
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(drafts)?
            } else {
                serde_json::to_string(drafts)?
            };
            Ok(json)
        }
        OutputFormat::Csv => format_drafts_csv(drafts),
        OutputFormat::Text => Ok(format_drafts_text(drafts)),
    }
}

fn format_drafts_csv(drafts: &[TransactionDraft]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "kind",
        "amount",
        "date",
        "category",
        "description",
        "paymentMethod",
    ])?;

    for draft in drafts {
        wtr.write_record([
            kind_label(draft.kind),
            &draft.amount.to_string(),
            &draft.date.to_string(),
            &draft.category,
            &draft.description,
            &draft.payment_method,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_drafts_text(drafts: &[TransactionDraft]) -> String {
    let mut output = String::new();

    for (i, draft) in drafts.iter().enumerate() {
        output.push_str(&format!("Transaction {}\n", i + 1));
        output.push_str(&format!("  Kind:     {}\n", kind_label(draft.kind)));
        output.push_str(&format!("  Amount:   {}\n", draft.amount));
        output.push_str(&format!("  Date:     {}\n", draft.date));
        output.push_str(&format!("  Category: {}\n", draft.category));
        output.push_str(&format!("  Payment:  {}\n", draft.payment_method));
        output.push_str(&format!("  Desc:     {}\n", draft.description));
        output.push('\n');
    }

    output
}

pub fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "expense",
    }
}
