//! CLI entry point for the tabular insight tool.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use data_insight::ai::{SummaryFacts, summary_or_notice};
use data_insight::reporting::{
    format_category_aggregate, format_classification, format_descriptive_stats,
    format_missing_summary, format_outlier_summary,
};
use data_insight::{
    AnalysisConfig, CategoryRequest, InsightReport, LoadOptions, ReportGenerator, Table,
    TableAnalyzer, load_csv_path,
};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Automatic insights for tabular data",
    long_about = "Compute descriptive statistics, missing values, category rankings and \
                  outliers for a CSV file, with an optional plain-English summary.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  OPENAI_API_KEY    API key for the summary service (only with --summary)\n\n\
                  EXAMPLES:\n  \
                  # Basic insights\n  \
                  data-insight -i sales.csv\n\n  \
                  # Rank regions by revenue, top/bottom 3\n  \
                  data-insight -i sales.csv --category region --metric revenue --top-n 3\n\n  \
                  # Machine-readable output\n  \
                  data-insight -i sales.csv --json | jq .missing_values"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long)]
    input: String,

    /// Output directory for --emit-report
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Categorical column to group by
    #[arg(long, requires = "metric")]
    category: Option<String>,

    /// Numeric column to total per category
    #[arg(long, requires = "category")]
    metric: Option<String>,

    /// Number of categories to show at each end of the ranking
    #[arg(long)]
    top_n: Option<usize>,

    /// Multiplier k for the IQR outlier fences
    #[arg(long)]
    iqr_multiplier: Option<f64>,

    /// Number of rows shown in the preview
    #[arg(long)]
    preview_rows: Option<usize>,

    /// Field separator (single ASCII character)
    #[arg(long, default_value = ",")]
    separator: char,

    /// Request a plain-English summary
    ///
    /// Requires OPENAI_API_KEY; without it a short notice is shown instead.
    #[arg(long)]
    summary: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and results)
    #[arg(short, long)]
    quiet: bool,

    /// Output JSON to stdout instead of human-readable text
    ///
    /// Disables all logs; only outputs the report.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_insight.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled so that
/// stdout only carries the report.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    dotenv().ok();

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = build_config(&args)?;
    let analyzer = TableAnalyzer::new(config)?;

    let options = LoadOptions::default().with_separator(separator_byte(args.separator)?);
    let table = load_csv_path(&args.input, &options)
        .with_context(|| format!("Could not load {}", args.input))?;

    let category = match (&args.category, &args.metric) {
        (Some(category), Some(metric)) => Some(CategoryRequest::new(
            category,
            metric,
            analyzer.config().default_top_n,
        )),
        _ => None,
    };

    let mut report = ReportGenerator::build_report(
        &analyzer,
        &table,
        Some(args.input.as_str()),
        category.as_ref(),
    )?;

    if args.summary {
        report.summary = Some(request_summary(&report));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        let generator = ReportGenerator::new(PathBuf::from(&args.output));
        let report_path = generator.write_report_to_file(&report, &extract_file_stem(&args.input))?;
        info!("Report written to: {}", report_path.display());
    }

    print_human_readable(&report, &table, analyzer.config().preview_rows);

    Ok(())
}

/// Fold CLI overrides into the analysis configuration.
fn build_config(args: &Args) -> Result<AnalysisConfig> {
    let mut builder = AnalysisConfig::builder();
    if let Some(k) = args.iqr_multiplier {
        builder = builder.iqr_multiplier(k);
    }
    if let Some(rows) = args.preview_rows {
        builder = builder.preview_rows(rows);
    }
    if let Some(n) = args.top_n {
        builder = builder.default_top_n(n);
    }
    Ok(builder.build()?)
}

fn separator_byte(separator: char) -> Result<u8> {
    u8::try_from(separator)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("Separator must be a single ASCII character, got '{}'", separator))
}

/// Summary text for the report; failures come back as a notice, not an error.
#[cfg(feature = "ai")]
fn request_summary(report: &InsightReport) -> String {
    use data_insight::ai::{SummaryProvider, provider_from_env};

    let facts = SummaryFacts::from_report(report);
    match provider_from_env() {
        Ok(provider) => summary_or_notice(
            provider.as_ref().map(|p| p as &dyn SummaryProvider),
            &facts,
        ),
        Err(e) => {
            tracing::warn!("Could not create summary provider: {}", e);
            format!("Summary unavailable: {}", e)
        }
    }
}

#[cfg(not(feature = "ai"))]
fn request_summary(report: &InsightReport) -> String {
    debug!("Summary provider not compiled in");
    summary_or_notice(None, &SummaryFacts::from_report(report))
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

fn print_section(title: &str, body: &str) {
    println!("{}", title);
    println!("{}", "-".repeat(40));
    println!("{}", body);
    println!();
}

/// Print the report as text to stdout.
fn print_human_readable(report: &InsightReport, table: &Table, preview_rows: usize) {
    println!();
    println!("{}", "=".repeat(80));
    println!("AUTOMATIC DATA INSIGHTS");
    println!("{}", "=".repeat(80));
    println!();

    println!(
        "Input: {} ({} rows x {} columns)",
        report.input_file.as_deref().unwrap_or("-"),
        report.shape.0,
        report.shape.1
    );
    println!();

    if preview_rows > 0 {
        debug!("Previewing {} rows", preview_rows);
        print_section("PREVIEW", &table.head(preview_rows).to_string());
    }

    print_section("COLUMN TYPES", &format_classification(&report.columns));
    print_section(
        "DESCRIPTIVE STATISTICS",
        &format_descriptive_stats(&report.descriptive_stats),
    );
    print_section(
        "MISSING VALUES",
        &format_missing_summary(&report.missing_values),
    );
    print_section("OUTLIERS (IQR)", &format_outlier_summary(&report.outliers));

    if let Some(ref insights) = report.category_insights {
        print_section("CATEGORY RANKING", &format_category_aggregate(&insights.ranking));
        print_section(
            &format!("TOP {}", insights.top.len()),
            &format_category_aggregate(&insights.top),
        );
        print_section(
            &format!("BOTTOM {}", insights.bottom.len()),
            &format_category_aggregate(&insights.bottom),
        );
    }

    if let Some(ref summary) = report.summary {
        print_section("SUMMARY", summary);
    }

    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save the JSON report");
    println!("{}", "=".repeat(80));
}
