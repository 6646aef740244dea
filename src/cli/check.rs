use std::path::PathBuf;

use clap::Args;

use crate::checks::frequency::FrequencyComparison;
use crate::checks::runner::CheckRunner;
use crate::cli::OutputFormat;
use crate::core::check::CheckReport;
use crate::lims::store::EntityStore;
use crate::parsing::avus::parse_avus_file;
use crate::parsing::config::{default_required_frequencies, read_and_parse_config_file};
use crate::parsing::header::parse_file;

#[derive(Args)]
pub struct CheckArgs {
    /// Metadata export (JSON AVU list, optionally gzipped)
    #[arg(required = true)]
    pub metadata: PathBuf,

    /// LIMS snapshot (JSON with samples, libraries and studies; optionally gzipped)
    #[arg(long, required = true)]
    pub lims: PathBuf,

    /// Alignment file or header text to compare read groups against
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Required-frequency table. Defaults to the built-in table.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How actual attribute counts are compared with required ones
    #[arg(long, value_enum, default_value = "equal")]
    pub comparison: FrequencyComparison,

    /// Local copy of the file, used to verify the catalog md5
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Exit with an error if any check fails
    #[arg(long)]
    pub fail_on_violation: bool,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read, the LIMS lookup fails, or
/// `--fail-on-violation` is set and a check fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let metadata = parse_avus_file(&args.metadata)?;
    let store = EntityStore::load_from_file(&args.lims)?;

    if verbose {
        eprintln!(
            "Loaded {} AVUs for {} and {} LIMS entities",
            metadata.avus.len(),
            metadata.subject,
            store.len()
        );
    }

    let required = match &args.config {
        Some(path) => read_and_parse_config_file(path)?,
        None => default_required_frequencies()?,
    };

    let mut runner = CheckRunner::new(&store)
        .with_required_frequencies(required)
        .with_comparison(args.comparison);
    if let Some(path) = &args.header {
        runner = runner.with_read_groups(parse_file(path)?);
    }
    if let Some(path) = &args.data_file {
        runner = runner.with_data_file(path);
    }

    let report = runner.run(&metadata)?;

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Tsv => print_tsv(&report),
    }

    if args.fail_on_violation && report.has_violations() {
        anyhow::bail!(
            "{} check(s) failed for {}",
            report.failed(),
            report.subject
        );
    }

    Ok(())
}

fn print_text(report: &CheckReport) {
    println!("Checks for {}", report.subject);
    println!("{}", "=".repeat(60));

    for result in &report.results {
        let status = if !result.executed {
            "SKIP"
        } else if result.is_violation() {
            "FAIL"
        } else {
            "PASS"
        };
        println!("[{status}] {} ({})", result.check_name, result.severity);
        if let Some(message) = &result.message {
            println!("       {message}");
        }
    }

    println!(
        "\n{} passed, {} failed, {} not executed",
        report.passed(),
        report.failed(),
        report.skipped()
    );
}

fn print_json(report: &CheckReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv(report: &CheckReport) {
    println!("subject\tcheck\tseverity\texecuted\tresult\tmessage");
    for result in &report.results {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            report.subject,
            result.check_name,
            result.severity,
            result.executed,
            result.result,
            result.message.as_deref().unwrap_or("")
        );
    }
}
