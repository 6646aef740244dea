use std::path::PathBuf;

use clap::Args;

use crate::checks::frequency::{
    build_freq_dict_from_avus_list, check_attribute_frequencies, FrequencyComparison,
    FrequencyMap,
};
use crate::cli::OutputFormat;
use crate::core::check::CheckResult;
use crate::parsing::avus::parse_avus_file;
use crate::parsing::config::{default_required_frequencies, read_and_parse_config_file};

#[derive(Args)]
pub struct FrequenciesArgs {
    /// Metadata export (JSON AVU list, optionally gzipped)
    #[arg(required = true)]
    pub metadata: PathBuf,

    /// Required-frequency table (`<attribute> <count>` per line).
    /// Defaults to the built-in table.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How actual counts are compared with required ones
    #[arg(long, value_enum, default_value = "equal")]
    pub comparison: FrequencyComparison,
}

/// Execute frequencies subcommand
///
/// # Errors
///
/// Returns an error if the metadata or config cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FrequenciesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let metadata = parse_avus_file(&args.metadata)?;
    let required = match &args.config {
        Some(path) => read_and_parse_config_file(path)?,
        None => default_required_frequencies()?,
    };

    if verbose {
        eprintln!(
            "Loaded {} AVUs and {} required attributes",
            metadata.avus.len(),
            required.len()
        );
    }

    let actual = build_freq_dict_from_avus_list(&metadata.avus);
    let violations = check_attribute_frequencies(&actual, &required, args.comparison);

    match format {
        OutputFormat::Text => print_text(&actual, &required, &violations),
        OutputFormat::Json => print_json(&actual, &required, &violations)?,
        OutputFormat::Tsv => print_tsv(&actual, &required, args.comparison),
    }

    Ok(())
}

fn print_text(actual: &FrequencyMap, required: &FrequencyMap, violations: &[CheckResult]) {
    println!("Attribute Frequencies");
    println!("{}", "=".repeat(60));
    for (attribute, count) in actual {
        let marker = if required.contains_key(attribute) { "*" } else { " " };
        println!("{marker} {attribute:<30} {count}");
    }

    if violations.is_empty() {
        println!("\nAll {} required attributes present as expected.", required.len());
    } else {
        println!("\nViolations ({}):", violations.len());
        for violation in violations {
            if let Some(message) = &violation.message {
                println!("  - {message}");
            }
        }
    }
}

fn print_json(
    actual: &FrequencyMap,
    required: &FrequencyMap,
    violations: &[CheckResult],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "frequencies": actual,
        "required": required,
        "violations": violations,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(actual: &FrequencyMap, required: &FrequencyMap, comparison: FrequencyComparison) {
    println!("attribute\tcount\trequired\tok");
    for (attribute, &threshold) in required {
        let count = actual.get(attribute).copied().unwrap_or(0);
        println!(
            "{attribute}\t{count}\t{threshold}\t{}",
            comparison.accepts(count, threshold)
        );
    }
}
