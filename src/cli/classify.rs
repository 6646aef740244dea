use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::IdentifierType;
use crate::identify::classifier::{classify, classify_strict};
use crate::identify::partition::separate_identifiers_by_type;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Identifiers to classify
    #[arg(required = true)]
    pub identifiers: Vec<String>,

    /// Fail on unspecified values (empty, N/A, undefined, unspecified)
    /// instead of classifying them as names
    #[arg(long)]
    pub strict: bool,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error in strict mode if any identifier is unclassifiable.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut classified: Vec<(&str, IdentifierType)> = Vec::with_capacity(args.identifiers.len());
    for id in &args.identifiers {
        let id_type = if args.strict {
            classify_strict(id)?
        } else {
            classify(id)
        };
        classified.push((id.as_str(), id_type));
    }

    if verbose {
        eprintln!("Classified {} identifiers", classified.len());
    }

    match format {
        OutputFormat::Text => print_text(&classified),
        OutputFormat::Json => print_json(&args.identifiers, &classified)?,
        OutputFormat::Tsv => print_tsv(&classified),
    }

    Ok(())
}

fn print_text(classified: &[(&str, IdentifierType)]) {
    let width = classified.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    for (id, id_type) in classified {
        println!("{id:<width$}  {id_type}");
    }
}

fn print_json(identifiers: &[String], classified: &[(&str, IdentifierType)]) -> anyhow::Result<()> {
    let partition = separate_identifiers_by_type(identifiers);
    let output = serde_json::json!({
        "identifiers": classified
            .iter()
            .map(|(id, id_type)| serde_json::json!({ "value": id, "type": id_type }))
            .collect::<Vec<_>>(),
        "partition": partition,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(classified: &[(&str, IdentifierType)]) {
    println!("identifier\ttype");
    for (id, id_type) in classified {
        println!("{id}\t{id_type}");
    }
}
