//! Command-line interface for meta-checker.
//!
//! Available commands:
//!
//! - **classify**: Classify identifiers as internal ids, names or accession numbers
//! - **frequencies**: Count attributes in a metadata export and compare with a required table
//! - **check**: Run every check for one file against a LIMS snapshot
//!
//! ## Usage
//!
//! ```text
//! # Classify identifiers
//! meta-checker classify 808346 2294STDY5395187 EGAN00001033157 --format json
//!
//! # Check attribute frequencies with the built-in table
//! meta-checker frequencies 5970_1#23.bam.json
//!
//! # Full check against a LIMS snapshot, with the header and a local copy
//! meta-checker check 5970_1#23.bam.json --lims lims.json.gz \
//!     --header 5970_1#23.bam --data-file 5970_1#23.bam
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod classify;
pub mod frequencies;

#[derive(Parser)]
#[command(name = "meta-checker")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Check sequencing file metadata against LIMS records")]
#[command(
    long_about = "meta-checker verifies that the metadata attached to a catalogued sequencing file is consistent.\n\nIt classifies the identifiers found in the metadata and checks:\n- Identifiers resolve to exactly one LIMS entity\n- Identifiers of different kinds name the same entities\n- Required attributes occur the expected number of times\n- Headers, checksums and file names agree with the catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify identifiers by type
    Classify(classify::ClassifyArgs),

    /// Compare attribute frequencies with a required table
    Frequencies(frequencies::FrequenciesArgs),

    /// Run all checks for one file
    Check(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
