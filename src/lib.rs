//! # meta-checker
//!
//! A library for checking the metadata of catalogued sequencing files against
//! the LIMS that produced them.
//!
//! Files in a sequencing archive carry attribute/value/unit (AVU) metadata
//! naming the samples, libraries and studies they belong to. The same sample
//! can be named by a LIMS internal id (`808346`), a name (`2294STDY5395187`)
//! or an archive accession number (`EGAN00001033157`), and nothing guarantees
//! that the three agree.
//!
//! `meta-checker` classifies each identifier, looks every group up in the
//! LIMS, and reports where the answers disagree.
//!
//! ## Features
//!
//! - **Identifier classification**: internal id, name or accession number by lexical shape
//! - **Entity reconciliation**: identifiers of different kinds must resolve to the same entities
//! - **Resolution checks**: every identifier must match exactly one LIMS entity
//! - **Study membership**: samples must belong to the study the file is filed under
//! - **Attribute frequencies**: required attributes must occur the expected number of times
//! - **File checks**: read-group header, md5 checksum and run/lane/tag file name
//!
//! ## Example
//!
//! ```rust
//! use meta_checker::{CheckRunner, Entity, EntityStore, EntityType};
//! use meta_checker::core::avu::{Avu, FileMetadata};
//!
//! let lims = EntityStore::new().with_entity(
//!     EntityType::Sample,
//!     Entity::new().with_internal_id("808346").with_name("2294STDY5395187"),
//! );
//!
//! let metadata = FileMetadata::new(
//!     "/seq/5970/5970_1#23.bam",
//!     vec![Avu::new("sample_id", "808346"), Avu::new("sample", "2294STDY5395187")],
//! );
//!
//! let report = CheckRunner::new(&lims).run(&metadata).unwrap();
//! assert!(!report.has_violations());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for identifiers, entities, AVUs and check results
//! - [`identify`]: Identifier classification and partitioning
//! - [`lims`]: The lookup port and an in-memory snapshot store
//! - [`reconcile`]: Entity-set reconciliation
//! - [`checks`]: Frequency, header, checksum and lanelet checks, and the runner
//! - [`parsing`]: Readers for AVU exports, headers and config tables
//! - [`cli`]: Command-line interface implementation

pub mod checks;
pub mod cli;
pub mod core;
pub mod identify;
pub mod lims;
pub mod parsing;
pub mod reconcile;
pub mod utils;

// Re-export commonly used types for convenience
pub use checks::runner::CheckRunner;
pub use core::check::{CheckReport, CheckResult};
pub use core::entity::Entity;
pub use core::identifier::{Identifier, IdentifierError};
pub use core::types::*;
pub use lims::port::{EntityLookupPort, LookupError};
pub use lims::store::EntityStore;
pub use reconcile::engine::EntitySetReconciler;
