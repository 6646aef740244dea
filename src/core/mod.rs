//! Core data types for metadata consistency checking.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Identifier`]: A raw identifier string or integer, with no type tag
//! - [`IdentifierType`], [`EntityType`]: Classification enums
//! - [`Entity`]: A sample, library, or study record from the LIMS
//! - [`Avu`], [`FileMetadata`]: Attribute-value metadata from the file catalog
//! - [`ReadGroup`]: An `@RG` record from an alignment file header
//! - [`Lanelet`]: Run/lane/tag identity of a data file
//! - [`CheckResult`], [`CheckReport`]: Uniform output of every check
//!
//! ## Identifier Kinds
//!
//! | Kind | Example | Issued by |
//! |------|---------|-----------|
//! | internal id | `808346` | LIMS primary key |
//! | name | `2294STDY5395187` | LIMS, human-readable |
//! | accession number | `EGAN00001033157` | EGA/ENA/SRA/DDBJ |
//!
//! [`Identifier`]: identifier::Identifier
//! [`IdentifierType`]: types::IdentifierType
//! [`EntityType`]: types::EntityType
//! [`Entity`]: entity::Entity
//! [`Avu`]: avu::Avu
//! [`FileMetadata`]: avu::FileMetadata
//! [`ReadGroup`]: read_group::ReadGroup
//! [`Lanelet`]: lanelet::Lanelet
//! [`CheckResult`]: check::CheckResult
//! [`CheckReport`]: check::CheckReport

pub mod avu;
pub mod check;
pub mod entity;
pub mod identifier;
pub mod lanelet;
pub mod read_group;
pub mod types;
