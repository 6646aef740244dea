//! Readers for the inputs a check consumes.
//!
//! This module provides parsers for:
//!
//! - **Catalog metadata exports**: JSON AVU lists, optionally gzipped
//! - **SAM/BAM/CRAM headers**: Extract `@RG` lines from alignment file headers
//! - **Required-frequency configs**: Two-column `<attribute> <count>` tables
//!
//! ## Example
//!
//! ```rust,no_run
//! use meta_checker::parsing::avus::parse_avus_file;
//! use meta_checker::parsing::header::{parse_file, parse_header_text};
//! use std::path::Path;
//!
//! let metadata = parse_avus_file(Path::new("5970_1#23.bam.json")).unwrap();
//!
//! // Read groups from a BAM file
//! let read_groups = parse_file(Path::new("5970_1#23.bam")).unwrap();
//!
//! // Or from raw header text
//! let read_groups = parse_header_text("@RG\tID:1#23\tSM:2294STDY5395187\n").unwrap();
//! ```
//!
//! ## Supported Tags
//!
//! From SAM `@RG` lines, the following tags are extracted:
//!
//! | Tag | Description | Required |
//! |-----|-------------|----------|
//! | ID  | Read group identifier | Yes |
//! | SM  | Sample | No |
//! | LB  | Library | No |

pub mod avus;
pub mod config;
pub mod header;
