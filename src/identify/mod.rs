//! Identifier classification and partitioning.
//!
//! Identifiers found in file metadata arrive untyped: `808346`, `2294STDY5395187`
//! and `EGAN00001033157` may all refer to the same sample. This module decides
//! which kind each one is and groups them so that each group can be looked up
//! in the LIMS with the right query.
//!
//! ## Precedence
//!
//! 1. **accession number**: archive prefix (`EGA`, `ER`, `SR`, `DR`), uppercase letters, digits
//! 2. **internal id**: decimal digits only
//! 3. **name**: everything else
//!
//! ## Example
//!
//! ```rust
//! use meta_checker::identify::partition::separate_identifiers_by_type;
//!
//! let partition = separate_identifiers_by_type(["123", "MYNAME", "ERP123"]);
//! assert_eq!(partition.internal_id, vec!["123"]);
//! assert_eq!(partition.name, vec!["MYNAME"]);
//! assert_eq!(partition.accession_number, vec!["ERP123"]);
//! ```

pub mod classifier;
pub mod partition;
