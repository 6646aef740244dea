//! Checks run against the metadata of one catalogued file.
//!
//! Reconciliation against the LIMS lives in [`crate::reconcile`]; this module
//! adds the checks that need only the file and its metadata, and the
//! [`runner::CheckRunner`] that combines everything into a
//! [`crate::core::check::CheckReport`].
//!
//! | Check | Inputs | Severity |
//! |-------|--------|----------|
//! | Attribute frequencies | AVUs, required-frequency table | important |
//! | Header samples/libraries | `@RG` lines, `sample`/`library_id` AVUs | critical |
//! | Checksum | `md5` AVU, local data file | critical |
//! | Lanelet | file name, `id_run`/`lane`/`tag_index` AVUs | important |
//!
//! A check whose inputs are absent is reported with `executed == false`.

pub mod checksum;
pub mod frequency;
pub mod header;
pub mod lanelet;
pub mod runner;
