//! Entity-set reconciliation against the LIMS.
//!
//! This module provides the core consistency checks:
//!
//! - [`check_same_entities`](engine::check_same_entities): Do different identifier
//!   types for the same file resolve to the same entities?
//! - [`EntitySetReconciler`](engine::EntitySetReconciler): Drives lookups through an
//!   injected [`EntityLookupPort`](crate::lims::port::EntityLookupPort)
//! - [`is_id_missing`](predicates::is_id_missing) /
//!   [`is_id_duplicated`](predicates::is_id_duplicated): Pure predicates over fetched entities
//!
//! ## Algorithm
//!
//! 1. Identifiers are partitioned by type (internal id, name, accession number)
//! 2. Each non-empty group is looked up once
//! 3. Entity sets of adjacent non-empty groups are compared by entity key
//! 4. Any symmetric difference becomes a violation
//!
//! ## Example
//!
//! ```rust
//! use meta_checker::core::entity::Entity;
//! use meta_checker::core::types::EntityType;
//! use meta_checker::identify::partition::separate_identifiers_by_type;
//! use meta_checker::lims::store::EntityStore;
//! use meta_checker::reconcile::engine::EntitySetReconciler;
//!
//! let store = EntityStore::new().with_entity(
//!     EntityType::Sample,
//!     Entity::new().with_name("X").with_accession_number("EGAN1"),
//! );
//! let ids = separate_identifiers_by_type(["X", "EGAN1"]);
//!
//! let reconciler = EntitySetReconciler::new(&store);
//! let violations = reconciler
//!     .fetch_and_compare_entity_sets(&ids, EntityType::Sample)
//!     .unwrap();
//! assert!(violations.is_empty());
//! ```

pub mod engine;
pub mod predicates;
