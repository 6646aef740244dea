//! Access to the laboratory sample-tracking system (LIMS).
//!
//! Checks never talk to the LIMS directly: they receive an
//! [`EntityLookupPort`](port::EntityLookupPort) and call it once per
//! identifier group. [`EntityStore`](store::EntityStore) implements the port
//! over an in-memory snapshot, loaded from JSON exported by the LIMS:
//!
//! ```json
//! {
//!   "samples": [
//!     {"internal_id": 808346, "name": "2294STDY5395187",
//!      "accession_number": "EGAN00001033157", "studies": ["2278"]}
//!   ],
//!   "libraries": [],
//!   "studies": [
//!     {"internal_id": "2278", "name": "Genomes of X", "accession_number": "EGAS00001000001"}
//!   ]
//! }
//! ```

pub mod port;
pub mod store;
