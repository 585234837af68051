//! Aggregation engine: pure, deterministic statistics over wear history.
//!
//! Every function here takes an already-fetched snapshot (wear events
//! restricted to the queried window, plus a garment catalog) and returns
//! owned values. Nothing in this module touches storage, suspends, or keeps
//! state between calls, so concurrent queries need no locking; ranked
//! output always carries an explicit secondary sort key so repeated runs
//! are byte-identical.
//!
//! # Modules
//!
//! - [`frequency`]: per-garment wear counts, ranked
//! - [`pairs`]: co-worn garment pairs, counted, filtered, ranked
//! - [`dormancy`]: rarely-worn and never-worn garments
//! - [`breakdown`]: incidence counts grouped by category, color, or season
//! - [`periods`]: weekly or monthly event counts
//! - [`summary`]: one-shot digest composed from frequency and breakdown

pub mod breakdown;
pub mod dormancy;
pub mod frequency;
pub mod pairs;
pub mod periods;
pub mod summary;
