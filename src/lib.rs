//! chartkit - the reusable core of a clinical-documentation editor.
//!
//! Two pieces carry real invariants and live here: a lazily loaded,
//! memoized reference catalog (categories -> groups -> items) with a
//! dirty/clean lifecycle, and a pure abbreviation-expansion engine that
//! turns marker-prefixed tokens (":htn") into their stored expansions.
//! Everything widget-shaped - window layout, key wiring, dialogs - stays in
//! the host; it talks to this crate through the `CatalogSource` and
//! `BufferAdapter` seams.

pub mod catalog;
pub mod expansion;
pub mod paths;
pub mod summary;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
