//! Random team builder over a filterable character catalog
//!
//! Characters are picked from a fixed catalog, the visible roster is narrowed
//! by independent facet filters, and the picks are shuffled into a bounded
//! number of fixed-size teams that can be exported as a name list.

#![forbid(unsafe_code)]

/// Static character catalog and attribute enumerations
pub mod catalog;
/// Team name export and clipboard access
pub mod export;
/// Facet filters deciding catalog visibility
pub mod filter;
/// Input/output operations, configuration and error handling
pub mod io;
/// Selection of characters independent of visibility
pub mod selection;
/// Explicit session state shared by every control
pub mod session;
/// Team count configuration and randomized partitioning
pub mod teams;

pub use io::error::{Result, RollError};
