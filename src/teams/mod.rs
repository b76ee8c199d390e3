//! Team configuration and randomized partitioning
//!
//! This module contains:
//! - The bounded, stepped team count
//! - The shuffler that turns a selection into teams
//! - The generated teams result

/// Team count bounds and stepping
pub mod config;
/// Generated teams and slot access
pub mod result;
/// Random partitioning of a selection
pub mod shuffler;

pub use config::{TeamCount, TeamLimits};
pub use result::Teams;
pub use shuffler::TeamShuffler;
