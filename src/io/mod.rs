/// Command-line arguments and the session runner
pub mod cli;
/// Interactive command parsing
pub mod command;
/// Team constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Log backend setup
pub mod logging;
/// Plain-text rendering of the catalog, teams and controls
pub mod render;
