//! Team constants and runtime configuration defaults

// Team shape
/// Number of characters in one team
pub const TEAM_SIZE: usize = 4;

/// Fewest teams that may be generated
pub const MIN_TEAMS: usize = 2;

/// Most teams that may be generated
pub const MAX_TEAMS: usize = 8;

// Add/remove always moves in whole pairs of teams
/// Amount the team count changes per add or remove
pub const TEAM_STEP: usize = 2;

/// Team count at startup
pub const DEFAULT_TEAMS: usize = 2;

// Export settings
/// Separator placed between exported short names
pub const NAME_SEPARATOR: &str = ", ";

/// How long the "Copied!" acknowledgment stays visible
pub const COPY_FEEDBACK_MS: u64 = 1000;

// Rendering
/// Placeholder shown for a team slot with no member
pub const EMPTY_SLOT: &str = "-";

/// Prompt printed before each interactive command
pub const PROMPT: &str = "> ";

// Logging
/// Environment variable read for log filtering
pub const LOG_ENV: &str = "RUST_LOG";

/// Default log level when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log level used with `--quiet`
pub const QUIET_LOG_LEVEL: &str = "warn";
