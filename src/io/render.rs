//! Plain-text rendering of session state
//!
//! Rendering only reads from the session. The alternating card offset applied
//! to team slots is a display transform and never changes team membership.

use crate::catalog::Character;
use crate::io::configuration::EMPTY_SLOT;
use crate::session::Session;
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

/// A control the user can currently trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Bulk toggle; `select` is true when it would select everything
    ToggleAll {
        /// Whether the control selects (true) or deselects (false)
        select: bool,
    },
    /// Generate teams
    Generate,
    /// Copy team names; `copied` while the acknowledgment is showing
    Copy {
        /// Whether the copy acknowledgment is active
        copied: bool,
    },
    /// Add teams
    AddTeam,
    /// Remove teams
    RemoveTeam,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ToggleAll { select: true } => "Select all",
            Self::ToggleAll { select: false } => "Deselect all",
            Self::Generate => "Generate Teams",
            Self::Copy { copied: true } => "Copied!",
            Self::Copy { copied: false } => "Copy Team Names",
            Self::AddTeam => "Add Team",
            Self::RemoveTeam => "Remove Team",
        };
        f.write_str(label)
    }
}

/// Controls shown for the current state, in display order
///
/// Copy only appears once teams exist; add and remove disappear at their bounds.
pub fn available_controls(session: &Session, now: Instant) -> Vec<Control> {
    let mut controls = vec![
        Control::ToggleAll {
            select: !session.is_all_selected(),
        },
        Control::Generate,
    ];
    if !session.teams().is_empty() {
        controls.push(Control::Copy {
            copied: session.is_copy_acknowledged(now),
        });
    }
    if session.team_count().can_increase() {
        controls.push(Control::AddTeam);
    }
    if session.team_count().can_decrease() {
        controls.push(Control::RemoveTeam);
    }
    controls
}

/// Card number for a team slot
///
/// Odd-numbered teams are shifted by one team's width so neighbouring teams
/// alternate their numbering.
pub const fn card_index(team: usize, position: usize, team_size: usize) -> usize {
    position + (team % 2) * team_size
}

/// One-line description of a character
pub fn describe(character: &Character) -> String {
    let elements = character
        .elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "{:<20} {:<34} {:<9} {}",
        character.name, elements, character.weapon, character.rarity
    )
}

/// Write the visible catalog with selection marks
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_catalog(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let visible = session.visible_characters();
    writeln!(
        out,
        "{} of {} characters shown, {} selected",
        visible.len(),
        session.catalog().len(),
        session.selection().len()
    )?;

    if !session.filters().is_unfiltered() {
        let labels = session
            .filters()
            .active_values()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "Filters: {labels}")?;
    }

    for character in visible {
        let mark = if session.is_selected(character.id) {
            'x'
        } else {
            ' '
        };
        writeln!(out, "[{mark}] {:<20} {}", character.id, describe(character))?;
    }
    Ok(())
}

/// Write every team block at the current team count
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_teams(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let teams = session.teams();
    let team_size = teams.team_size();

    for team in 0..session.team_count().get() {
        writeln!(out, "Team {}", team + 1)?;
        for position in 0..team_size {
            let name = teams
                .slot(team, position)
                .and_then(|id| session.catalog().find(id))
                .map_or(EMPTY_SLOT, |character| character.name);
            let card = card_index(team, position, team_size) + 1;
            writeln!(out, "  {card:>2}. {name}")?;
        }
    }
    Ok(())
}

/// Write the control bar
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_controls(out: &mut impl Write, session: &Session, now: Instant) -> io::Result<()> {
    let labels = available_controls(session, now)
        .iter()
        .map(|control| format!("[{control}]"))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{labels}")
}
