//! Line-oriented commands for the interactive session
//!
//! Each command corresponds to one on-screen control of the team builder.

use crate::filter::FacetValue;
use crate::io::error::{Result, RollError};

/// Help text listing every interactive command
pub const HELP: &str = "\
Commands:
  list               show visible characters ([x] = selected)
  toggle <id>...     select or deselect characters
  all                select all, or deselect all when everything is selected
  visible            select every visible character
  filter <value>...  toggle filters, e.g. pyro, sword, female, 5, element=geo
  clear              turn every filter off
  add                add teams
  remove             remove teams
  generate           shuffle the selection into teams
  copy               copy team names to the clipboard
  teams              show the current teams
  help               show this help
  quit               leave";

/// A parsed interactive command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the visible catalog
    List,
    /// Toggle selection of the given character ids
    Toggle(Vec<String>),
    /// Combined select/deselect-all control
    ToggleAll,
    /// Select every visible character
    SelectVisible,
    /// Toggle the given filter values
    Filter(Vec<FacetValue>),
    /// Turn every filter off
    ClearFilters,
    /// Increase the team count
    AddTeam,
    /// Decrease the team count
    RemoveTeam,
    /// Generate new teams
    Generate,
    /// Copy team names
    Copy,
    /// Print the current teams
    Teams,
    /// Print the help text
    Help,
    /// End the session
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, missing arguments, or filter
    /// values that match no facet
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "toggle" | "t" => {
                if args.is_empty() {
                    return Err(missing_argument(line));
                }
                Self::Toggle(args.iter().map(|id| (*id).to_string()).collect())
            }
            "all" => Self::ToggleAll,
            "visible" => Self::SelectVisible,
            "filter" | "f" => {
                if args.is_empty() {
                    return Err(missing_argument(line));
                }
                Self::Filter(
                    args.iter()
                        .map(|raw| raw.parse::<FacetValue>())
                        .collect::<Result<Vec<FacetValue>>>()?,
                )
            }
            "clear" => Self::ClearFilters,
            "add" | "+" => Self::AddTeam,
            "remove" | "-" => Self::RemoveTeam,
            "generate" | "roll" | "g" => Self::Generate,
            "copy" | "c" => Self::Copy,
            "teams" => Self::Teams,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => {
                return Err(RollError::UnknownCommand {
                    input: line.trim().to_string(),
                });
            }
        };
        Ok(Some(command))
    }
}

fn missing_argument(line: &str) -> RollError {
    RollError::UnknownCommand {
        input: format!("{} (missing argument)", line.trim()),
    }
}
