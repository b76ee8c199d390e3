//! Command-line interface for rolling teams once or running an interactive session

use crate::catalog::{Catalog, Element, Gender, Rarity, Weapon};
use crate::export::{ClipboardSink, SystemClipboard, WriteMode};
use crate::filter::FacetValue;
use crate::io::command::{Command, HELP};
use crate::io::configuration::{DEFAULT_TEAMS, PROMPT};
use crate::io::error::{Result, RollError, WithOperation};
use crate::io::render::{write_catalog, write_controls, write_teams};
use crate::session::Session;
use crate::teams::{TeamCount, TeamLimits, TeamShuffler};
use clap::Parser;
use std::io::{BufRead, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "teamroll")]
#[command(
    author,
    version,
    about = "Roll random teams from a filterable character roster"
)]
/// Command-line arguments for the team roller
// Each flag mirrors one on-screen toggle, so several booleans are expected
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Select every character in the catalog
    #[arg(short, long)]
    pub all: bool,

    /// Select characters by id (repeatable or comma-separated)
    #[arg(short = 'S', long = "select", value_name = "ID", value_delimiter = ',')]
    pub select: Vec<String>,

    /// Select every character passing the filters
    #[arg(short, long)]
    pub pick_visible: bool,

    /// Only show characters of these elements
    #[arg(short, long = "element", value_enum, value_name = "ELEMENT")]
    pub elements: Vec<Element>,

    /// Only show characters of these genders
    #[arg(short, long = "gender", value_enum, value_name = "GENDER")]
    pub genders: Vec<Gender>,

    /// Only show characters wielding these weapons
    #[arg(short, long = "weapon", value_enum, value_name = "WEAPON")]
    pub weapons: Vec<Weapon>,

    /// Only show characters of these rarities
    #[arg(short, long = "rarity", value_enum, value_name = "STARS")]
    pub rarities: Vec<Rarity>,

    /// Number of teams to generate
    #[arg(short, long, default_value_t = DEFAULT_TEAMS)]
    pub teams: usize,

    /// Random seed for a reproducible session
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Copy the generated team names to the clipboard
    ///
    /// On Linux the program keeps running until another application takes
    /// over the clipboard, since the copied text is lost once it exits.
    #[arg(short, long)]
    pub copy: bool,

    /// Print the visible catalog before rolling
    #[arg(short, long)]
    pub list: bool,

    /// Read commands from stdin instead of rolling once
    #[arg(short, long)]
    pub interactive: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Every filter value requested on the command line
    pub fn filter_values(&self) -> Vec<FacetValue> {
        self.elements
            .iter()
            .copied()
            .map(FacetValue::Element)
            .chain(self.genders.iter().copied().map(FacetValue::Gender))
            .chain(self.weapons.iter().copied().map(FacetValue::Weapon))
            .chain(self.rarities.iter().copied().map(FacetValue::Rarity))
            .collect()
    }

    /// Check if the clipboard will be needed
    pub const fn needs_clipboard(&self) -> bool {
        self.copy || self.interactive
    }

    /// Clipboard write mode for this run
    ///
    /// A one-shot run exits right after copying, so it must hold the text
    /// until another program takes it.
    pub const fn clipboard_mode(&self) -> WriteMode {
        if self.interactive {
            WriteMode::Immediate
        } else {
            WriteMode::UntilPasted
        }
    }
}

/// Drives one session from command-line arguments
pub struct App {
    cli: Cli,
    session: Session,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl App {
    /// Build the session described by the arguments
    ///
    /// Filters are applied before `--pick-visible` so it sees them.
    ///
    /// # Errors
    ///
    /// Returns an error if the team count is out of bounds or a selected id is
    /// not in the catalog
    pub fn new(cli: Cli) -> Result<Self> {
        let catalog = Catalog::builtin()?;
        let team_count = TeamCount::new(cli.teams, TeamLimits::default())?;
        let shuffler = TeamShuffler::new(cli.seed);
        let mut session = Session::new(catalog, team_count, shuffler);

        for value in cli.filter_values() {
            if !session.filters().is_active(value) {
                session.toggle_filter(value);
            }
        }

        if cli.all {
            session.select_all();
        }
        for id in &cli.select {
            let id = id.trim();
            if session.catalog().find(id).is_none() {
                return Err(RollError::UnknownCharacter { id: id.to_string() });
            }
            if !session.is_selected(id) {
                session.toggle_character(id);
            }
        }
        if cli.pick_visible {
            let added = session.select_visible();
            log::debug!("selected {added} visible characters");
        }

        Ok(Self {
            cli,
            session,
            clipboard: None,
        })
    }

    /// Use the given clipboard instead of probing the system one
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Session state driven by this app
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run according to the arguments, reading commands from `input` when
    /// interactive and writing all output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        if self.cli.needs_clipboard() && self.clipboard.is_none() {
            let clipboard = SystemClipboard::probe(self.cli.clipboard_mode());
            self.clipboard = Some(Box::new(clipboard));
        }

        if self.cli.interactive {
            self.run_interactive(input, out)
        } else {
            self.run_once(out)
        }
    }

    fn run_once(&mut self, out: &mut impl Write) -> Result<()> {
        if self.cli.list {
            write_catalog(out, &self.session).with_operation("write catalog")?;
        }

        if self.session.selection().is_empty() {
            log::warn!("no characters selected; use --all, --select or --pick-visible");
        }

        self.session.generate();
        write_teams(out, &self.session).with_operation("write teams")?;

        if self.cli.copy && !self.session.teams().is_empty() {
            self.copy(out)?;
        }
        Ok(())
    }

    fn run_interactive(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Type 'help' for commands.").with_operation("write prompt")?;
        write_controls(out, &self.session, Instant::now()).with_operation("write controls")?;

        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}").with_operation("write prompt")?;
            out.flush().with_operation("flush output")?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.with_operation("read command")?;

            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command, out)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    writeln!(out, "error: {err}").with_operation("write error")?;
                }
            }
        }
        Ok(())
    }

    /// Apply one interactive command
    ///
    /// Returns `false` when the session should end.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::List => {
                write_catalog(out, &self.session).with_operation("write catalog")?;
            }
            Command::Toggle(ids) => {
                for id in ids {
                    if let Some(selected) = self.session.toggle_character(&id) {
                        let state = if selected { "selected" } else { "deselected" };
                        writeln!(out, "{id} {state}").with_operation("write selection")?;
                    } else {
                        let err = RollError::UnknownCharacter { id };
                        writeln!(out, "error: {err}").with_operation("write error")?;
                    }
                }
            }
            Command::ToggleAll => {
                let all = self.session.toggle_all();
                let count = self.session.selection().len();
                let verb = if all { "Selected" } else { "Deselected" };
                writeln!(out, "{verb} all ({count} selected)").with_operation("write selection")?;
            }
            Command::SelectVisible => {
                let added = self.session.select_visible();
                writeln!(out, "Selected {added} more characters")
                    .with_operation("write selection")?;
            }
            Command::Filter(values) => {
                for value in values {
                    let state = if self.session.toggle_filter(value) {
                        "on"
                    } else {
                        "off"
                    };
                    writeln!(out, "filter {value} {state}").with_operation("write filter")?;
                }
            }
            Command::ClearFilters => {
                self.session.clear_filters();
                writeln!(out, "Filters cleared").with_operation("write filter")?;
            }
            Command::AddTeam => {
                let count = self.session.increase_teams();
                writeln!(out, "{count} teams").with_operation("write team count")?;
            }
            Command::RemoveTeam => {
                let count = self.session.decrease_teams();
                writeln!(out, "{count} teams").with_operation("write team count")?;
            }
            Command::Generate => {
                self.session.generate();
                write_teams(out, &self.session).with_operation("write teams")?;
            }
            Command::Copy => {
                if self.session.teams().is_empty() {
                    writeln!(out, "Nothing to copy; generate teams first")
                        .with_operation("write copy status")?;
                } else {
                    self.copy(out)?;
                }
            }
            Command::Teams => {
                write_teams(out, &self.session).with_operation("write teams")?;
            }
            Command::Help => {
                writeln!(out, "{HELP}").with_operation("write help")?;
            }
            Command::Quit => return Ok(false),
        }

        write_controls(out, &self.session, Instant::now()).with_operation("write controls")?;
        Ok(true)
    }

    fn copy(&mut self, out: &mut impl Write) -> Result<()> {
        let Some(clipboard) = self.clipboard.as_deref_mut() else {
            return Ok(());
        };
        if self.session.copy_team_names(clipboard, Instant::now()) {
            writeln!(out, "Copied: {}", self.session.team_names())
                .with_operation("write copy status")?;
        }
        Ok(())
    }
}
