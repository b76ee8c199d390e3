use crate::catalog::{Catalog, Character, CharacterId};
use crate::export::{ClipboardSink, CopyFeedback, format_team_names};
use crate::filter::{FacetValue, FilterCriteria};
use crate::selection::SelectionStore;
use crate::teams::{TeamCount, TeamShuffler, Teams};
use std::time::Instant;

/// All interactive state, owned in one place
///
/// Each user control maps to exactly one method. Filters, selection and team
/// count change independently; teams are only replaced by [`Session::generate`].
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    filters: FilterCriteria,
    selection: SelectionStore,
    team_count: TeamCount,
    shuffler: TeamShuffler,
    teams: Teams,
    copy_feedback: CopyFeedback,
}

impl Session {
    /// Start a session with nothing selected and no filters active
    pub fn new(catalog: Catalog, team_count: TeamCount, shuffler: TeamShuffler) -> Self {
        let selection = SelectionStore::new(&catalog);
        let teams = Teams::empty(team_count.get(), team_count.limits().team_size);
        Self {
            catalog,
            filters: FilterCriteria::new(),
            selection,
            team_count,
            shuffler,
            teams,
            copy_feedback: CopyFeedback::default(),
        }
    }

    /// The catalog this session draws from
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active filters
    pub const fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Current selection
    pub const fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Current team count
    pub const fn team_count(&self) -> &TeamCount {
        &self.team_count
    }

    /// Most recently generated teams
    pub const fn teams(&self) -> &Teams {
        &self.teams
    }

    /// Toggle one filter value, returning whether it is active afterwards
    pub fn toggle_filter(&mut self, value: FacetValue) -> bool {
        let active = self.filters.toggle(value);
        log::debug!("filter {value} {}", if active { "on" } else { "off" });
        active
    }

    /// Turn every filter off
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Visibility of one character under the active filters
    pub fn is_visible(&self, character: &Character) -> bool {
        self.filters.is_visible(character)
    }

    /// Characters passing the active filters, in catalog order
    pub fn visible_characters(&self) -> Vec<&Character> {
        self.filters.visible(&self.catalog).collect()
    }

    /// Toggle a character's selection
    ///
    /// Returns `None` and changes nothing when the id is unknown.
    pub fn toggle_character(&mut self, id: &str) -> Option<bool> {
        self.selection.toggle(&self.catalog, id)
    }

    /// Test whether a character is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(&self.catalog, id)
    }

    /// Select the whole catalog, whatever the filters show
    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    /// Clear the selection
    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    /// Test whether the whole catalog is selected
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected()
    }

    /// Combined select/deselect-all control
    pub fn toggle_all(&mut self) -> bool {
        self.selection.toggle_all()
    }

    /// Add every visible character to the selection
    pub fn select_visible(&mut self) -> usize {
        self.selection.select_visible(&self.catalog, &self.filters)
    }

    /// Selected identifiers in catalog order
    pub fn selected_ids(&self) -> Vec<CharacterId> {
        self.selection.ids(&self.catalog)
    }

    /// Add a step of teams
    pub fn increase_teams(&mut self) -> usize {
        self.team_count.increase()
    }

    /// Remove a step of teams
    pub fn decrease_teams(&mut self) -> usize {
        self.team_count.decrease()
    }

    /// Shuffle the selection into fresh teams, discarding the previous result
    pub fn generate(&mut self) -> &Teams {
        let selected = self.selection.ids(&self.catalog);
        let team_count = self.team_count.get();
        let team_size = self.team_count.limits().team_size;
        self.teams = self.shuffler.generate(selected, team_count, team_size);
        log::debug!(
            "generated {team_count} teams from {} selected characters ({} of {} slots filled)",
            self.selection.len(),
            self.teams.len(),
            self.team_count.capacity()
        );
        &self.teams
    }

    /// Short names of every generated member, ready for copying
    pub fn team_names(&self) -> String {
        format_team_names(self.teams.members(), &self.catalog)
    }

    /// Copy team names to a sink
    ///
    /// Does nothing and returns `false` when the sink is unavailable. A failed
    /// write is logged and leaves all session state apart from the
    /// acknowledgment untouched.
    pub fn copy_team_names(&mut self, sink: &mut dyn ClipboardSink, now: Instant) -> bool {
        if !sink.is_available() {
            log::warn!("clipboard unavailable, team names not copied");
            return false;
        }

        let names = self.team_names();
        self.copy_feedback.arm(now);

        if let Err(err) = sink.write_text(&names) {
            log::error!("failed to copy team names: {err}");
        }
        true
    }

    /// Test whether the "copied" acknowledgment is showing
    pub fn is_copy_acknowledged(&self, now: Instant) -> bool {
        self.copy_feedback.is_active(now)
    }
}
