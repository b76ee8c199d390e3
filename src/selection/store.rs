use crate::catalog::{Catalog, CharacterId};
use crate::filter::FilterCriteria;
use crate::selection::bitset::PositionBitset;

/// The user's current picks, independent of visibility
///
/// One bit per catalog position, so only catalog characters can ever be
/// selected and duplicates cannot occur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionStore {
    picked: PositionBitset,
}

impl SelectionStore {
    /// Create an empty selection sized for a catalog
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            picked: PositionBitset::new(catalog.len()),
        }
    }

    /// Toggle a character by id
    ///
    /// Returns whether the character is selected afterwards, or `None` for an
    /// id the catalog does not know (which leaves the selection untouched).
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> Option<bool> {
        catalog
            .position(id)
            .map(|position| self.picked.toggle(position))
    }

    /// Test whether a character is selected
    pub fn contains(&self, catalog: &Catalog, id: &str) -> bool {
        catalog
            .position(id)
            .is_some_and(|position| self.picked.contains(position))
    }

    /// Select every catalog character, ignoring visibility filters
    pub fn select_all(&mut self) {
        self.picked.fill(true);
    }

    /// Clear the selection
    pub fn deselect_all(&mut self) {
        self.picked.fill(false);
    }

    /// Test whether every catalog character is selected
    pub fn is_all_selected(&self) -> bool {
        self.picked.is_full()
    }

    /// Combined bulk action: deselect everything when all are selected,
    /// otherwise select everything
    ///
    /// Returns whether everything is selected afterwards
    pub fn toggle_all(&mut self) -> bool {
        if self.is_all_selected() {
            self.deselect_all();
            false
        } else {
            self.select_all();
            true
        }
    }

    /// Add every currently visible character; never deselects
    ///
    /// Returns how many characters were newly selected
    pub fn select_visible(&mut self, catalog: &Catalog, filters: &FilterCriteria) -> usize {
        let mut added = 0;
        for (position, character) in catalog.all().iter().enumerate() {
            if filters.is_visible(character) && !self.picked.contains(position) {
                self.picked.insert(position);
                added += 1;
            }
        }
        added
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.picked.count()
    }

    /// Test whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Selected identifiers in catalog order
    pub fn ids(&self, catalog: &Catalog) -> Vec<CharacterId> {
        self.picked
            .iter()
            .filter_map(|position| catalog.get(position))
            .map(|character| character.id)
            .collect()
    }
}
