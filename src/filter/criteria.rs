use crate::catalog::{Catalog, Character, Element, Gender, Rarity, Weapon};
use crate::filter::facet::{FacetSet, FacetValue};

/// Active facet filters deciding which characters are visible
///
/// Facets combine with AND; values inside one facet combine with OR. Filtering
/// only controls visibility and never touches the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    elements: FacetSet<Element>,
    genders: FacetSet<Gender>,
    weapons: FacetSet<Weapon>,
    rarities: FacetSet<Rarity>,
}

impl FilterCriteria {
    /// Create criteria with every facet inactive
    pub const fn new() -> Self {
        Self {
            elements: FacetSet::new(),
            genders: FacetSet::new(),
            weapons: FacetSet::new(),
            rarities: FacetSet::new(),
        }
    }

    /// Toggle one facet value
    ///
    /// Returns whether the value is active afterwards
    pub fn toggle(&mut self, value: FacetValue) -> bool {
        match value {
            FacetValue::Element(element) => self.elements.toggle(element),
            FacetValue::Gender(gender) => self.genders.toggle(gender),
            FacetValue::Weapon(weapon) => self.weapons.toggle(weapon),
            FacetValue::Rarity(rarity) => self.rarities.toggle(rarity),
        }
    }

    /// Test whether a facet value is active
    pub fn is_active(&self, value: FacetValue) -> bool {
        match value {
            FacetValue::Element(element) => self.elements.contains(element),
            FacetValue::Gender(gender) => self.genders.contains(gender),
            FacetValue::Weapon(weapon) => self.weapons.contains(weapon),
            FacetValue::Rarity(rarity) => self.rarities.contains(rarity),
        }
    }

    /// Visibility predicate for a single character
    pub fn is_visible(&self, character: &Character) -> bool {
        self.elements.matches_any(character.elements)
            && self.genders.matches_any(character.genders)
            && self.weapons.matches(character.weapon)
            && self.rarities.matches(character.rarity)
    }

    /// Characters passing every facet, in catalog order
    pub fn visible<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Character> {
        catalog
            .all()
            .iter()
            .filter(|character| self.is_visible(character))
    }

    /// Test whether no facet constrains visibility
    pub fn is_unfiltered(&self) -> bool {
        !(self.elements.is_active()
            || self.genders.is_active()
            || self.weapons.is_active()
            || self.rarities.is_active())
    }

    /// Every active value across all facets
    pub fn active_values(&self) -> Vec<FacetValue> {
        self.elements
            .iter()
            .map(FacetValue::Element)
            .chain(self.genders.iter().map(FacetValue::Gender))
            .chain(self.weapons.iter().map(FacetValue::Weapon))
            .chain(self.rarities.iter().map(FacetValue::Rarity))
            .collect()
    }

    /// Deactivate every facet
    pub fn clear(&mut self) {
        self.elements.clear();
        self.genders.clear();
        self.weapons.clear();
        self.rarities.clear();
    }
}
