use crate::catalog::characters::CHARACTERS;
use crate::catalog::entity::{Character, CharacterId};
use crate::io::error::{Result, invalid_parameter};
use std::collections::HashMap;

/// Ordered, immutable collection of characters with O(1) lookup by id
///
/// Positions are stable for the lifetime of the catalog and double as bit
/// indices in the selection store.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<Character>,
    positions: HashMap<CharacterId, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered list of characters
    ///
    /// # Errors
    ///
    /// Returns an error if two characters share an identifier
    pub fn new(entries: Vec<Character>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (position, character) in entries.iter().enumerate() {
            if positions.insert(character.id, position).is_some() {
                return Err(invalid_parameter(
                    "catalog",
                    &character.id,
                    &"character identifiers must be unique",
                ));
            }
        }
        Ok(Self { entries, positions })
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in table contains a duplicate identifier
    pub fn builtin() -> Result<Self> {
        Self::new(CHARACTERS.to_vec())
    }

    /// All characters in display order
    pub fn all(&self) -> &[Character] {
        &self.entries
    }

    /// Look up a character by id, tolerating unknown ids
    pub fn find(&self, id: &str) -> Option<&Character> {
        self.position(id).and_then(|position| self.entries.get(position))
    }

    /// Display position of a character
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Character at a display position
    pub fn get(&self, position: usize) -> Option<&Character> {
        self.entries.get(position)
    }

    /// Number of characters
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test whether the catalog has no characters
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate identifiers in display order
    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.entries.iter().map(|character| character.id)
    }
}
