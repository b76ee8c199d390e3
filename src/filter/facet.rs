use crate::catalog::{Element, Gender, Rarity, Weapon};
use crate::io::error::RollError;
use clap::ValueEnum;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One independent filtering dimension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Elemental affinity
    Element,
    /// Gender tag
    Gender,
    /// Weapon class
    Weapon,
    /// Rarity tier
    Rarity,
}

impl Facet {
    /// Lowercase name used in `facet=value` syntax
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Gender => "gender",
            Self::Weapon => "weapon",
            Self::Rarity => "rarity",
        }
    }

    /// Parse a facet name
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Element, Self::Gender, Self::Weapon, Self::Rarity]
            .into_iter()
            .find(|facet| facet.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Parse a value belonging to this facet
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid value of this facet
    pub fn parse_value(self, raw: &str) -> Result<FacetValue, RollError> {
        let raw = raw.trim();
        let parsed = match self {
            Self::Element => <Element as ValueEnum>::from_str(raw, true)
                .ok()
                .map(FacetValue::Element),
            Self::Gender => <Gender as ValueEnum>::from_str(raw, true)
                .ok()
                .map(FacetValue::Gender),
            Self::Weapon => <Weapon as ValueEnum>::from_str(raw, true)
                .ok()
                .map(FacetValue::Weapon),
            Self::Rarity => <Rarity as ValueEnum>::from_str(raw.trim_end_matches('★'), true)
                .ok()
                .map(FacetValue::Rarity),
        };
        parsed.ok_or_else(|| RollError::UnknownFacetValue {
            value: raw.to_string(),
        })
    }
}

/// A value tagged with the facet it filters on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacetValue {
    /// Element filter value
    Element(Element),
    /// Gender filter value
    Gender(Gender),
    /// Weapon filter value
    Weapon(Weapon),
    /// Rarity filter value
    Rarity(Rarity),
}

impl FacetValue {
    /// The dimension this value belongs to
    pub const fn facet(self) -> Facet {
        match self {
            Self::Element(_) => Facet::Element,
            Self::Gender(_) => Facet::Gender,
            Self::Weapon(_) => Facet::Weapon,
            Self::Rarity(_) => Facet::Rarity,
        }
    }
}

impl FromStr for FacetValue {
    type Err = RollError;

    /// Accepts `facet=value` or a bare value; bare values are unambiguous
    /// because no two facets share a value name.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if let Some((facet, value)) = raw.split_once('=') {
            return Facet::from_name(facet).map_or_else(
                || {
                    Err(RollError::UnknownFacetValue {
                        value: raw.trim().to_string(),
                    })
                },
                |facet| facet.parse_value(value),
            );
        }

        [Facet::Element, Facet::Weapon, Facet::Gender, Facet::Rarity]
            .into_iter()
            .find_map(|facet| facet.parse_value(raw).ok())
            .ok_or_else(|| RollError::UnknownFacetValue {
                value: raw.trim().to_string(),
            })
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => write!(f, "{}={element}", Facet::Element.name()),
            Self::Gender(gender) => write!(f, "{}={gender}", Facet::Gender.name()),
            Self::Weapon(weapon) => write!(f, "{}={weapon}", Facet::Weapon.name()),
            Self::Rarity(rarity) => write!(f, "{}={}", Facet::Rarity.name(), rarity.stars()),
        }
    }
}

/// Active values of one facet
///
/// An empty set places no constraint on its facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetSet<T: Ord + Copy> {
    values: BTreeSet<T>,
}

impl<T: Ord + Copy> FacetSet<T> {
    /// Create a set with no active values
    pub const fn new() -> Self {
        Self {
            values: BTreeSet::new(),
        }
    }

    /// Add the value if absent, remove it if present
    ///
    /// Returns whether the value is active afterwards
    pub fn toggle(&mut self, value: T) -> bool {
        if self.values.remove(&value) {
            false
        } else {
            self.values.insert(value);
            true
        }
    }

    /// Test whether a value is active
    pub fn contains(&self, value: T) -> bool {
        self.values.contains(&value)
    }

    /// Test whether the facet constrains anything
    pub fn is_active(&self) -> bool {
        !self.values.is_empty()
    }

    /// Match a scalar attribute
    pub fn matches(&self, value: T) -> bool {
        !self.is_active() || self.contains(value)
    }

    /// Match a collection attribute: any shared value passes
    pub fn matches_any(&self, values: &[T]) -> bool {
        !self.is_active() || values.iter().any(|&value| self.contains(value))
    }

    /// Deactivate every value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate active values in order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }
}

impl<T: Ord + Copy> Default for FacetSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
