//! Character records and the attribute enumerations used for filtering

use clap::ValueEnum;
use std::fmt;

/// Stable character identifier, unique within a catalog
pub type CharacterId = &'static str;

/// Elemental affinity of a character
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Element {
    /// Wind
    Anemo,
    /// Ice
    Cryo,
    /// Nature
    Dendro,
    /// Lightning
    Electro,
    /// Earth
    Geo,
    /// Water
    Hydro,
    /// Fire
    Pyro,
}

/// Gender tag of a character
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// Weapon class wielded by a character
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Weapon {
    /// Bow
    Bow,
    /// Catalyst
    Catalyst,
    /// Claymore
    Claymore,
    /// Polearm
    Polearm,
    /// Sword
    Sword,
}

/// Rarity tier, expressed in stars
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Rarity {
    /// Four stars
    #[value(name = "4")]
    Four,
    /// Five stars
    #[value(name = "5")]
    Five,
}

impl Rarity {
    /// Number of stars for this tier
    pub const fn stars(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Anemo => "Anemo",
            Self::Cryo => "Cryo",
            Self::Dendro => "Dendro",
            Self::Electro => "Electro",
            Self::Geo => "Geo",
            Self::Hydro => "Hydro",
            Self::Pyro => "Pyro",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bow => "Bow",
            Self::Catalyst => "Catalyst",
            Self::Claymore => "Claymore",
            Self::Polearm => "Polearm",
            Self::Sword => "Sword",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}★", self.stars())
    }
}

/// One selectable catalog entry
///
/// Records are immutable and shared read-only for the lifetime of the process.
/// Elements and genders are sets because some characters (the Traveler) carry
/// several of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Character {
    /// Stable unique key
    pub id: CharacterId,
    /// Full display name
    pub name: &'static str,
    /// Short name used when exporting teams
    pub short_name: &'static str,
    /// Elements the character can use
    pub elements: &'static [Element],
    /// Gender tags
    pub genders: &'static [Gender],
    /// Weapon class
    pub weapon: Weapon,
    /// Rarity tier
    pub rarity: Rarity,
}
