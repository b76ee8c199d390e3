//! Static character catalog
//!
//! This module contains the read-only data the rest of the crate works on:
//! - Character records and their attribute enumerations
//! - The built-in character table
//! - An indexed catalog with tolerant lookup

/// Built-in character table
pub mod characters;
/// Character records and attribute enumerations
pub mod entity;
/// Indexed catalog with lookup by identifier
pub mod index;

pub use entity::{Character, CharacterId, Element, Gender, Rarity, Weapon};
pub use index::Catalog;
