//! Characters, their kinds, and their ratings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::Item;
use crate::track::Tracks;

/// Lowest value a rating may hold.
pub const RATING_MIN: i32 = -2;
/// Highest value a rating may hold.
pub const RATING_MAX: i32 = 3;

/// Unique identifier for a character document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of a character sheet.
///
/// Only hunters carry ratings, tracks, and a classified inventory; the
/// other kinds render as plain description sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    /// A player character hunting monsters.
    Hunter,
    /// A person caught up in a mystery.
    Bystander,
    /// A place where a mystery unfolds.
    Location,
    /// A monster's lesser servant.
    Minion,
    /// The monster itself.
    Monster,
}

impl CharacterKind {
    /// All kinds in registration order.
    pub const ALL: [CharacterKind; 5] = [
        Self::Hunter,
        Self::Bystander,
        Self::Location,
        Self::Minion,
        Self::Monster,
    ];

    /// Try to parse a kind from its schema string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hunter" => Some(Self::Hunter),
            "bystander" => Some(Self::Bystander),
            "location" => Some(Self::Location),
            "minion" => Some(Self::Minion),
            "monster" => Some(Self::Monster),
            _ => None,
        }
    }

    /// Returns true if this kind carries the full hunter sheet.
    pub fn is_hunter(self) -> bool {
        matches!(self, Self::Hunter)
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hunter => write!(f, "hunter"),
            Self::Bystander => write!(f, "bystander"),
            Self::Location => write!(f, "location"),
            Self::Minion => write!(f, "minion"),
            Self::Monster => write!(f, "monster"),
        }
    }
}

/// A named integer attribute used as the modifier in a move roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// The rating's value.
    pub value: i32,
}

impl Rating {
    /// Create a rating, clamping the value into the legal range.
    pub fn new(value: i32) -> Self {
        Self {
            value: value.clamp(RATING_MIN, RATING_MAX),
        }
    }
}

/// A character: descriptive ratings, three bounded resource tracks, and
/// an ordered inventory.
///
/// The engine never retains a character between calls; each operation
/// receives the current state and returns updated values for the caller
/// to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Identifier assigned by the persistence layer.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Which sheet this character uses.
    pub kind: CharacterKind,
    /// Ratings by name (e.g. "Cool", "Tough"). Order is irrelevant.
    pub ratings: BTreeMap<String, Rating>,
    /// The three bounded resource tracks.
    pub tracks: Tracks,
    /// Owned items in display order.
    pub items: Vec<Item>,
}

impl Character {
    /// Create an empty character of the given kind with default tracks.
    pub fn new(name: impl Into<String>, kind: CharacterKind) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            kind,
            ratings: BTreeMap::new(),
            tracks: Tracks::default(),
            items: Vec::new(),
        }
    }

    /// Look up a rating's value by name.
    pub fn rating(&self, name: &str) -> Option<i32> {
        self.ratings.get(name).map(|r| r.value)
    }
}
