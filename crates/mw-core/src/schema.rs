//! The versioned persistence schema.
//!
//! Documents cross the storage boundary in one explicit shape, validated
//! here; nothing downstream probes for alternative field spellings.
//! Validation clamps fixable values and degrades bad items to warnings —
//! a document only fails to load when its kind or version is unusable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterId, CharacterKind, Rating};
use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemCategory};
use crate::track::{Track, Tracks};

/// Version written into every new document.
pub const SCHEMA_VERSION: u32 = 1;

fn default_version() -> u32 {
    SCHEMA_VERSION
}

/// A rating as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingDoc {
    /// The rating's value.
    pub value: i32,
}

/// A track as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDoc {
    /// Cells marked.
    pub current: i32,
    /// Total cells.
    pub max: i32,
}

/// The three tracks as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksDoc {
    /// The harm track.
    pub harm: TrackDoc,
    /// The luck track.
    pub luck: TrackDoc,
    /// The experience track.
    pub experience: TrackDoc,
}

/// An item as persisted.
///
/// The category stays a raw string here so a single unrecognized item
/// degrades to a warning instead of failing the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDoc {
    /// Display name.
    pub name: String,
    /// Category string from the closed set.
    pub category: String,
    /// Optional icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A character document as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDoc {
    /// Schema version; documents from other versions are rejected.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Stable identifier; assigned when the document carries none.
    #[serde(default)]
    pub id: CharacterId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Character kind string from the closed set.
    #[serde(rename = "type")]
    pub kind: String,
    /// Ratings by name.
    #[serde(default)]
    pub ratings: BTreeMap<String, RatingDoc>,
    /// The three resource tracks.
    pub tracks: TracksDoc,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<ItemDoc>,
}

/// A non-fatal defect found while validating a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    /// An item was dropped because its category is not in the closed set.
    UnknownCategory {
        /// Name of the dropped item.
        item: String,
        /// The unrecognized category string.
        category: String,
    },
}

impl SheetDoc {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate into a [`Character`], collecting non-fatal warnings.
    ///
    /// Out-of-range track and rating values are clamped. Items with an
    /// unrecognized category are dropped and reported. An unknown
    /// character kind or schema version is fatal.
    pub fn validate(self) -> CoreResult<(Character, Vec<SchemaWarning>)> {
        if self.version != SCHEMA_VERSION {
            return Err(CoreError::UnsupportedVersion(self.version));
        }
        let kind = CharacterKind::parse(&self.kind)
            .ok_or_else(|| CoreError::UnknownKind(self.kind.clone()))?;

        let mut warnings = Vec::new();
        let mut items = Vec::with_capacity(self.items.len());
        for doc in self.items {
            match ItemCategory::parse(&doc.category) {
                Some(category) => items.push(Item {
                    name: doc.name,
                    category,
                    icon: doc.icon,
                    description: doc.description,
                }),
                None => {
                    log::warn!(
                        "dropping item {:?}: unknown category {:?}",
                        doc.name,
                        doc.category
                    );
                    warnings.push(SchemaWarning::UnknownCategory {
                        item: doc.name,
                        category: doc.category,
                    });
                }
            }
        }

        let ratings = self
            .ratings
            .into_iter()
            .map(|(name, r)| (name, Rating::new(r.value)))
            .collect();

        let character = Character {
            id: self.id,
            name: self.name,
            kind,
            ratings,
            tracks: Tracks {
                harm: validated_track(&self.tracks.harm),
                luck: validated_track(&self.tracks.luck),
                experience: validated_track(&self.tracks.experience),
            },
            items,
        };

        Ok((character, warnings))
    }
}

fn validated_track(doc: &TrackDoc) -> Track {
    Track::with_current(doc.current, doc.max)
}

impl Character {
    /// Convert back into the persisted document shape.
    pub fn to_doc(&self) -> SheetDoc {
        SheetDoc {
            version: SCHEMA_VERSION,
            id: self.id,
            name: self.name.clone(),
            kind: self.kind.to_string(),
            ratings: self
                .ratings
                .iter()
                .map(|(name, r)| (name.clone(), RatingDoc { value: r.value }))
                .collect(),
            tracks: TracksDoc {
                harm: track_doc(&self.tracks.harm),
                luck: track_doc(&self.tracks.luck),
                experience: track_doc(&self.tracks.experience),
            },
            items: self
                .items
                .iter()
                .map(|item| ItemDoc {
                    name: item.name.clone(),
                    category: item.category.to_string(),
                    icon: item.icon.clone(),
                    description: item.description.clone(),
                })
                .collect(),
        }
    }
}

fn track_doc(track: &Track) -> TrackDoc {
    TrackDoc {
        current: track.current,
        max: track.max,
    }
}
