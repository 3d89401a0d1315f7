//! Sheet data preparation.
//!
//! Annotates a character for rendering: formatted ratings, classified
//! inventory, and per-track cell state. Only hunters carry the full
//! annotation set; the other kinds render as plain description sheets.

use serde::{Deserialize, Serialize};

use mw_core::{Character, CharacterKind, Item, TrackKind};

use crate::cells::{TrackCell, track_cells};
use crate::classify::{GearSection, Inventory};
use crate::config::SheetConfig;
use crate::rating::RatingView;

/// One track annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDisplay {
    /// Which track this is.
    pub kind: TrackKind,
    /// Cells currently marked.
    pub current: i32,
    /// Total cells.
    pub max: i32,
    /// Rendered cells with marked/bar flags.
    pub cells: Vec<TrackCell>,
}

/// The hunter-only display annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunterView {
    /// Ratings with display strings, in name order.
    pub ratings: Vec<RatingView>,
    /// The gear-column sections (weapons, armor, gear).
    pub sections: Vec<GearSection>,
    /// Moves, displayed in their own column.
    pub moves: Vec<Item>,
    /// The three tracks with rendered cells.
    pub tracks: Vec<TrackDisplay>,
}

/// A character annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetView {
    /// Display name.
    pub name: String,
    /// Character kind.
    pub kind: CharacterKind,
    /// Present only for hunters.
    pub hunter: Option<HunterView>,
}

impl SheetView {
    /// Annotate a character for rendering.
    ///
    /// The character itself is left unchanged; the caller persists any
    /// later mutations separately and re-prepares the view.
    pub fn prepare(character: &Character, config: &SheetConfig) -> Self {
        let hunter = character.kind.is_hunter().then(|| {
            let inventory = Inventory::classify(&character.items, &config.icons);
            HunterView {
                ratings: character
                    .ratings
                    .iter()
                    .map(|(name, rating)| RatingView::new(name.clone(), rating.value))
                    .collect(),
                sections: inventory.sections(),
                moves: inventory.moves.clone(),
                tracks: TrackKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let track = *character.tracks.get(kind);
                        TrackDisplay {
                            kind,
                            current: track.current,
                            max: track.max,
                            cells: track_cells(track, config.layouts.bar(kind)),
                        }
                    })
                    .collect(),
            }
        });
        Self {
            name: character.name.clone(),
            kind: character.kind,
            hunter,
        }
    }
}
