//! Track cells as rendered on the sheet.
//!
//! Each track draws as a row of discrete cells, numbered from 1. A cell
//! is marked when its number is within the track's current value; the
//! optional bar is a display-only severity boundary and carries no
//! mutation semantics.

use serde::{Deserialize, Serialize};

use mw_core::{Track, TrackKind};

/// Bar positions per track, counted from cell 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLayouts {
    /// Severity boundary on the harm track.
    pub harm_bar: Option<u32>,
    /// Severity boundary on the luck track.
    pub luck_bar: Option<u32>,
    /// Improvement boundary on the experience track.
    pub experience_bar: Option<u32>,
}

impl Default for TrackLayouts {
    fn default() -> Self {
        Self {
            harm_bar: Some(6),
            luck_bar: None,
            experience_bar: Some(3),
        }
    }
}

impl TrackLayouts {
    /// The bar cell for a track kind, if any.
    pub fn bar(&self, kind: TrackKind) -> Option<u32> {
        match kind {
            TrackKind::Harm => self.harm_bar,
            TrackKind::Luck => self.luck_bar,
            TrackKind::Experience => self.experience_bar,
        }
    }
}

/// One rendered track cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCell {
    /// Cell number, counted from 1.
    pub index: u32,
    /// Whether the cell is in the consumed/used state.
    pub marked: bool,
    /// Display-only severity boundary flag.
    pub bar: bool,
}

impl TrackCell {
    /// The delta a click on this cell produces: un-mark a marked cell,
    /// mark an unmarked one.
    pub fn click_delta(self) -> i32 {
        if self.marked { -1 } else { 1 }
    }
}

/// Render a track as its cell vector.
pub fn track_cells(track: Track, bar: Option<u32>) -> Vec<TrackCell> {
    (1..=track.max.max(0) as u32)
        .map(|index| TrackCell {
            index,
            marked: index as i32 <= track.current,
            bar: bar == Some(index),
        })
        .collect()
}
