//! Named sheet actions mapped to track mutations.
//!
//! The icon controls on the sheet carry symbolic action names instead of
//! DOM state. Every action resolves to a `(track, delta)` pair under the
//! marked-cells-count-up convention: taking harm, spending luck, and
//! earning experience all mark a cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use mw_core::{Track, TrackKind, Tracks};

/// A named control on the sheet's icon row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetAction {
    /// Mark a harm cell.
    ApplyHarm,
    /// Un-mark a harm cell.
    HealHarm,
    /// Mark a luck cell: luck spent or lost.
    BadLuck,
    /// Un-mark a luck cell.
    GoodLuck,
    /// Un-mark an experience cell.
    Forget,
    /// Mark an experience cell.
    Learn,
}

impl SheetAction {
    /// All actions in icon-row order.
    pub const ALL: [SheetAction; 6] = [
        Self::ApplyHarm,
        Self::HealHarm,
        Self::BadLuck,
        Self::GoodLuck,
        Self::Forget,
        Self::Learn,
    ];

    /// Try to parse an action from its control name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ApplyHarm" => Some(Self::ApplyHarm),
            "HealHarm" => Some(Self::HealHarm),
            "BadLuck" => Some(Self::BadLuck),
            "GoodLuck" => Some(Self::GoodLuck),
            "Forget" => Some(Self::Forget),
            "Learn" => Some(Self::Learn),
            _ => None,
        }
    }

    /// The track this action addresses and the delta it applies.
    pub fn command(self) -> (TrackKind, i32) {
        match self {
            Self::ApplyHarm => (TrackKind::Harm, 1),
            Self::HealHarm => (TrackKind::Harm, -1),
            Self::BadLuck => (TrackKind::Luck, 1),
            Self::GoodLuck => (TrackKind::Luck, -1),
            Self::Forget => (TrackKind::Experience, -1),
            Self::Learn => (TrackKind::Experience, 1),
        }
    }

    /// Apply this action to a track set, returning the updated track.
    pub fn apply(self, tracks: &mut Tracks) -> Track {
        let (kind, delta) = self.command();
        tracks.modify(kind, delta)
    }
}

impl fmt::Display for SheetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApplyHarm => write!(f, "ApplyHarm"),
            Self::HealHarm => write!(f, "HealHarm"),
            Self::BadLuck => write!(f, "BadLuck"),
            Self::GoodLuck => write!(f, "GoodLuck"),
            Self::Forget => write!(f, "Forget"),
            Self::Learn => write!(f, "Learn"),
        }
    }
}
