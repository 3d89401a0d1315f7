//! Bounded resource tracks (harm, luck, experience).
//!
//! A track is a clamped counter rendered as discrete cells. `current`
//! counts the cells already marked and grows toward `max`: taking harm,
//! spending luck, and earning experience all mark a cell, while healing,
//! regaining luck, and forgetting experience un-mark one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Default number of harm cells.
pub const HARM_MAX: i32 = 6;
/// Default number of luck cells.
pub const LUCK_MAX: i32 = 7;
/// Default number of experience cells.
pub const EXPERIENCE_MAX: i32 = 5;

/// A bounded counter with `0 <= current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Number of cells currently marked.
    pub current: i32,
    /// Total number of cells.
    pub max: i32,
}

impl Track {
    /// Create an unmarked track. A `max` below zero is treated as zero.
    pub fn new(max: i32) -> Self {
        Self {
            current: 0,
            max: max.max(0),
        }
    }

    /// Create a track with a starting value, clamped into bounds.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Adjust by a delta, clamping to `[0, max]`. Returns the new value.
    ///
    /// Requests that would cross a boundary are truncated to it rather
    /// than rejected; "already at the limit" is not an error.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(0, self.max);
        self.current
    }

    /// Returns true if no cell is marked.
    pub fn is_clear(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Which of the three sheet tracks is being addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    /// Harm taken.
    Harm,
    /// Luck spent.
    Luck,
    /// Experience earned toward the next improvement.
    Experience,
}

impl TrackKind {
    /// All track kinds in display order.
    pub const ALL: [TrackKind; 3] = [Self::Harm, Self::Luck, Self::Experience];

    /// Try to parse a track name as sent by the UI layer.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "harm" => Some(Self::Harm),
            "luck" => Some(Self::Luck),
            "experience" => Some(Self::Experience),
            _ => None,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Harm => write!(f, "harm"),
            Self::Luck => write!(f, "luck"),
            Self::Experience => write!(f, "experience"),
        }
    }
}

/// The three bounded tracks every hunter sheet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracks {
    /// Harm already taken.
    pub harm: Track,
    /// Luck already spent.
    pub luck: Track,
    /// Experience already earned.
    pub experience: Track,
}

impl Default for Tracks {
    fn default() -> Self {
        Self::new(HARM_MAX, LUCK_MAX, EXPERIENCE_MAX)
    }
}

impl Tracks {
    /// Create unmarked tracks with the given maxima.
    pub fn new(harm_max: i32, luck_max: i32, experience_max: i32) -> Self {
        Self {
            harm: Track::new(harm_max),
            luck: Track::new(luck_max),
            experience: Track::new(experience_max),
        }
    }

    /// Borrow a track by kind.
    pub fn get(&self, kind: TrackKind) -> &Track {
        match kind {
            TrackKind::Harm => &self.harm,
            TrackKind::Luck => &self.luck,
            TrackKind::Experience => &self.experience,
        }
    }

    /// Mutably borrow a track by kind.
    pub fn get_mut(&mut self, kind: TrackKind) -> &mut Track {
        match kind {
            TrackKind::Harm => &mut self.harm,
            TrackKind::Luck => &mut self.luck,
            TrackKind::Experience => &mut self.experience,
        }
    }

    /// Apply a clamped delta to a track, returning the updated track for
    /// the caller to persist and re-render.
    pub fn modify(&mut self, kind: TrackKind, delta: i32) -> Track {
        let track = self.get_mut(kind);
        track.adjust(delta);
        *track
    }

    /// Apply a delta to a track addressed by its UI name.
    ///
    /// An unknown name leaves every track untouched and reports
    /// [`CoreError::UnknownTrack`]; callers may log and ignore it.
    pub fn modify_named(&mut self, name: &str, delta: i32) -> CoreResult<Track> {
        match TrackKind::parse(name) {
            Some(kind) => Ok(self.modify(kind, delta)),
            None => {
                log::debug!("ignoring delta {delta} for unknown track {name:?}");
                Err(CoreError::UnknownTrack(name.to_string()))
            }
        }
    }
}
