//! Sheet preparation and move resolution for hunter character sheets.
//!
//! Takes the character data model from `mw-core` and produces the
//! annotations a renderer consumes: classified inventory with icon
//! fallbacks, signed rating strings, per-track cell state, and 2d6 move
//! rolls classified into narrative tiers. Every operation is a pure or
//! near-pure function over state supplied per call; nothing here owns
//! long-lived state.

pub mod action;
pub mod cells;
pub mod classify;
pub mod config;
pub mod icons;
pub mod rating;
pub mod roll;
pub mod sheet;

pub use action::SheetAction;
pub use cells::{TrackCell, TrackLayouts, track_cells};
pub use classify::{GearSection, Inventory};
pub use config::{Initiative, SheetConfig};
pub use icons::IconCatalog;
pub use rating::{RatingView, format_rating};
pub use roll::{MoveResolver, MoveRoll, RollOutcome, Tier};
pub use sheet::{HunterView, SheetView, TrackDisplay};
