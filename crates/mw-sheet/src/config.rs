//! Sheet engine configuration.
//!
//! One immutable value built at startup and passed by reference; there
//! is no module-level mutable state.

use serde::{Deserialize, Serialize};

use crate::cells::TrackLayouts;
use crate::icons::IconCatalog;
use crate::roll::MoveResolver;

/// Initiative formula advertised to the host's combat tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    /// Dice formula.
    pub formula: String,
    /// Decimal places used to break ties.
    pub decimals: u32,
}

impl Default for Initiative {
    fn default() -> Self {
        Self {
            formula: "2d6".to_string(),
            decimals: 2,
        }
    }
}

/// Immutable configuration for sheet preparation and rolling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Default icons per item category.
    pub icons: IconCatalog,
    /// Bar positions per track.
    pub layouts: TrackLayouts,
    /// Tier thresholds for move rolls.
    pub resolver: MoveResolver,
    /// Initiative formula for the host.
    pub initiative: Initiative,
}
