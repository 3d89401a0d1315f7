//! Default icons per item category.
//!
//! The catalog owns the icon constants as configuration; there is no
//! external override mechanism. The host's placeholder art counts as
//! "no icon" so a freshly created item still picks up its category
//! default.

use serde::{Deserialize, Serialize};

use mw_core::ItemCategory;

/// Icon references for the sheet, one default per category plus the
/// placeholder treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCatalog {
    /// Default icon for weapons.
    pub weapon: String,
    /// Default icon for armor.
    pub armor: String,
    /// Default icon for gear.
    pub gear: String,
    /// Default icon for moves.
    pub moves: String,
    /// Icon the host assigns to entities with no art.
    pub placeholder: String,
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self {
            weapon: "icons/svg/combat.svg".to_string(),
            armor: "icons/svg/statue.svg".to_string(),
            gear: "icons/svg/chest.svg".to_string(),
            moves: "icons/svg/book.svg".to_string(),
            placeholder: "icons/svg/mystery-man.svg".to_string(),
        }
    }
}

impl IconCatalog {
    /// The default icon for a category.
    pub fn default_for(&self, category: ItemCategory) -> &str {
        match category {
            ItemCategory::Weapon => &self.weapon,
            ItemCategory::Armor => &self.armor,
            ItemCategory::Gear => &self.gear,
            ItemCategory::Move => &self.moves,
        }
    }

    /// Resolve an item's display icon.
    ///
    /// The item's own reference wins unless it is absent, empty, or the
    /// placeholder; those fall back to the category default. Resolving an
    /// already resolved icon returns it unchanged.
    pub fn backfill(&self, icon: Option<&str>, category: ItemCategory) -> String {
        match icon {
            Some(icon) if !icon.is_empty() && icon != self.placeholder => icon.to_string(),
            _ => self.default_for(category).to_string(),
        }
    }
}
