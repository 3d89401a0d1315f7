//! Inventory items and their closed category set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display grouping for an item; also selects its default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Guns, blades, and anything else that deals harm.
    Weapon,
    /// Protective equipment.
    Armor,
    /// Everything carried that is neither weapon nor armor.
    Gear,
    /// A hunter move: a learned capability rather than a physical object.
    Move,
}

impl ItemCategory {
    /// All categories in display order.
    pub const ALL: [ItemCategory; 4] = [Self::Weapon, Self::Armor, Self::Gear, Self::Move];

    /// Try to parse a category from its schema string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weapon" => Some(Self::Weapon),
            "armor" => Some(Self::Armor),
            "gear" => Some(Self::Gear),
            "move" => Some(Self::Move),
            _ => None,
        }
    }

    /// Map a sheet section label back to a category.
    ///
    /// Section headers carry their localization key ("Weapons", "Moves"),
    /// while a newly created item needs a concrete category.
    pub fn from_section_label(label: &str) -> Option<Self> {
        match label {
            "Weapons" => Some(Self::Weapon),
            "Armor" => Some(Self::Armor),
            "Gear" => Some(Self::Gear),
            "Moves" => Some(Self::Move),
            _ => None,
        }
    }

    /// The section label this category is displayed under.
    pub fn section_label(self) -> &'static str {
        match self {
            Self::Weapon => "Weapons",
            Self::Armor => "Armor",
            Self::Gear => "Gear",
            Self::Move => "Moves",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Gear => write!(f, "gear"),
            Self::Move => write!(f, "move"),
        }
    }
}

/// An item owned by a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Display grouping.
    pub category: ItemCategory,
    /// Icon reference; `None` until the display layer supplies a default.
    pub icon: Option<String>,
    /// Free-form description shown in the item summary.
    pub description: String,
}

impl Item {
    /// Create an item with no icon and an empty description.
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            category,
            icon: None,
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_categories() {
        assert_eq!(ItemCategory::parse("weapon"), Some(ItemCategory::Weapon));
        assert_eq!(ItemCategory::parse("armor"), Some(ItemCategory::Armor));
        assert_eq!(ItemCategory::parse("gear"), Some(ItemCategory::Gear));
        assert_eq!(ItemCategory::parse("move"), Some(ItemCategory::Move));
    }

    #[test]
    fn parse_unknown_category() {
        assert_eq!(ItemCategory::parse("vehicle"), None);
        assert_eq!(ItemCategory::parse("Weapon"), None);
        assert_eq!(ItemCategory::parse(""), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for category in ItemCategory::ALL {
            assert_eq!(ItemCategory::parse(&category.to_string()), Some(category));
        }
    }

    #[test]
    fn section_labels_round_trip() {
        for category in ItemCategory::ALL {
            assert_eq!(
                ItemCategory::from_section_label(category.section_label()),
                Some(category)
            );
        }
        assert_eq!(ItemCategory::from_section_label("Vehicles"), None);
    }

    #[test]
    fn new_item_has_no_icon() {
        let item = Item::new("Shotgun", ItemCategory::Weapon);
        assert_eq!(item.name, "Shotgun");
        assert_eq!(item.category, ItemCategory::Weapon);
        assert!(item.icon.is_none());
        assert!(item.description.is_empty());
    }
}
