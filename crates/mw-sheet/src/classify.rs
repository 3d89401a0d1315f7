//! Item classification for sheet display.

use serde::{Deserialize, Serialize};

use mw_core::{Item, ItemCategory};

use crate::icons::IconCatalog;

/// Items partitioned by category for display.
///
/// Buckets keep the relative order items appear in on the character, not
/// alphabetical order — a known limitation of the sheet, kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Weapons in input order.
    pub weapons: Vec<Item>,
    /// Armor in input order.
    pub armor: Vec<Item>,
    /// Gear in input order.
    pub gear: Vec<Item>,
    /// Moves in input order.
    pub moves: Vec<Item>,
}

/// One labeled section of the gear column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearSection {
    /// Localization key for the section header, owned by the UI layer.
    pub label: String,
    /// Items under this header.
    pub items: Vec<Item>,
}

impl Inventory {
    /// Partition items into category buckets.
    ///
    /// The returned items are copies with missing icons backfilled from
    /// the catalog; the caller's items are left untouched until it
    /// explicitly commits the change. Deterministic and idempotent —
    /// reclassifying classified output yields the same buckets.
    pub fn classify(items: &[Item], icons: &IconCatalog) -> Self {
        let mut inventory = Self::default();
        for item in items {
            let mut item = item.clone();
            item.icon = Some(icons.backfill(item.icon.as_deref(), item.category));
            match item.category {
                ItemCategory::Weapon => inventory.weapons.push(item),
                ItemCategory::Armor => inventory.armor.push(item),
                ItemCategory::Gear => inventory.gear.push(item),
                ItemCategory::Move => inventory.moves.push(item),
            }
        }
        inventory
    }

    /// Borrow a bucket by category.
    pub fn bucket(&self, category: ItemCategory) -> &[Item] {
        match category {
            ItemCategory::Weapon => &self.weapons,
            ItemCategory::Armor => &self.armor,
            ItemCategory::Gear => &self.gear,
            ItemCategory::Move => &self.moves,
        }
    }

    /// All classified items in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        ItemCategory::ALL
            .iter()
            .flat_map(|&category| self.bucket(category).iter())
    }

    /// The gear-column sections in display order.
    ///
    /// Moves live in their own column and are not a gear section.
    pub fn sections(&self) -> Vec<GearSection> {
        [ItemCategory::Weapon, ItemCategory::Armor, ItemCategory::Gear]
            .into_iter()
            .map(|category| GearSection {
                label: category.section_label().to_string(),
                items: self.bucket(category).to_vec(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("Machete", ItemCategory::Weapon),
            Item::new("Flashlight", ItemCategory::Gear),
            Item::new("Shotgun", ItemCategory::Weapon),
            Item::new("Flak jacket", ItemCategory::Armor),
            Item::new("Kick Some Ass", ItemCategory::Move),
        ]
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        let inventory = Inventory::classify(&[], &IconCatalog::default());
        for category in ItemCategory::ALL {
            assert!(inventory.bucket(category).is_empty());
        }
    }

    #[test]
    fn one_item_per_category_yields_singleton_buckets() {
        let items: Vec<Item> = ItemCategory::ALL
            .iter()
            .map(|&category| Item::new(category.to_string(), category))
            .collect();
        let inventory = Inventory::classify(&items, &IconCatalog::default());
        for category in ItemCategory::ALL {
            assert_eq!(inventory.bucket(category).len(), 1);
        }
    }

    #[test]
    fn buckets_preserve_input_order() {
        let inventory = Inventory::classify(&sample_items(), &IconCatalog::default());
        let weapon_names: Vec<&str> = inventory.weapons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(weapon_names, ["Machete", "Shotgun"]);
    }

    #[test]
    fn missing_icons_are_backfilled_on_copies() {
        let icons = IconCatalog::default();
        let items = vec![Item::new("Duct tape", ItemCategory::Gear)];
        let inventory = Inventory::classify(&items, &icons);
        assert_eq!(
            inventory.gear[0].icon.as_deref(),
            Some("icons/svg/chest.svg")
        );
        // The caller's item is untouched.
        assert!(items[0].icon.is_none());
    }

    #[test]
    fn custom_icons_survive_classification() {
        let mut item = Item::new("Shotgun", ItemCategory::Weapon);
        item.icon = Some("art/shotgun.png".to_string());
        let inventory = Inventory::classify(&[item], &IconCatalog::default());
        assert_eq!(inventory.weapons[0].icon.as_deref(), Some("art/shotgun.png"));
    }

    #[test]
    fn classification_is_idempotent() {
        let icons = IconCatalog::default();
        let first = Inventory::classify(&sample_items(), &icons);
        let flattened: Vec<Item> = first.iter().cloned().collect();
        let second = Inventory::classify(&flattened, &icons);
        assert_eq!(first, second);
    }

    #[test]
    fn sections_cover_the_gear_column() {
        let inventory = Inventory::classify(&sample_items(), &IconCatalog::default());
        let sections = inventory.sections();
        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Weapons", "Armor", "Gear"]);
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(inventory.moves.len(), 1);
    }
}
