//! Read-only inventory access.
//!
//! The engine never owns host inventory data. Scans go through the
//! [`InventoryView`] trait so any host storage can back a widget;
//! [`FixedInventory`] is the bundled implementation with the classic
//! player layout, used by the demo client and the tests.

use arrayvec::ArrayVec;

use crate::config::HudConfig;
use crate::item::ItemSnapshot;

/// Which region of the player inventory a slot belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotCategory {
    /// Hotbar and backpack slots, scanned first.
    #[default]
    Main,
    /// Worn equipment slots, scanned after main.
    Armor,
}

/// Location of a scanned item within the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotContext {
    pub category: SlotCategory,
    /// 0-based position, unique within the category.
    pub index: usize,
    /// True only for the active main slot.
    pub is_selected: bool,
}

/// Read-only view over a host inventory.
pub trait InventoryView {
    /// Number of slots in the category, occupied or not.
    fn slot_count(&self, category: SlotCategory) -> usize;

    /// Snapshot of the item in the slot, or `None` for an empty slot.
    fn slot(&self, category: SlotCategory, index: usize) -> Option<ItemSnapshot>;

    /// Index of the currently selected main slot.
    fn selected_index(&self) -> usize;
}

/// Fixed-capacity inventory with the classic player layout: 36 main slots
/// (selected slot among them) and 4 armor slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedInventory {
    main: ArrayVec<Option<ItemSnapshot>, { HudConfig::MAX_MAIN_SLOTS }>,
    armor: ArrayVec<Option<ItemSnapshot>, { HudConfig::MAX_ARMOR_SLOTS }>,
    selected: usize,
}

impl FixedInventory {
    /// Creates an empty inventory with slot 0 selected.
    pub fn new() -> Self {
        Self {
            main: ArrayVec::from([None; HudConfig::MAX_MAIN_SLOTS]),
            armor: ArrayVec::from([None; HudConfig::MAX_ARMOR_SLOTS]),
            selected: 0,
        }
    }

    /// Places an item in a main slot, replacing any occupant.
    ///
    /// Panics when `index` is outside the main slot range.
    pub fn set_main(&mut self, index: usize, item: ItemSnapshot) {
        self.main[index] = Some(item);
    }

    /// Places an item in an armor slot, replacing any occupant.
    ///
    /// Panics when `index` is outside the armor slot range.
    pub fn set_armor(&mut self, index: usize, item: ItemSnapshot) {
        self.armor[index] = Some(item);
    }

    /// Empties a main slot.
    ///
    /// Panics when `index` is outside the main slot range.
    pub fn clear_main(&mut self, index: usize) {
        self.main[index] = None;
    }

    /// Empties an armor slot.
    ///
    /// Panics when `index` is outside the armor slot range.
    pub fn clear_armor(&mut self, index: usize) {
        self.armor[index] = None;
    }

    /// Changes the selected main slot.
    ///
    /// Panics when `index` is outside the main slot range.
    pub fn select(&mut self, index: usize) {
        assert!(index < self.main.len(), "selected index out of range");
        self.selected = index;
    }
}

impl Default for FixedInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryView for FixedInventory {
    fn slot_count(&self, category: SlotCategory) -> usize {
        match category {
            SlotCategory::Main => self.main.len(),
            SlotCategory::Armor => self.armor.len(),
        }
    }

    fn slot(&self, category: SlotCategory, index: usize) -> Option<ItemSnapshot> {
        let slots: &[Option<ItemSnapshot>] = match category {
            SlotCategory::Main => &self.main,
            SlotCategory::Armor => &self.armor,
        };
        slots.get(index).copied().flatten()
    }

    fn selected_index(&self) -> usize {
        self.selected
    }
}
