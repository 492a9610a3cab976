//! Item selection rules and the aggregation scan.
//!
//! An [`InventoryRules`] chain decides which items count toward the tracked
//! value and which single item represents them. The rule set is closed:
//! hosts configure from the [`InventoryRule`] variants and every evaluation
//! site matches exhaustively.

use crate::item::{ItemId, ItemSnapshot};
use crate::stats::{DisplayStats, TrackMode};
use crate::view::{InventoryView, SlotCategory, SlotContext};

/// One item-selection predicate in a tracking chain.
///
/// Rules are pure functions of an item snapshot plus its slot context; the
/// multiple-match property is fixed per rule value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryRule {
    /// Matches every stack of one item identity.
    ItemIdMatch { id: ItemId, allow_multiple: bool },
    /// Matches whatever occupies the selected main slot.
    SelectedSlotMatch,
    /// Matches one fixed slot.
    SlotPositionMatch { category: SlotCategory, index: usize },
}

impl InventoryRule {
    /// Whether the item in this slot belongs to the tracked set.
    pub fn is_match(&self, item: &ItemSnapshot, context: SlotContext) -> bool {
        match self {
            InventoryRule::ItemIdMatch { id, .. } => item.id == *id,
            InventoryRule::SelectedSlotMatch => context.is_selected,
            InventoryRule::SlotPositionMatch { category, index } => {
                context.category == *category && context.index == *index
            }
        }
    }

    /// Whether the scan keeps collecting after this rule's first match.
    ///
    /// Slot-bound rules can only ever match one slot, so they never allow
    /// multiple matches.
    pub fn allow_multiple_matches(&self) -> bool {
        match self {
            InventoryRule::ItemIdMatch { allow_multiple, .. } => *allow_multiple,
            InventoryRule::SelectedSlotMatch | InventoryRule::SlotPositionMatch { .. } => false,
        }
    }
}

/// Ordered rule chain that owns the aggregation scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryRules {
    rules: Vec<InventoryRule>,
}

impl InventoryRules {
    pub fn new(rules: Vec<InventoryRule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Scans the view once and folds every match into fresh [`DisplayStats`].
    ///
    /// Each rule visits main slots in increasing index order, then armor
    /// slots. The representative locks to the first match of the first rule
    /// that matches anything and is never re-selected within the pass. A
    /// rule that does not allow multiple matches abandons both category
    /// scans on its first match; the chain then continues with the next
    /// rule. With no match at all, the representative falls back to the
    /// placeholder and the tracked value stays zero.
    pub fn aggregate<V: InventoryView>(
        &self,
        view: &V,
        mode: TrackMode,
        placeholder: ItemSnapshot,
    ) -> DisplayStats {
        let mut representative: Option<ItemSnapshot> = None;
        let mut tracked_count: u32 = 0;

        for rule in &self.rules {
            'scan: for category in [SlotCategory::Main, SlotCategory::Armor] {
                for index in 0..view.slot_count(category) {
                    let Some(item) = view.slot(category, index) else {
                        continue;
                    };
                    // Upstream occupancy violation; an empty stack counts for nothing.
                    if item.quantity == 0 {
                        continue;
                    }
                    let context = SlotContext {
                        category,
                        index,
                        is_selected: category == SlotCategory::Main
                            && index == view.selected_index(),
                    };
                    if !rule.is_match(&item, context) {
                        continue;
                    }
                    representative.get_or_insert(item);
                    tracked_count = tracked_count.saturating_add(mode.contribution(&item));
                    if !rule.allow_multiple_matches() {
                        break 'scan;
                    }
                }
            }
        }

        let representative = representative.unwrap_or(placeholder);
        let maximum_count = mode.maximum_for(&representative);
        DisplayStats::new(representative, tracked_count, maximum_count)
    }
}
