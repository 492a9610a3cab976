//! Item snapshot types.
//!
//! The engine never touches live host items; every scan works on defensive
//! copies taken through the inventory view.

/// Reference to an item definition stored outside the core (lookup via the
/// host's item table).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// Point-in-time copy of one inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSnapshot {
    pub id: ItemId,
    /// Stack size; a non-empty slot always holds at least one.
    pub quantity: u16,
    /// Accumulated wear, counting up from zero.
    pub damage: u16,
    /// Wear budget; zero for items without durability.
    pub max_damage: u16,
}

impl ItemSnapshot {
    /// Creates a snapshot of a stackable item without durability.
    pub fn new(id: ItemId, quantity: u16) -> Self {
        Self {
            id,
            quantity,
            damage: 0,
            max_damage: 0,
        }
    }

    /// Creates a snapshot of an item with a wear budget.
    pub fn with_durability(id: ItemId, quantity: u16, damage: u16, max_damage: u16) -> Self {
        Self {
            id,
            quantity,
            damage,
            max_damage,
        }
    }

    /// Remaining wear budget, saturating at zero when damage exceeds it.
    pub fn remaining_durability(&self) -> u16 {
        self.max_damage.saturating_sub(self.damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_durability_subtracts_wear() {
        let pickaxe = ItemSnapshot::with_durability(ItemId(7), 1, 40, 100);
        assert_eq!(pickaxe.remaining_durability(), 60);
    }

    #[test]
    fn remaining_durability_saturates_past_the_budget() {
        let broken = ItemSnapshot::with_durability(ItemId(7), 1, 130, 100);
        assert_eq!(broken.remaining_durability(), 0);
    }

    #[test]
    fn plain_stacks_have_no_wear_budget() {
        let stack = ItemSnapshot::new(ItemId(3), 42);
        assert_eq!(stack.max_damage, 0);
        assert_eq!(stack.remaining_durability(), 0);
    }
}
