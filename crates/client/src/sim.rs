//! Scripted player inventory for the demo.
//!
//! Stands in for the game host: owns the item table and a small deterministic
//! script that forages, snacks, mines, and swaps hands so the widgets have
//! something to react to.

use widget_core::{FixedInventory, HudConfig, InventoryView, ItemId, ItemSnapshot, SlotCategory};

pub const EMPTY_HAND: ItemId = ItemId(0);
pub const BERRIES: ItemId = ItemId(101);
pub const PICKAXE: ItemId = ItemId(202);
pub const HELMET: ItemId = ItemId(303);

const STACK_LIMIT: u16 = HudConfig::FULL_STACK_COUNT as u16;

// Script pacing, in host ticks (20/s). Snacking runs on a faster beat than
// foraging, offset by half its interval, so the berry stock drains to zero
// and comes back instead of settling.
const FORAGE_INTERVAL: u64 = 40;
const SNACK_INTERVAL: u64 = 20;
const SNACK_OFFSET: u64 = 10;
const SWING_INTERVAL: u64 = 8;
const HELMET_WEAR_INTERVAL: u64 = 15;
const SWAP_INTERVAL: u64 = 200;
const MINING_TICKS: u64 = 240;
const RESTING_TICKS: u64 = 160;

/// Display name lookup, the host-side half the engine never sees.
pub fn item_name(id: ItemId) -> &'static str {
    match id {
        EMPTY_HAND => "empty hand",
        BERRIES => "sweet berries",
        PICKAXE => "iron pickaxe",
        HELMET => "iron helmet",
        _ => "unknown item",
    }
}

/// Single-character glyph for the hotbar strip.
pub fn item_glyph(id: ItemId) -> char {
    match id {
        BERRIES => 'b',
        PICKAXE => 'p',
        HELMET => 'h',
        _ => '?',
    }
}

/// Deterministic demo world: one player inventory plus the tick script that
/// mutates it.
pub struct Simulation {
    inventory: FixedInventory,
}

impl Simulation {
    pub fn new() -> Self {
        let mut inventory = FixedInventory::new();
        inventory.set_main(0, ItemSnapshot::with_durability(PICKAXE, 1, 0, 250));
        inventory.set_main(1, ItemSnapshot::new(BERRIES, 5));
        inventory.set_armor(0, ItemSnapshot::with_durability(HELMET, 1, 30, 165));
        Self { inventory }
    }

    pub fn view(&self) -> &FixedInventory {
        &self.inventory
    }

    /// One tick of scripted player behavior.
    pub fn advance(&mut self, ticks: u64) {
        if ticks % FORAGE_INTERVAL == 0 {
            self.add_item(BERRIES, 2);
        }
        if ticks % SNACK_INTERVAL == SNACK_OFFSET {
            self.remove_item(BERRIES, 2);
        }
        if self.is_mining(ticks) && ticks % SWING_INTERVAL == 0 {
            self.wear(SlotCategory::Main, 0, 1);
        }
        if ticks % HELMET_WEAR_INTERVAL == 0 {
            self.wear(SlotCategory::Armor, 0, 1);
        }
        if ticks % SWAP_INTERVAL == 0 {
            let next = if self.inventory.selected_index() == 0 { 1 } else { 0 };
            self.inventory.select(next);
        }
    }

    fn is_mining(&self, ticks: u64) -> bool {
        ticks % (MINING_TICKS + RESTING_TICKS) < MINING_TICKS
    }

    /// Adds items to the main inventory, topping up existing stacks before
    /// opening fresh ones. Returns whatever did not fit.
    pub fn add_item(&mut self, id: ItemId, mut count: u16) -> u16 {
        for index in 0..HudConfig::MAX_MAIN_SLOTS {
            if count == 0 {
                return 0;
            }
            if let Some(stack) = self.inventory.slot(SlotCategory::Main, index) {
                if stack.id == id && stack.quantity < STACK_LIMIT {
                    let moved = count.min(STACK_LIMIT - stack.quantity);
                    self.inventory
                        .set_main(index, ItemSnapshot::new(id, stack.quantity + moved));
                    count -= moved;
                }
            }
        }
        for index in 0..HudConfig::MAX_MAIN_SLOTS {
            if count == 0 {
                return 0;
            }
            if self.inventory.slot(SlotCategory::Main, index).is_none() {
                let moved = count.min(STACK_LIMIT);
                self.inventory.set_main(index, ItemSnapshot::new(id, moved));
                count -= moved;
            }
        }
        count
    }

    /// Removes items from the main inventory, draining lower slots first.
    /// Returns how many were actually removed.
    pub fn remove_item(&mut self, id: ItemId, mut count: u16) -> u16 {
        let mut removed = 0;
        for index in 0..HudConfig::MAX_MAIN_SLOTS {
            if count == 0 {
                break;
            }
            let Some(stack) = self.inventory.slot(SlotCategory::Main, index) else {
                continue;
            };
            if stack.id != id {
                continue;
            }
            let taken = count.min(stack.quantity);
            if taken == stack.quantity {
                self.inventory.clear_main(index);
            } else {
                self.inventory
                    .set_main(index, ItemSnapshot::new(id, stack.quantity - taken));
            }
            count -= taken;
            removed += taken;
        }
        removed
    }

    /// Wears a durability item down; a tool that reaches its budget comes
    /// back freshly repaired so the demo never runs out of movement.
    fn wear(&mut self, category: SlotCategory, index: usize, amount: u16) {
        let Some(item) = self.inventory.slot(category, index) else {
            return;
        };
        if item.max_damage == 0 {
            return;
        }
        let worn = if item.damage + amount >= item.max_damage {
            tracing::info!("{} repaired", item_name(item.id));
            ItemSnapshot::with_durability(item.id, item.quantity, 0, item.max_damage)
        } else {
            ItemSnapshot::with_durability(
                item.id,
                item.quantity,
                item.damage + amount,
                item.max_damage,
            )
        };
        match category {
            SlotCategory::Main => self.inventory.set_main(index, worn),
            SlotCategory::Armor => self.inventory.set_armor(index, worn),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tops_up_existing_stacks_before_opening_new_ones() {
        let mut sim = Simulation::new();

        // Slot 1 starts with 5 berries; 62 should fill it to 64 and spill.
        let leftover = sim.add_item(BERRIES, 62);
        assert_eq!(leftover, 0);
        assert_eq!(
            sim.view().slot(SlotCategory::Main, 1).unwrap().quantity,
            STACK_LIMIT
        );
        assert_eq!(sim.view().slot(SlotCategory::Main, 2).unwrap().quantity, 3);
    }

    #[test]
    fn remove_drains_lower_slots_first_and_clears_empties() {
        let mut sim = Simulation::new();
        sim.add_item(BERRIES, 63); // slot 1 full, slot 2 holds 4

        let removed = sim.remove_item(BERRIES, 65);
        assert_eq!(removed, 65);
        assert_eq!(sim.view().slot(SlotCategory::Main, 1), None);
        assert_eq!(sim.view().slot(SlotCategory::Main, 2).unwrap().quantity, 3);
    }

    #[test]
    fn wear_repairs_a_tool_that_reaches_its_budget() {
        let mut sim = Simulation::new();
        sim.wear(SlotCategory::Main, 0, 249);
        assert_eq!(
            sim.view()
                .slot(SlotCategory::Main, 0)
                .unwrap()
                .remaining_durability(),
            1
        );

        sim.wear(SlotCategory::Main, 0, 1);
        let fresh = sim.view().slot(SlotCategory::Main, 0).unwrap();
        assert_eq!(fresh.damage, 0);
        assert_eq!(fresh.remaining_durability(), 250);
    }

    #[test]
    fn script_swaps_the_selected_slot_on_schedule() {
        let mut sim = Simulation::new();
        assert_eq!(sim.view().selected_index(), 0);
        sim.advance(SWAP_INTERVAL);
        assert_eq!(sim.view().selected_index(), 1);
    }

    #[test]
    fn scripted_foraging_lets_the_berry_stock_empty_and_recover() {
        let mut sim = Simulation::new();

        for tick in 0..=130 {
            sim.advance(tick);
        }
        assert_eq!(berry_stock(&sim), 0);

        for tick in 131..=160 {
            sim.advance(tick);
        }
        assert_eq!(berry_stock(&sim), 2);
    }

    fn berry_stock(sim: &Simulation) -> u32 {
        (0..HudConfig::MAX_MAIN_SLOTS)
            .filter_map(|index| sim.view().slot(SlotCategory::Main, index))
            .filter(|stack| stack.id == BERRIES)
            .map(|stack| u32::from(stack.quantity))
            .sum()
    }
}
