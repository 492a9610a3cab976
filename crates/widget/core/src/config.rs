/// Widget configuration constants and tunable defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudConfig;

impl HudConfig {
    // ===== compile-time constants used as type parameters =====
    /// Main inventory slots (hotbar plus backpack rows).
    pub const MAX_MAIN_SLOTS: usize = 36;
    /// Armor slots.
    pub const MAX_ARMOR_SLOTS: usize = 4;

    // ===== counting and presentation =====
    /// Reference bound for quantity tracking: one full stack.
    pub const FULL_STACK_COUNT: u32 = 64;
    /// Number of fill cells in the analog bar.
    pub const BAR_RESOLUTION: u32 = 18;

    // ===== runtime-tunable defaults =====
    /// Ticks between recomputations; one second at the usual 20 ticks/s.
    pub const DEFAULT_UPDATE_CADENCE: u32 = 20;
}
