//! Widget-facing output values.
//!
//! A recomputation produces one [`DisplayStats`]; the renderer reads it (and
//! the derived bar/label values) at whatever frame rate it likes.

use crate::config::HudConfig;
use crate::item::ItemSnapshot;

/// Which per-item value the widget tracks.
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
pub enum TrackMode {
    /// Sum of stack sizes across matched items.
    #[default]
    Quantity,
    /// Sum of remaining wear budgets across matched items.
    Durability,
    /// Reserved for timed effects; counts like [`TrackMode::Quantity`] until
    /// per-item clocks exist.
    Duration,
}

impl TrackMode {
    /// How much one matched item adds to the tracked value.
    pub fn contribution(&self, item: &ItemSnapshot) -> u32 {
        match self {
            TrackMode::Quantity | TrackMode::Duration => u32::from(item.quantity),
            TrackMode::Durability => u32::from(item.remaining_durability()),
        }
    }

    /// Reference bound the tracked value fills toward.
    pub fn maximum_for(&self, representative: &ItemSnapshot) -> u32 {
        match self {
            TrackMode::Quantity | TrackMode::Duration => HudConfig::FULL_STACK_COUNT,
            TrackMode::Durability => u32::from(representative.max_damage),
        }
    }
}

/// One recomputation's output: what to show and how much of it.
///
/// Immutable once constructed; the orchestrator keeps the previous instance
/// for one tick to feed hysteresis, then discards it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayStats {
    /// Display-only copy of the item the widget shows.
    pub representative: ItemSnapshot,
    /// Aggregated value across every matched item.
    pub tracked_count: u32,
    /// Reference bound for the analog bar.
    pub maximum_count: u32,
}

impl DisplayStats {
    pub fn new(representative: ItemSnapshot, tracked_count: u32, maximum_count: u32) -> Self {
        Self {
            representative,
            tracked_count,
            maximum_count,
        }
    }

    /// Filled bar cells in `0..=HudConfig::BAR_RESOLUTION`.
    pub fn bar_length(&self) -> u32 {
        scale_to_resolution(i64::from(self.tracked_count), i64::from(self.maximum_count))
    }

    /// Decimal text for the numeric counter.
    pub fn counter_label(&self) -> String {
        self.tracked_count.to_string()
    }
}

/// Scales `value / maximum` into `0..=HudConfig::BAR_RESOLUTION` bar cells.
///
/// Linear with rounding half up, clamped to the empty bar below zero and to
/// the full bar at or past the maximum. Integer arithmetic only, so equal
/// inputs always produce equal bars. A maximum of zero yields an empty bar.
pub fn scale_to_resolution(value: i64, maximum: i64) -> u32 {
    if value <= 0 || maximum <= 0 {
        return 0;
    }
    if value >= maximum {
        return HudConfig::BAR_RESOLUTION;
    }
    let resolution = i64::from(HudConfig::BAR_RESOLUTION);
    ((value * resolution * 2 + maximum) / (2 * maximum)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    #[test]
    fn scale_clamps_and_rounds() {
        assert_eq!(scale_to_resolution(0, 10), 0);
        assert_eq!(scale_to_resolution(5, 10), 9);
        assert_eq!(scale_to_resolution(10, 10), 18);
        assert_eq!(scale_to_resolution(15, 10), 18);
        assert_eq!(scale_to_resolution(-1, 10), 0);
    }

    #[test]
    fn scale_rounds_half_up() {
        // 1/36 of the bar is exactly half a cell
        assert_eq!(scale_to_resolution(1, 36), 1);
        // just under half a cell stays empty
        assert_eq!(scale_to_resolution(1, 37), 0);
    }

    #[test]
    fn scale_with_zero_maximum_is_empty() {
        assert_eq!(scale_to_resolution(5, 0), 0);
    }

    #[test]
    fn quantity_contribution_reads_stack_size() {
        let stack = ItemSnapshot::new(ItemId(1), 17);
        assert_eq!(TrackMode::Quantity.contribution(&stack), 17);
        assert_eq!(
            TrackMode::Quantity.maximum_for(&stack),
            HudConfig::FULL_STACK_COUNT
        );
    }

    #[test]
    fn durability_contribution_reads_remaining_wear() {
        let tool = ItemSnapshot::with_durability(ItemId(2), 1, 30, 100);
        assert_eq!(TrackMode::Durability.contribution(&tool), 70);
        assert_eq!(TrackMode::Durability.maximum_for(&tool), 100);
    }

    #[test]
    fn duration_counts_like_quantity() {
        let stack = ItemSnapshot::new(ItemId(3), 9);
        assert_eq!(
            TrackMode::Duration.contribution(&stack),
            TrackMode::Quantity.contribution(&stack)
        );
        assert_eq!(
            TrackMode::Duration.maximum_for(&stack),
            HudConfig::FULL_STACK_COUNT
        );
    }

    #[test]
    fn bar_length_and_label_derive_from_counts() {
        let stats = DisplayStats::new(ItemSnapshot::new(ItemId(1), 32), 32, 64);
        assert_eq!(stats.bar_length(), 9);
        assert_eq!(stats.counter_label(), "32");
    }
}
