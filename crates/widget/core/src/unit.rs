//! The display unit: tick-driven orchestration of both rule chains.

use crate::config::HudConfig;
use crate::error::BuildError;
use crate::item::{ItemId, ItemSnapshot};
use crate::rules::{HideRule, HideRules, InventoryRule, InventoryRules};
use crate::stats::{DisplayStats, TrackMode};
use crate::view::InventoryView;

/// Periodic decision engine for one HUD widget.
///
/// On every recomputation tick the unit aggregates the inventory into fresh
/// [`DisplayStats`], feeds the hide chain the observed transition, and
/// recomputes visibility as a level, not an edge: the same inputs always
/// produce the same decision regardless of the prior state. Between
/// recomputations the renderer reads the held result through the getters at
/// whatever frame rate it likes.
///
/// Construction goes through [`DisplayUnit::builder`]; each unit owns its
/// rule chain instances outright, so units never share hysteresis counters.
#[derive(Clone, Debug)]
pub struct DisplayUnit {
    nickname: String,
    cadence: u32,
    mode: TrackMode,
    placeholder: ItemSnapshot,
    rules: InventoryRules,
    hide_rules: HideRules,
    show_analog_bar: bool,
    show_counter: bool,
    stats: Option<DisplayStats>,
    prev_stats: Option<DisplayStats>,
    visible: bool,
}

impl DisplayUnit {
    /// Creates a builder with the stock configuration: quantity tracking,
    /// one-second cadence, empty rule chains, both readouts enabled.
    pub fn builder() -> DisplayUnitBuilder {
        DisplayUnitBuilder::default()
    }

    /// Advances the unit by one host tick.
    ///
    /// Ticks that miss the cadence are a no-op; the held stats and
    /// visibility stand. On a recomputation tick the previous stats move
    /// aside for hysteresis, a fresh aggregation runs, and visibility is
    /// recomputed from the hide chain. The very first recomputation treats
    /// the previous tracked value as zero.
    pub fn on_tick<V: InventoryView>(&mut self, view: &V, ticks: u64) {
        if ticks % u64::from(self.cadence) != 0 {
            return;
        }

        self.prev_stats = self.stats.take();
        let fresh = self.rules.aggregate(view, self.mode, self.placeholder);
        let previous_count = self.prev_stats.map_or(0, |prev| prev.tracked_count);

        self.hide_rules.update(fresh.tracked_count, previous_count);
        self.visible = !self.hide_rules.should_hide(fresh.tracked_count);
        self.stats = Some(fresh);
    }

    /// User-assigned label for this widget.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Ticks between recomputations, always at least one.
    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    pub fn mode(&self) -> TrackMode {
        self.mode
    }

    /// Whether the widget should currently render. Starts true and is
    /// recomputed on every recomputation tick.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Latest aggregation result; `None` until the first recomputation.
    pub fn stats(&self) -> Option<&DisplayStats> {
        self.stats.as_ref()
    }

    /// Whether the renderer should draw the analog bar.
    pub fn show_analog_bar(&self) -> bool {
        self.show_analog_bar
    }

    /// Whether the renderer should draw the numeric counter.
    pub fn show_counter(&self) -> bool {
        self.show_counter
    }
}

/// Builder for a [`DisplayUnit`].
///
/// The finished unit treats the configuration as an immutable snapshot;
/// there is no hot reload.
pub struct DisplayUnitBuilder {
    nickname: String,
    cadence: u32,
    mode: TrackMode,
    placeholder: ItemSnapshot,
    rules: Vec<InventoryRule>,
    hide_rules: Vec<HideRule>,
    show_analog_bar: bool,
    show_counter: bool,
}

impl Default for DisplayUnitBuilder {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            cadence: HudConfig::DEFAULT_UPDATE_CADENCE,
            mode: TrackMode::default(),
            placeholder: ItemSnapshot::new(ItemId(0), 1),
            rules: Vec::new(),
            hide_rules: Vec::new(),
            show_analog_bar: true,
            show_counter: true,
        }
    }
}

impl DisplayUnitBuilder {
    /// Sets the user-assigned label.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the ticks between recomputations.
    pub fn cadence(mut self, cadence: u32) -> Self {
        self.cadence = cadence;
        self
    }

    /// Sets which per-item value is tracked.
    pub fn mode(mut self, mode: TrackMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the item shown when no rule matches anything.
    pub fn placeholder(mut self, placeholder: ItemSnapshot) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Appends an item-selection rule to the tracking chain.
    pub fn track_rule(mut self, rule: InventoryRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a visibility rule to the hide chain.
    pub fn hide_rule(mut self, rule: HideRule) -> Self {
        self.hide_rules.push(rule);
        self
    }

    /// Enables or disables the analog bar readout.
    pub fn show_analog_bar(mut self, show: bool) -> Self {
        self.show_analog_bar = show;
        self
    }

    /// Enables or disables the numeric counter readout.
    pub fn show_counter(mut self, show: bool) -> Self {
        self.show_counter = show;
        self
    }

    /// Builds the unit, rejecting configurations the tick gate cannot run.
    pub fn build(self) -> Result<DisplayUnit, BuildError> {
        if self.cadence == 0 {
            return Err(BuildError::CadenceZero);
        }
        Ok(DisplayUnit {
            nickname: self.nickname,
            cadence: self.cadence,
            mode: self.mode,
            placeholder: self.placeholder,
            rules: InventoryRules::new(self.rules),
            hide_rules: HideRules::new(self.hide_rules),
            show_analog_bar: self.show_analog_bar,
            show_counter: self.show_counter,
            stats: None,
            prev_stats: None,
            visible: true,
        })
    }
}
