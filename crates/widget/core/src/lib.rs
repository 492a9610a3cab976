//! Periodic decision engine for an item-tracking HUD widget.
//!
//! `widget-core` decides what a widget shows and whether it shows at all.
//! An inventory rule chain selects and aggregates tracked items into
//! [`DisplayStats`]; a hide rule chain votes on visibility with temporal
//! hysteresis. Rendering, configuration persistence, item lookup, and the
//! tick scheduler stay with the host: everything here is a pure,
//! deterministic computation over an in-memory snapshot, re-evaluated on a
//! fixed cadence through [`DisplayUnit::on_tick`].
pub mod config;
pub mod error;
pub mod item;
pub mod rules;
pub mod stats;
pub mod unit;
pub mod view;
pub use config::HudConfig;
pub use error::BuildError;
pub use item::{ItemId, ItemSnapshot};
pub use rules::{
    HideRule, HideRules, InventoryRule, InventoryRules, Operator, ThresholdRule, UnchangedRule,
};
pub use stats::{DisplayStats, TrackMode, scale_to_resolution};
pub use unit::{DisplayUnit, DisplayUnitBuilder};
pub use view::{FixedInventory, InventoryView, SlotCategory, SlotContext};
