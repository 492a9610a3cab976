//! Demo application state: the simulated world plus its HUD widgets.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use widget_core::{
    DisplayUnit, HideRule, InventoryRule, ItemSnapshot, Operator, SlotCategory, ThresholdRule,
    TrackMode, UnchangedRule,
};

use crate::sim::{self, Simulation};

pub struct App {
    sim: Simulation,
    widgets: Vec<DisplayUnit>,
    ticks: u64,
    paused: bool,
    should_quit: bool,
}

impl App {
    /// Builds the demo: four widgets covering the tracking modes, the rule
    /// kinds, and both hide behaviors.
    pub fn new() -> Result<Self> {
        // Berry stock: counts every stack, disappears when the stock is gone.
        let berries = DisplayUnit::builder()
            .nickname("berries")
            .track_rule(InventoryRule::ItemIdMatch {
                id: sim::BERRIES,
                allow_multiple: true,
            })
            .hide_rule(HideRule::Threshold(ThresholdRule::new(
                Operator::And,
                0,
                true,
                true,
            )))
            .placeholder(ItemSnapshot::new(sim::BERRIES, 1))
            .build()?;

        // Pickaxe wear: fades out after five quiet readings.
        let pickaxe = DisplayUnit::builder()
            .nickname("pickaxe")
            .mode(TrackMode::Durability)
            .track_rule(InventoryRule::ItemIdMatch {
                id: sim::PICKAXE,
                allow_multiple: false,
            })
            .hide_rule(HideRule::Unchanged(UnchangedRule::new(
                Operator::And,
                5,
                true,
            )))
            .placeholder(ItemSnapshot::new(sim::PICKAXE, 1))
            .build()?;

        // Whatever the player holds; an empty hide chain never hides.
        let in_hand = DisplayUnit::builder()
            .nickname("in hand")
            .cadence(10)
            .track_rule(InventoryRule::SelectedSlotMatch)
            .placeholder(ItemSnapshot::new(sim::EMPTY_HAND, 1))
            .build()?;

        // Helmet alarm: stays out of the way until the helmet is nearly gone.
        let helmet = DisplayUnit::builder()
            .nickname("helmet")
            .mode(TrackMode::Durability)
            .track_rule(InventoryRule::SlotPositionMatch {
                category: SlotCategory::Armor,
                index: 0,
            })
            .hide_rule(HideRule::Threshold(ThresholdRule::new(
                Operator::And,
                40,
                false,
                false,
            )))
            .placeholder(ItemSnapshot::new(sim::HELMET, 1))
            .build()?;

        Ok(Self {
            sim: Simulation::new(),
            widgets: vec![berries, pickaxe, in_hand, helmet],
            ticks: 0,
            paused: false,
            should_quit: false,
        })
    }

    /// One host tick: script first, then every widget sees the same view.
    pub fn advance_tick(&mut self) {
        if self.paused {
            return;
        }
        self.sim.advance(self.ticks);
        for widget in &mut self.widgets {
            let was_visible = widget.is_visible();
            widget.on_tick(self.sim.view(), self.ticks);
            if widget.is_visible() != was_visible {
                tracing::debug!(
                    "widget '{}' {} at tick {}",
                    widget.nickname(),
                    if widget.is_visible() { "shown" } else { "hidden" },
                    self.ticks
                );
            }
        }
        self.ticks += 1;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                tracing::info!(
                    "{} at tick {}",
                    if self.paused { "paused" } else { "resumed" },
                    self.ticks
                );
            }
            _ => {}
        }
    }

    pub fn widgets(&self) -> &[DisplayUnit] {
        &self.widgets
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
