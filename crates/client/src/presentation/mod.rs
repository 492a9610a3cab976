//! Terminal presentation layer.

pub mod event_loop;
pub mod terminal;
pub mod ui;
