//! Rule chains: item selection and visibility voting.

pub mod hide;
pub mod inventory;

pub use hide::{HideRule, HideRules, Operator, ThresholdRule, UnchangedRule};
pub use inventory::{InventoryRule, InventoryRules};
