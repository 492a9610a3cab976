//! Construction-time errors.

/// Errors surfaced while building a display unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildError {
    #[error("update cadence must be at least one tick")]
    CadenceZero,
}
