//! Visibility voting rules and the hide chain.
//!
//! A [`HideRules`] chain turns the freshly aggregated tracked value into a
//! single hide/show decision. Rules vote independently; the chain folds the
//! votes left to right, each rule carrying the operator that combines its
//! own vote into the running result.

/// How a rule's vote folds into the running decision.
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
pub enum Operator {
    #[default]
    And,
    Or,
}

/// Votes on where the tracked value sits against a fixed bound.
///
/// Stateless; the vote is a pure comparison, so it needs no history and has
/// no default-vote caveat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdRule {
    pub operator: Operator,
    pub threshold: u32,
    /// Vote to hide when the value sits below the threshold; when false, the
    /// rule hides above it instead.
    pub hide_when_below: bool,
    /// Count a value equal to the threshold as past it.
    pub inclusive: bool,
}

impl ThresholdRule {
    pub fn new(operator: Operator, threshold: u32, hide_when_below: bool, inclusive: bool) -> Self {
        Self {
            operator,
            threshold,
            hide_when_below,
            inclusive,
        }
    }

    fn vote(&self, tracked: u32) -> bool {
        match (self.hide_when_below, self.inclusive) {
            (true, true) => tracked <= self.threshold,
            (true, false) => tracked < self.threshold,
            (false, true) => tracked >= self.threshold,
            (false, false) => tracked > self.threshold,
        }
    }
}

/// Votes on how long the tracked value has held still.
///
/// Owns the hysteresis counter: every update where the value equals the
/// previous one increments it, any change resets it to zero. The vote flips
/// exactly on the update that reaches `required_ticks`, not before. Before
/// the first update the counter is zero, which reads as "changed recently"
/// unless `required_ticks` is itself zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnchangedRule {
    pub operator: Operator,
    /// Consecutive unchanged recomputations needed before the vote flips.
    pub required_ticks: u32,
    /// Vote to hide once the value has held still; when false, hide while it
    /// is still moving instead.
    pub hide_when_unchanged: bool,
    ticks_unchanged: u32,
}

impl UnchangedRule {
    pub fn new(operator: Operator, required_ticks: u32, hide_when_unchanged: bool) -> Self {
        Self {
            operator,
            required_ticks,
            hide_when_unchanged,
            ticks_unchanged: 0,
        }
    }

    /// Consecutive unchanged recomputations observed so far.
    pub fn ticks_unchanged(&self) -> u32 {
        self.ticks_unchanged
    }

    fn update(&mut self, current: u32, previous: u32) {
        if current == previous {
            self.ticks_unchanged = self.ticks_unchanged.saturating_add(1);
        } else {
            self.ticks_unchanged = 0;
        }
    }

    fn vote(&self) -> bool {
        if self.ticks_unchanged >= self.required_ticks {
            self.hide_when_unchanged
        } else {
            !self.hide_when_unchanged
        }
    }
}

/// One visibility vote in a hide chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HideRule {
    /// Comparison of the current tracked value against a bound.
    Threshold(ThresholdRule),
    /// Hysteresis on how long the tracked value has held still.
    Unchanged(UnchangedRule),
}

impl HideRule {
    pub fn operator(&self) -> Operator {
        match self {
            HideRule::Threshold(rule) => rule.operator,
            HideRule::Unchanged(rule) => rule.operator,
        }
    }

    /// Advances tick-local state; runs once per recomputation.
    pub fn update(&mut self, current: u32, previous: u32) {
        match self {
            HideRule::Threshold(_) => {}
            HideRule::Unchanged(rule) => rule.update(current, previous),
        }
    }

    /// This rule's hide vote for the current tracked value.
    pub fn vote(&self, tracked: u32) -> bool {
        match self {
            HideRule::Threshold(rule) => rule.vote(tracked),
            HideRule::Unchanged(rule) => rule.vote(),
        }
    }
}

/// Ordered visibility chain folded left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HideRules {
    rules: Vec<HideRule>,
}

impl HideRules {
    pub fn new(rules: Vec<HideRule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Advances every rule's tick-local state, in chain order.
    ///
    /// Must run once per recomputation, before [`Self::should_hide`], so the
    /// hysteresis counters reflect the just-observed transition.
    pub fn update(&mut self, current: u32, previous: u32) {
        for rule in &mut self.rules {
            rule.update(current, previous);
        }
    }

    /// Folds the chain into one hide decision.
    ///
    /// The first rule's vote seeds the fold and its operator is ignored;
    /// each later vote combines into the running result through its own
    /// operator. An empty chain never hides.
    pub fn should_hide(&self, tracked: u32) -> bool {
        let mut verdict: Option<bool> = None;
        for rule in &self.rules {
            let vote = rule.vote(tracked);
            verdict = Some(match verdict {
                None => vote,
                Some(running) => match rule.operator() {
                    Operator::And => running && vote,
                    Operator::Or => running || vote,
                },
            });
        }
        verdict.unwrap_or(false)
    }
}
