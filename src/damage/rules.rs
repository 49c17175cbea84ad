//! Per-difficulty multiplier rule tables.
//!
//! Each difficulty owns an ordered list of `RatioRule`s. The speed ratio
//! (`time_taken / expected_time`) is tested against each rule's condition
//! top to bottom and the first match supplies the multiplier. Adding a
//! difficulty tier means adding one table entry.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Multiplier applied to any wrong answer.
pub const WRONG_ANSWER_MULTIPLIER: f64 = 0.3;

/// Multiplier used when no rule in a table matches.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Predicate on the speed ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RatioCondition {
    /// `ratio < bound`
    Below(f64),
    /// `ratio <= bound`
    AtMost(f64),
    /// Always matches.
    Any,
}

impl RatioCondition {
    #[must_use]
    pub fn matches(self, ratio: f64) -> bool {
        match self {
            RatioCondition::Below(bound) => ratio < bound,
            RatioCondition::AtMost(bound) => ratio <= bound,
            RatioCondition::Any => true,
        }
    }
}

/// How a matched rule turns the ratio into a multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Multiplier {
    /// A constant multiplier.
    Fixed(f64),
    /// `max(floor, 1.0 - (ratio - 1.0) * slope)`: linear falloff for slow
    /// answers, bounded below.
    Decay { floor: f64, slope: f64 },
}

impl Multiplier {
    #[must_use]
    pub fn evaluate(self, ratio: f64) -> f64 {
        match self {
            Multiplier::Fixed(value) => value,
            Multiplier::Decay { floor, slope } => floor.max(1.0 - (ratio - 1.0) * slope),
        }
    }
}

/// One row of a difficulty table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatioRule {
    pub condition: RatioCondition,
    pub multiplier: Multiplier,
}

impl RatioRule {
    #[must_use]
    pub const fn new(condition: RatioCondition, multiplier: Multiplier) -> Self {
        Self {
            condition,
            multiplier,
        }
    }
}

/// Rule tables for every difficulty plus the wrong-answer multiplier.
///
/// ## Example
///
/// ```
/// use quiz_battle::core::Difficulty;
/// use quiz_battle::damage::MultiplierTable;
///
/// let table = MultiplierTable::default();
///
/// // Fast hard answer
/// assert_eq!(table.multiplier_for(Difficulty::Hard, 0.4), 2.0);
/// // Slow easy answer decays but never below 0.5
/// assert_eq!(table.multiplier_for(Difficulty::Easy, 5.0), 0.5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTable {
    /// Multiplier for any wrong answer, regardless of difficulty or timing.
    pub wrong_answer: f64,

    rules: FxHashMap<Difficulty, Vec<RatioRule>>,
}

impl MultiplierTable {
    /// A table with no difficulty rules. Every correct answer scores the
    /// neutral multiplier until rules are added.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            wrong_answer: WRONG_ANSWER_MULTIPLIER,
            rules: FxHashMap::default(),
        }
    }

    /// Replace the rules for one difficulty.
    #[must_use]
    pub fn with_rules(mut self, difficulty: Difficulty, rules: Vec<RatioRule>) -> Self {
        self.rules.insert(difficulty, rules);
        self
    }

    /// Override the wrong-answer multiplier. Wrong answers stay `Weak`
    /// regardless.
    #[must_use]
    pub fn with_wrong_answer(mut self, multiplier: f64) -> Self {
        self.wrong_answer = multiplier;
        self
    }

    /// The ordered rules for a difficulty, if any.
    #[must_use]
    pub fn rules(&self, difficulty: Difficulty) -> &[RatioRule] {
        self.rules.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Evaluate the first matching rule for a correct answer.
    #[must_use]
    pub fn multiplier_for(&self, difficulty: Difficulty, ratio: f64) -> f64 {
        self.rules(difficulty)
            .iter()
            .find(|rule| rule.condition.matches(ratio))
            .map_or(NEUTRAL_MULTIPLIER, |rule| rule.multiplier.evaluate(ratio))
    }
}

impl Default for MultiplierTable {
    fn default() -> Self {
        use Multiplier::{Decay, Fixed};
        use RatioCondition::{AtMost, Any, Below};

        Self::empty()
            .with_rules(
                Difficulty::Easy,
                vec![
                    RatioRule::new(Below(0.7), Fixed(1.0)),
                    RatioRule::new(AtMost(1.0), Fixed(0.9)),
                    RatioRule::new(Any, Decay { floor: 0.5, slope: 0.5 }),
                ],
            )
            .with_rules(
                Difficulty::Medium,
                vec![
                    RatioRule::new(Below(0.6), Fixed(1.3)),
                    RatioRule::new(AtMost(1.0), Fixed(1.0)),
                    RatioRule::new(Any, Decay { floor: 0.6, slope: 0.4 }),
                ],
            )
            .with_rules(
                Difficulty::Hard,
                vec![
                    RatioRule::new(Below(0.5), Fixed(2.0)),
                    RatioRule::new(Below(0.8), Fixed(1.5)),
                    RatioRule::new(AtMost(1.0), Fixed(1.2)),
                    RatioRule::new(Any, Decay { floor: 0.7, slope: 0.3 }),
                ],
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_boundaries() {
        assert!(RatioCondition::Below(0.7).matches(0.69));
        assert!(!RatioCondition::Below(0.7).matches(0.7));
        assert!(RatioCondition::AtMost(1.0).matches(1.0));
        assert!(!RatioCondition::AtMost(1.0).matches(1.01));
        assert!(RatioCondition::Any.matches(f64::MAX));
    }

    #[test]
    fn test_decay() {
        let decay = Multiplier::Decay { floor: 0.6, slope: 0.4 };
        assert!((decay.evaluate(1.5) - 0.8).abs() < 1e-12);
        assert_eq!(decay.evaluate(10.0), 0.6);
    }

    #[test]
    fn test_easy_table() {
        let table = MultiplierTable::default();
        assert_eq!(table.multiplier_for(Difficulty::Easy, 0.0), 1.0);
        assert_eq!(table.multiplier_for(Difficulty::Easy, 0.7), 0.9);
        assert_eq!(table.multiplier_for(Difficulty::Easy, 1.0), 0.9);
        assert!((table.multiplier_for(Difficulty::Easy, 1.4) - 0.8).abs() < 1e-12);
        assert_eq!(table.multiplier_for(Difficulty::Easy, 3.0), 0.5);
    }

    #[test]
    fn test_medium_table() {
        let table = MultiplierTable::default();
        assert_eq!(table.multiplier_for(Difficulty::Medium, 0.59), 1.3);
        assert_eq!(table.multiplier_for(Difficulty::Medium, 0.6), 1.0);
        assert_eq!(table.multiplier_for(Difficulty::Medium, 1.0), 1.0);
        assert_eq!(table.multiplier_for(Difficulty::Medium, 4.0), 0.6);
    }

    #[test]
    fn test_hard_table() {
        let table = MultiplierTable::default();
        assert_eq!(table.multiplier_for(Difficulty::Hard, 0.49), 2.0);
        assert_eq!(table.multiplier_for(Difficulty::Hard, 0.5), 1.5);
        assert_eq!(table.multiplier_for(Difficulty::Hard, 0.8), 1.2);
        assert_eq!(table.multiplier_for(Difficulty::Hard, 1.0), 1.2);
        assert!((table.multiplier_for(Difficulty::Hard, 2.0) - 0.7).abs() < 1e-12);
        assert_eq!(table.multiplier_for(Difficulty::Hard, 9.0), 0.7);
    }

    #[test]
    fn test_missing_rules_are_neutral() {
        let table = MultiplierTable::empty();
        assert!(table.rules(Difficulty::Hard).is_empty());
        assert_eq!(table.multiplier_for(Difficulty::Hard, 0.1), NEUTRAL_MULTIPLIER);
    }

    #[test]
    fn test_serialization() {
        let table = MultiplierTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let back: MultiplierTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
