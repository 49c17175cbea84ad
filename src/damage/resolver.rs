//! Damage resolution for quiz-gated attacks.
//!
//! `DamageResolver::compute_damage` is pure: the same inputs always yield
//! the same `DamageRoll`. Damage is not capped against the defender's
//! remaining health; clamping health at zero is the turn engine's job.

use serde::{Deserialize, Serialize};

use crate::core::{AnsweredQuiz, BattleError, Difficulty, Result};

use super::rules::MultiplierTable;

/// Products this close below an integer are treated as that integer, so
/// float noise in `base * multiplier` never drops a point of damage.
const FLOOR_EPSILON: f64 = 1e-9;

/// Qualitative label for a multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageTier {
    Weak,
    Normal,
    Strong,
    Powerful,
    Critical,
}

impl DamageTier {
    /// Classify a multiplier.
    ///
    /// ```
    /// use quiz_battle::damage::DamageTier;
    ///
    /// assert_eq!(DamageTier::from_multiplier(2.0), DamageTier::Critical);
    /// assert_eq!(DamageTier::from_multiplier(1.3), DamageTier::Strong);
    /// assert_eq!(DamageTier::from_multiplier(0.9), DamageTier::Normal);
    /// assert_eq!(DamageTier::from_multiplier(0.3), DamageTier::Weak);
    /// ```
    #[must_use]
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier >= 2.0 {
            DamageTier::Critical
        } else if multiplier >= 1.5 {
            DamageTier::Powerful
        } else if multiplier >= 1.2 {
            DamageTier::Strong
        } else if multiplier <= 0.6 {
            DamageTier::Weak
        } else {
            DamageTier::Normal
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DamageTier::Weak => "weak",
            DamageTier::Normal => "normal",
            DamageTier::Strong => "strong",
            DamageTier::Powerful => "powerful",
            DamageTier::Critical => "critical",
        }
    }
}

impl std::fmt::Display for DamageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of resolving one quiz-gated hit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageRoll {
    pub damage: u32,
    pub multiplier: f64,
    pub tier: DamageTier,
}

/// Maps quiz performance to damage using a `MultiplierTable`.
#[derive(Clone, Debug, Default)]
pub struct DamageResolver {
    table: MultiplierTable,
}

impl DamageResolver {
    /// Create a resolver over a custom table.
    #[must_use]
    pub fn new(table: MultiplierTable) -> Self {
        Self { table }
    }

    /// The table in use.
    #[must_use]
    pub fn table(&self) -> &MultiplierTable {
        &self.table
    }

    /// Compute damage for a quiz-gated attack.
    ///
    /// A wrong answer is always rated `Weak`, whatever the table's
    /// wrong-answer multiplier; only correct answers are tiered by
    /// multiplier.
    ///
    /// ## Errors
    ///
    /// - `InvalidExpectedTime` if `expected_time_secs` is not a positive
    ///   finite number.
    /// - `InvalidElapsedTime` if `time_taken_secs` is negative or not finite.
    ///
    /// ## Example
    ///
    /// ```
    /// use quiz_battle::core::Difficulty;
    /// use quiz_battle::damage::{DamageResolver, DamageTier};
    ///
    /// let resolver = DamageResolver::default();
    /// let roll = resolver.compute_damage(30, true, 2.0, Difficulty::Hard, 5.0).unwrap();
    ///
    /// assert_eq!(roll.damage, 60);
    /// assert_eq!(roll.tier, DamageTier::Critical);
    /// ```
    pub fn compute_damage(
        &self,
        base_damage: u32,
        was_correct: bool,
        time_taken_secs: f64,
        difficulty: Difficulty,
        expected_time_secs: f64,
    ) -> Result<DamageRoll> {
        if !(expected_time_secs.is_finite() && expected_time_secs > 0.0) {
            return Err(BattleError::InvalidExpectedTime(expected_time_secs));
        }
        if !(time_taken_secs.is_finite() && time_taken_secs >= 0.0) {
            return Err(BattleError::InvalidElapsedTime(time_taken_secs));
        }

        let (multiplier, tier) = if was_correct {
            let ratio = time_taken_secs / expected_time_secs;
            let multiplier = self.table.multiplier_for(difficulty, ratio);
            (multiplier, DamageTier::from_multiplier(multiplier))
        } else {
            (self.table.wrong_answer, DamageTier::Weak)
        };

        Ok(DamageRoll {
            damage: scale(base_damage, multiplier),
            multiplier,
            tier,
        })
    }

    /// Compute damage from an answered quiz.
    pub fn resolve(&self, base_damage: u32, quiz: &AnsweredQuiz) -> Result<DamageRoll> {
        self.compute_damage(
            base_damage,
            quiz.outcome.was_correct,
            quiz.outcome.time_taken_secs,
            quiz.difficulty,
            quiz.expected_time_secs,
        )
    }
}

/// `floor(base * multiplier)`, never negative.
fn scale(base: u32, multiplier: f64) -> u32 {
    let scaled = (f64::from(base) * multiplier + FLOOR_EPSILON).floor();
    // `as` saturates out-of-range floats
    scaled.max(0.0) as u32
}
