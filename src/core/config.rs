//! Battle configuration.
//!
//! `BattleConfig` collects every tunable of the engine: vital ceilings,
//! mana regeneration, the damage multiplier tables and the attempt budget
//! for driven matches. `BattleConfig::default()` reproduces the standard
//! 1v1 quiz battle.

use serde::{Deserialize, Serialize};

use super::combatant::DEFAULT_MAX_VITAL;
use crate::damage::MultiplierTable;

/// Who regains mana at the end of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegenPolicy {
    /// Only the combatant who just took the hit.
    #[default]
    Defender,
    /// Both combatants.
    Both,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Health each combatant starts a match with (and its ceiling).
    pub max_health: u32,

    /// Mana each combatant starts a match with (and its ceiling).
    pub max_mana: u32,

    /// Mana granted at the end of every resolved turn.
    pub mana_regen: u32,

    /// Which combatants receive `mana_regen`.
    pub regen_policy: RegenPolicy,

    /// Upper bound on attack submissions (accepted or rejected) in a
    /// driven match before it is declared stalled.
    pub max_attempts: u32,

    /// Difficulty/speed multiplier tables for quiz-gated attacks.
    pub multipliers: MultiplierTable,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_VITAL,
            max_mana: DEFAULT_MAX_VITAL,
            mana_regen: 10,
            regen_policy: RegenPolicy::Defender,
            max_attempts: 1_000,
            multipliers: MultiplierTable::default(),
        }
    }
}

impl BattleConfig {
    /// Set the health ceiling.
    #[must_use]
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Set the mana ceiling.
    #[must_use]
    pub fn with_max_mana(mut self, max_mana: u32) -> Self {
        self.max_mana = max_mana;
        self
    }

    /// Set per-turn mana regeneration.
    #[must_use]
    pub fn with_mana_regen(mut self, amount: u32) -> Self {
        self.mana_regen = amount;
        self
    }

    /// Set who regenerates mana.
    #[must_use]
    pub fn with_regen_policy(mut self, policy: RegenPolicy) -> Self {
        self.regen_policy = policy;
        self
    }

    /// Set the attempt budget for driven matches.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Replace the multiplier tables.
    #[must_use]
    pub fn with_multipliers(mut self, table: MultiplierTable) -> Self {
        self.multipliers = table;
        self
    }
}
