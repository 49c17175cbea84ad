//! Combatant identification and per-combatant vitals.
//!
//! ## CombatantId
//!
//! Opaque identifier. The two seats of a match must use distinct ids.
//!
//! ## Combatant
//!
//! Health, mana and a fixed attack catalog. Vitals are clamped to
//! `[0, max]` by every mutator, so no sequence of turns can push them out
//! of range.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attack::Attack;

/// Default ceiling for both health and mana.
pub const DEFAULT_MAX_VITAL: u32 = 100;

/// Combatant identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl CombatantId {
    /// Create a new combatant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Combatant {}", self.0)
    }
}

/// One side of a battle.
///
/// ## Example
///
/// ```
/// use quiz_battle::core::{Attack, Combatant, CombatantId};
///
/// let knight = Combatant::new(CombatantId::new(1), "Knight")
///     .with_attack(Attack::new("Slash", 10, 0))
///     .with_attack(Attack::new("Trivia Smite", 30, 25).quiz_gated());
///
/// assert_eq!(knight.health, 100);
/// assert_eq!(knight.mana, 100);
/// assert!(knight.attack("Slash").is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub max_health: u32,
    pub health: u32,
    pub max_mana: u32,
    pub mana: u32,

    /// Ordered attack catalog.
    /// SmallVec keeps the typical four-attack loadout inline.
    pub attacks: SmallVec<[Attack; 4]>,
}

impl Combatant {
    /// Create a combatant at full health and mana with an empty catalog.
    pub fn new(id: CombatantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            max_health: DEFAULT_MAX_VITAL,
            health: DEFAULT_MAX_VITAL,
            max_mana: DEFAULT_MAX_VITAL,
            mana: DEFAULT_MAX_VITAL,
            attacks: SmallVec::new(),
        }
    }

    /// Append an attack to the catalog.
    #[must_use]
    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    /// Look up an attack in the catalog by name.
    #[must_use]
    pub fn attack(&self, name: &str) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.name == name)
    }

    /// Attacks the combatant can currently pay for, in catalog order.
    pub fn affordable_attacks(&self) -> impl Iterator<Item = &Attack> {
        self.attacks.iter().filter(move |a| a.is_affordable(self.mana))
    }

    /// Whether health has reached zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Reset health and mana to their maxima.
    pub fn restore(&mut self) {
        self.health = self.max_health;
        self.mana = self.max_mana;
    }

    /// Deduct mana, saturating at zero.
    pub(crate) fn spend_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_sub(amount);
    }

    /// Add mana, capped at `max_mana`.
    pub(crate) fn gain_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
    }

    /// Apply damage, saturating at zero health.
    pub(crate) fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}
