//! Attack definitions.
//!
//! Attacks are immutable catalog entries. A combatant carries its own
//! ordered catalog; the engine never mutates an `Attack`.

use serde::{Deserialize, Serialize};

/// One entry in a combatant's attack catalog.
///
/// ## Example
///
/// ```
/// use quiz_battle::core::Attack;
///
/// let jab = Attack::new("Jab", 8, 0);
/// let riddle = Attack::new("Riddle Strike", 30, 25).quiz_gated();
///
/// assert!(!jab.requires_quiz);
/// assert!(riddle.requires_quiz);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attack {
    /// Display name, unique within a catalog.
    pub name: String,

    /// Base damage before any quiz multiplier.
    pub damage: u32,

    /// Mana deducted from the attacker when used.
    pub mana_cost: u32,

    /// Whether the attacker must answer a question to use this attack.
    pub requires_quiz: bool,
}

impl Attack {
    /// Create an attack that resolves without a quiz.
    pub fn new(name: impl Into<String>, damage: u32, mana_cost: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            mana_cost,
            requires_quiz: false,
        }
    }

    /// Mark this attack as quiz-gated.
    #[must_use]
    pub fn quiz_gated(mut self) -> Self {
        self.requires_quiz = true;
        self
    }

    /// Whether a combatant holding `mana` can pay for this attack.
    #[must_use]
    pub fn is_affordable(&self, mana: u32) -> bool {
        mana >= self.mana_cost
    }
}

impl std::fmt::Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_builder() {
        let attack = Attack::new("Fireball", 25, 20).quiz_gated();

        assert_eq!(attack.name, "Fireball");
        assert_eq!(attack.damage, 25);
        assert_eq!(attack.mana_cost, 20);
        assert!(attack.requires_quiz);
    }

    #[test]
    fn test_affordability() {
        let attack = Attack::new("Fireball", 25, 20);

        assert!(attack.is_affordable(20));
        assert!(attack.is_affordable(100));
        assert!(!attack.is_affordable(19));
        assert!(Attack::new("Punch", 5, 0).is_affordable(0));
    }
}
