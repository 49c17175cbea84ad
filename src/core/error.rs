//! Engine error type.
//!
//! Every condition here is a local validation failure. None of them leave a
//! `BattleState` partially modified: transitions either produce a complete
//! new state or return one of these.

use thiserror::Error;

use super::combatant::CombatantId;

/// Errors raised by the damage resolver, turn engine and match coordinator.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BattleError {
    /// The match already has a winner.
    #[error("match is already finished")]
    MatchFinished,

    /// The attacker is not the active combatant.
    #[error("not {attacker}'s turn ({active} is active)")]
    NotYourTurn {
        attacker: CombatantId,
        active: CombatantId,
    },

    /// The attacker cannot pay the attack's mana cost.
    #[error("insufficient mana: need {required}, have {available}")]
    InsufficientMana { required: u32, available: u32 },

    /// The attack cannot be executed as submitted.
    #[error("invalid attack: {0}")]
    InvalidAttack(String),

    /// The attacker's catalog has no attack with this name.
    #[error("unknown attack: {0}")]
    UnknownAttack(String),

    /// A question's expected answer time must be positive and finite.
    #[error("expected time must be positive, got {0}")]
    InvalidExpectedTime(f64),

    /// Elapsed answer time must be non-negative and finite.
    #[error("elapsed time must be non-negative, got {0}")]
    InvalidElapsedTime(f64),

    /// `end_match` was called on a match that is still ongoing.
    #[error("match is not finished")]
    MatchNotFinished,

    /// Both seats were given the same combatant id.
    #[error("both combatants share id {0}")]
    DuplicateCombatant(CombatantId),

    /// A driven match could not make progress.
    #[error("match stalled in round {round}")]
    Stalled { round: u32 },

    /// The question supplier had nothing for a quiz-gated attack.
    #[error("no question available for category '{0}'")]
    NoQuestionAvailable(String),
}

impl BattleError {
    /// Whether this error rejects a single attack (the same player may
    /// simply try again) rather than the match as a whole.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BattleError::NotYourTurn { .. }
                | BattleError::InsufficientMana { .. }
                | BattleError::InvalidAttack(_)
                | BattleError::UnknownAttack(_)
                | BattleError::InvalidExpectedTime(_)
                | BattleError::InvalidElapsedTime(_)
        )
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, BattleError>;
