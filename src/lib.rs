//! # quiz-battle
//!
//! A deterministic two-combatant battle engine for a trivia mini-game.
//!
//! Two combatants alternate attacks. Some attacks are gated behind a timed
//! quiz question: their damage scales with whether the answer was right,
//! how hard the question was, and how fast it was answered.
//!
//! ## Design Principles
//!
//! 1. **Immutable State**: `BattleState` is a value. Every resolved attack
//!    returns a fresh state; rejected attacks leave the input untouched.
//!
//! 2. **Self-contained Turns**: mana regeneration, win detection and round
//!    counting all happen inside the same transition, so any match can be
//!    replayed from its turn history.
//!
//! 3. **Data-driven Damage**: difficulty/speed multipliers are ordered rule
//!    tables, not nested conditionals.
//!
//! ## Modules
//!
//! - `core`: combatants, attacks, quiz types, state, config, errors, RNG
//! - `damage`: multiplier rule tables and the damage resolver
//! - `rules`: the turn engine
//! - `coordinator`: match lifecycle and seat controllers
//! - `content`: the question-supply seam and an in-memory question bank

pub mod core;
pub mod damage;
pub mod rules;
pub mod coordinator;
pub mod content;

// Re-export commonly used types
pub use crate::core::{
    AnsweredQuiz, Attack, BattleConfig, BattleError, BattleRng, BattleState, BattleStatus,
    Combatant, CombatantId, Difficulty, QuizOutcome, QuizQuestion, RegenPolicy, Result, Seat,
    TurnRecord,
};

pub use crate::damage::{DamageResolver, DamageRoll, DamageTier, MultiplierTable};

pub use crate::rules::TurnEngine;

pub use crate::coordinator::{
    BattleController, MatchCoordinator, MatchOutcome, RandomController, ScoreSink,
    ScriptedController,
};

pub use crate::content::{QuestionBank, QuizGate};
