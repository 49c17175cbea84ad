//! Core value types: combatants, attacks, quiz questions, battle state,
//! configuration, errors and the seeded RNG used by simulated players.

pub mod attack;
pub mod combatant;
pub mod quiz;
pub mod state;
pub mod config;
pub mod error;
pub mod rng;

pub use attack::Attack;
pub use combatant::{Combatant, CombatantId, DEFAULT_MAX_VITAL};
pub use quiz::{AnsweredQuiz, Difficulty, QuizOutcome, QuizQuestion};
pub use state::{BattleState, BattleStatus, Seat, TurnRecord};
pub use config::{BattleConfig, RegenPolicy};
pub use error::{BattleError, Result};
pub use rng::BattleRng;
