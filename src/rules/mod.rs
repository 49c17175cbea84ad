//! Turn resolution.
//!
//! `TurnEngine` is the only code that produces new battle states. It owns
//! mana and health changes, turn alternation, round counting, the match
//! log and win detection, and consults the damage resolver for
//! quiz-gated attacks.

pub mod engine;

pub use engine::TurnEngine;
