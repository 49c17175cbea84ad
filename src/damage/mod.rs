//! Damage resolution for quiz-gated attacks.
//!
//! - `rules`: ordered per-difficulty multiplier tables
//! - `resolver`: the pure `compute_damage` function and damage tiers

pub mod rules;
pub mod resolver;

pub use rules::{Multiplier, MultiplierTable, RatioCondition, RatioRule};
pub use resolver::{DamageResolver, DamageRoll, DamageTier};
