//! Whole-match orchestration.
//!
//! - `MatchCoordinator`: starts matches, forwards attacks to the turn
//!   engine, finalizes outcomes and reports them to a `ScoreSink`
//! - `BattleController`: decision source for one seat when a match is
//!   driven end to end (`ScriptedController`, `RandomController`)

pub mod controller;
pub mod match_coordinator;

pub use controller::{BattleController, RandomController, ScriptedController, ScriptedMove};
pub use match_coordinator::{MatchCoordinator, MatchOutcome, ScoreSink, SinkError};
