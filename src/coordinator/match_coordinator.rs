//! Match lifecycle: start, drive, finalize, report.

use serde::{Deserialize, Serialize};

use super::controller::BattleController;
use crate::content::QuizGate;
use crate::core::{
    AnsweredQuiz, Attack, BattleConfig, BattleError, BattleState, Combatant, CombatantId, Result,
    Seat, TurnRecord,
};
use crate::rules::TurnEngine;

/// Final result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner_id: CombatantId,
    /// Round in which the match ended.
    pub rounds: u32,
}

/// Error type scoring collaborators may return.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Consumer of finished match outcomes (scores, achievements, ...).
pub trait ScoreSink {
    fn submit(&mut self, outcome: &MatchOutcome) -> std::result::Result<(), SinkError>;
}

/// Owns a match from start to finish.
///
/// The coordinator is the only component that knows about whole matches;
/// individual turns are delegated to the `TurnEngine`.
#[derive(Clone, Debug, Default)]
pub struct MatchCoordinator {
    config: BattleConfig,
    engine: TurnEngine,
}

impl MatchCoordinator {
    /// Create a coordinator for a configuration.
    #[must_use]
    pub fn new(config: BattleConfig) -> Self {
        let engine = TurnEngine::new(&config);
        Self { config, engine }
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Open a match. Both combatants are reset to the configured full
    /// health and mana; combatant A acts first in round 1.
    ///
    /// Fails with `DuplicateCombatant` if both share an id.
    pub fn start_match(&self, mut a: Combatant, mut b: Combatant) -> Result<BattleState> {
        if a.id == b.id {
            return Err(BattleError::DuplicateCombatant(a.id));
        }
        for combatant in [&mut a, &mut b] {
            combatant.max_health = self.config.max_health;
            combatant.max_mana = self.config.max_mana;
            combatant.restore();
        }

        tracing::info!(a = %a.id, b = %b.id, "match started");
        Ok(BattleState::new(a, b))
    }

    /// Submit one attack on behalf of a player. A rejection leaves the same
    /// player to act; nothing is retried here.
    pub fn submit_attack(
        &self,
        state: &BattleState,
        attacker: CombatantId,
        attack: &Attack,
        quiz: Option<&AnsweredQuiz>,
    ) -> Result<BattleState> {
        self.engine.apply_attack(state, attacker, attack, quiz)
    }

    /// Summarize a finished match.
    ///
    /// Fails with `MatchNotFinished` while the match is ongoing.
    pub fn end_match(&self, state: &BattleState) -> Result<MatchOutcome> {
        match state.winner_id() {
            Some(winner_id) if state.is_finished() => Ok(MatchOutcome {
                winner_id,
                rounds: state.round(),
            }),
            _ => Err(BattleError::MatchNotFinished),
        }
    }

    /// Hand an outcome to a scoring collaborator.
    ///
    /// Fire-and-forget: a sink failure is logged and otherwise ignored, the
    /// outcome itself is already final.
    pub fn report(&self, outcome: &MatchOutcome, sink: &mut dyn ScoreSink) {
        if let Err(err) = sink.submit(outcome) {
            tracing::warn!(winner = %outcome.winner_id, error = %err, "failed to report match outcome");
        }
    }

    /// Drive a whole match between two controllers.
    ///
    /// Each iteration asks the active seat's controller for an attack. For
    /// quiz-gated attacks a question is drawn from `gate` using the
    /// attacker's name as category, and the same controller answers it.
    /// Rejected attacks are not recorded; the controller is simply asked
    /// again.
    ///
    /// ## Errors
    ///
    /// - `DuplicateCombatant` from `start_match`
    /// - `Stalled` when a controller has no move, or when `max_attempts`
    ///   submissions did not finish the match
    /// - `NoQuestionAvailable` when `gate` has nothing for a quiz-gated attack
    pub fn run_match(
        &self,
        a: Combatant,
        b: Combatant,
        seat_a: &mut dyn BattleController,
        seat_b: &mut dyn BattleController,
        gate: &mut dyn QuizGate,
    ) -> Result<BattleState> {
        let mut state = self.start_match(a, b)?;
        let mut attempts = 0u32;

        while !state.is_finished() {
            if attempts >= self.config.max_attempts {
                return Err(BattleError::Stalled { round: state.round() });
            }
            attempts += 1;

            let active = state.active_combatant_id();
            let controller: &mut dyn BattleController = match state.seat_of(active) {
                Some(Seat::A) => &mut *seat_a,
                _ => &mut *seat_b,
            };

            let attack = controller
                .choose_attack(&state, active)
                .ok_or(BattleError::Stalled { round: state.round() })?;

            let quiz = if attack.requires_quiz {
                let category = state.active_combatant().name.clone();
                let question = gate
                    .next_question(&category)
                    .ok_or(BattleError::NoQuestionAvailable(category))?;
                let outcome = controller.answer(&question);
                Some(AnsweredQuiz::new(&question, outcome))
            } else {
                None
            };

            match self.engine.apply_attack(&state, active, &attack, quiz.as_ref()) {
                Ok(next) => state = next,
                Err(err) if err.is_rejection() => {
                    tracing::debug!(%active, attack = %attack.name, error = %err, "retrying rejected attack");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(state)
    }

    /// Rebuild a match from recorded turns.
    ///
    /// Every recorded turn is re-applied through the engine, so a history
    /// taken from a finished state replays to an equal state.
    pub fn replay(&self, a: Combatant, b: Combatant, turns: &[TurnRecord]) -> Result<BattleState> {
        let mut state = self.start_match(a, b)?;
        for turn in turns {
            state = self
                .engine
                .apply_attack(&state, turn.attacker, &turn.attack, turn.quiz.as_ref())?;
        }
        Ok(state)
    }
}
