//! The turn engine: one attack in, one new battle state out.
//!
//! `TurnEngine::apply_attack` validates an attack against the current state
//! and, if it is legal, returns a fresh `BattleState` with the whole turn
//! applied: mana spent, damage dealt, log written, mana regenerated, and
//! either the winner declared or control handed to the defender. The input
//! state is only borrowed, so a rejected attack leaves the caller holding
//! exactly the state it had.

use crate::core::{
    AnsweredQuiz, Attack, BattleConfig, BattleError, BattleState, CombatantId, RegenPolicy,
    Result, TurnRecord,
};
use crate::damage::{DamageResolver, DamageTier};

/// Applies attacks to battle states.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    resolver: DamageResolver,
    mana_regen: u32,
    regen_policy: RegenPolicy,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(&BattleConfig::default())
    }
}

impl TurnEngine {
    /// Create an engine from a configuration.
    #[must_use]
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            resolver: DamageResolver::new(config.multipliers.clone()),
            mana_regen: config.mana_regen,
            regen_policy: config.regen_policy,
        }
    }

    /// The damage resolver used for quiz-gated attacks.
    #[must_use]
    pub fn resolver(&self) -> &DamageResolver {
        &self.resolver
    }

    /// Apply one attack.
    ///
    /// `quiz` is required for quiz-gated attacks and ignored otherwise.
    ///
    /// ## Errors
    ///
    /// Checked in this order, none of which touch `state`:
    /// - `MatchFinished`: the match already has a winner
    /// - `NotYourTurn`: `attacker` is not the active combatant
    /// - `InsufficientMana`: the attacker cannot pay `attack.mana_cost`
    /// - `InvalidAttack`: the attack is quiz-gated and `quiz` is `None`
    /// - `InvalidExpectedTime` / `InvalidElapsedTime`: bad quiz timing
    pub fn apply_attack(
        &self,
        state: &BattleState,
        attacker: CombatantId,
        attack: &Attack,
        quiz: Option<&AnsweredQuiz>,
    ) -> Result<BattleState> {
        self.resolve_turn(state, attacker, attack, quiz).map_err(|err| {
            tracing::trace!(%attacker, attack = %attack.name, error = %err, "attack rejected");
            err
        })
    }

    /// Apply an attack looked up by name in the attacker's own catalog.
    ///
    /// Fails with `UnknownAttack` if the attacker has no such attack, after
    /// the match-finished and turn checks.
    pub fn apply_named_attack(
        &self,
        state: &BattleState,
        attacker: CombatantId,
        attack_name: &str,
        quiz: Option<&AnsweredQuiz>,
    ) -> Result<BattleState> {
        Self::check_can_act(state, attacker)?;
        let attack = state
            .combatant(attacker)
            .and_then(|c| c.attack(attack_name))
            .ok_or_else(|| BattleError::UnknownAttack(attack_name.to_string()))?;
        self.apply_attack(state, attacker, attack, quiz)
    }

    /// Catalog attacks a combatant can currently use.
    ///
    /// Empty when the match is over, when it is not `id`'s turn, or when
    /// `id` is not part of the match.
    #[must_use]
    pub fn affordable_attacks<'s>(&self, state: &'s BattleState, id: CombatantId) -> Vec<&'s Attack> {
        if Self::check_can_act(state, id).is_err() {
            return Vec::new();
        }
        state
            .combatant(id)
            .map(|c| c.affordable_attacks().collect())
            .unwrap_or_default()
    }

    fn check_can_act(state: &BattleState, attacker: CombatantId) -> Result<()> {
        if state.is_finished() {
            return Err(BattleError::MatchFinished);
        }
        let active = state.active_combatant_id();
        if attacker != active {
            return Err(BattleError::NotYourTurn { attacker, active });
        }
        Ok(())
    }

    fn resolve_turn(
        &self,
        state: &BattleState,
        attacker: CombatantId,
        attack: &Attack,
        quiz: Option<&AnsweredQuiz>,
    ) -> Result<BattleState> {
        Self::check_can_act(state, attacker)?;

        let attacker_seat = state.seat_of(attacker).ok_or(BattleError::NotYourTurn {
            attacker,
            active: state.active_combatant_id(),
        })?;
        let defender_seat = attacker_seat.opponent();

        let available = state.seat(attacker_seat).mana;
        if !attack.is_affordable(available) {
            return Err(BattleError::InsufficientMana {
                required: attack.mana_cost,
                available,
            });
        }

        // Resolve damage before touching anything so failures stay no-ops
        let (damage, quiz, tier) = if attack.requires_quiz {
            let quiz = quiz.ok_or_else(|| {
                BattleError::InvalidAttack(format!("{} requires a quiz answer", attack.name))
            })?;
            let roll = self.resolver.resolve(attack.damage, quiz)?;
            (roll.damage, Some(*quiz), Some(roll.tier))
        } else {
            (attack.damage, None, None)
        };

        let mut next = state.clone();
        let round = next.round();

        next.seat_mut(attacker_seat).spend_mana(attack.mana_cost);
        next.seat_mut(defender_seat).take_damage(damage);

        let attacker_name = next.seat(attacker_seat).name.clone();
        let defender = next.seat(defender_seat);
        let defender_id = defender.id;
        let defeated = defender.is_defeated();
        let summary = summarize(
            &attacker_name,
            &attack.name,
            quiz.as_ref().zip(tier),
            damage,
            defeated.then_some(defender.name.as_str()),
        );

        tracing::debug!(
            round,
            %attacker,
            defender = %defender_id,
            attack = %attack.name,
            damage,
            tier = ?tier,
            "turn resolved"
        );

        next.record_turn(
            summary,
            TurnRecord {
                round,
                attacker,
                defender: defender_id,
                attack: attack.clone(),
                quiz,
                damage,
                tier,
            },
        );

        next.seat_mut(defender_seat).gain_mana(self.mana_regen);
        if self.regen_policy == RegenPolicy::Both {
            next.seat_mut(attacker_seat).gain_mana(self.mana_regen);
        }

        if defeated {
            next.finish(attacker);
            tracing::info!(winner = %attacker, round, "match finished");
        } else {
            next.pass_turn_to(defender_seat);
        }

        Ok(next)
    }
}

/// One log line for a resolved turn.
fn summarize(
    attacker: &str,
    attack: &str,
    quiz: Option<(&AnsweredQuiz, DamageTier)>,
    damage: u32,
    defeated: Option<&str>,
) -> String {
    let mut line = match quiz {
        Some((quiz, tier)) => {
            let verdict = if quiz.outcome.was_correct { "correct" } else { "wrong" };
            format!(
                "{attacker} used {attack} ({} question, {verdict} in {:.1}s, {tier} hit) for {damage} damage",
                quiz.difficulty, quiz.outcome.time_taken_secs
            )
        }
        None => format!("{attacker} used {attack} for {damage} damage"),
    };
    if let Some(defender) = defeated {
        line.push_str(&format!("; {defender} is defeated"));
    }
    line
}
