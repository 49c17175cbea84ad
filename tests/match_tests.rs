//! Driven-match integration tests.
//!
//! These tests run whole matches through `MatchCoordinator::run_match`
//! with scripted and simulated controllers, and check that recorded
//! histories replay to the same state.

use quiz_battle::content::QuestionBank;
use quiz_battle::coordinator::{
    MatchCoordinator, MatchOutcome, RandomController, ScoreSink, ScriptedController, SinkError,
};
use quiz_battle::core::{
    AnsweredQuiz, Attack, BattleConfig, BattleError, Combatant, CombatantId, Difficulty, QuizOutcome,
    QuizQuestion, RegenPolicy,
};
use quiz_battle::damage::DamageTier;

const ADA: CombatantId = CombatantId::new(1);
const GRACE: CombatantId = CombatantId::new(2);

fn ada() -> Combatant {
    Combatant::new(ADA, "Ada")
        .with_attack(Attack::new("Jab", 10, 0))
        .with_attack(Attack::new("Analytical Strike", 25, 30).quiz_gated())
}

fn grace() -> Combatant {
    Combatant::new(GRACE, "Grace")
        .with_attack(Attack::new("Jab", 10, 0))
        .with_attack(Attack::new("Compiler Blast", 20, 20).quiz_gated())
}

fn bank() -> QuestionBank {
    QuestionBank::new()
        .with_question(QuizQuestion::new("Ada", "Engine Ada wrote for?", "Analytical", Difficulty::Hard, 8.0))
        .with_question(QuizQuestion::new("Ada", "Ada's surname?", "Lovelace", Difficulty::Easy, 4.0))
        .with_question(QuizQuestion::new("Grace", "Grace's language?", "COBOL", Difficulty::Medium, 6.0))
}

#[derive(Default)]
struct Scoreboard {
    outcomes: Vec<MatchOutcome>,
}

impl ScoreSink for Scoreboard {
    fn submit(&mut self, outcome: &MatchOutcome) -> Result<(), SinkError> {
        self.outcomes.push(*outcome);
        Ok(())
    }
}

/// A scripted match plays out exactly as written.
#[test]
fn test_scripted_match() {
    let coordinator = MatchCoordinator::default();
    let mut bank = bank();

    // Ada's questions rotate hard then easy: 2.0s is 2x on the hard one
    // and 1x on the easy one
    let mut seat_a = ScriptedController::new()
        .then_quiz("Analytical Strike", QuizOutcome::correct(2.0))
        .then_quiz("Analytical Strike", QuizOutcome::correct(2.0))
        .then("Jab")
        .then("Jab")
        .then("Jab");
    let mut seat_b = ScriptedController::new().then("Jab").then("Jab").then("Jab").then("Jab");

    let state = coordinator
        .run_match(ada(), grace(), &mut seat_a, &mut seat_b, &mut bank)
        .unwrap();

    // 50 + 25 + 10 + 10 + 10 = 105 ≥ 100
    assert!(state.is_finished());
    assert_eq!(state.winner_id(), Some(ADA));
    assert_eq!(state.combatant_b().health, 0);
    assert_eq!(state.combatant_a().health, 60);
    assert_eq!(state.history()[0].tier, Some(DamageTier::Critical));
    assert_eq!(state.history()[0].damage, 50);
    assert_eq!(state.history()[2].damage, 25);

    let outcome = coordinator.end_match(&state).unwrap();
    assert_eq!(outcome, MatchOutcome { winner_id: ADA, rounds: 5 });

    let mut scoreboard = Scoreboard::default();
    coordinator.report(&outcome, &mut scoreboard);
    assert_eq!(scoreboard.outcomes, vec![outcome]);
}

/// A controller that runs out of moves stalls the match.
#[test]
fn test_exhausted_script_stalls() {
    let coordinator = MatchCoordinator::default();
    let mut seat_a = ScriptedController::new().then("Jab");
    let mut seat_b = ScriptedController::new().then("Jab");

    let err = coordinator
        .run_match(ada(), grace(), &mut seat_a, &mut seat_b, &mut bank())
        .unwrap_err();
    assert_eq!(err, BattleError::Stalled { round: 2 });
}

/// Quiz-gated attacks need a question from the gate.
#[test]
fn test_missing_question_category() {
    let coordinator = MatchCoordinator::default();
    let mut seat_a = ScriptedController::new().then_quiz("Analytical Strike", QuizOutcome::correct(1.0));
    let mut seat_b = ScriptedController::new();

    let err = coordinator
        .run_match(ada(), grace(), &mut seat_a, &mut seat_b, &mut QuestionBank::new())
        .unwrap_err();
    assert_eq!(err, BattleError::NoQuestionAvailable("Ada".to_string()));
}

/// Rejected attacks do not count as turns; the same seat is asked again.
#[test]
fn test_rejected_attack_is_retried() {
    let coordinator = MatchCoordinator::new(BattleConfig::default().with_max_health(20));
    let expensive = Combatant::new(ADA, "Ada")
        .with_attack(Attack::new("Jab", 10, 0))
        .with_attack(Attack::new("Overdrive", 50, 101));

    let mut seat_a = ScriptedController::new().then("Overdrive").then("Jab").then("Jab");
    let mut seat_b = ScriptedController::new().then("Jab");

    let state = coordinator
        .run_match(expensive, grace(), &mut seat_a, &mut seat_b, &mut bank())
        .unwrap();

    assert_eq!(state.winner_id(), Some(ADA));
    assert_eq!(state.history().len(), 3);
    assert!(state.history().iter().all(|turn| turn.attack.name == "Jab"));
}

/// The attempt budget bounds a match that cannot finish.
#[test]
fn test_attempt_budget() {
    let coordinator = MatchCoordinator::new(BattleConfig::default().with_max_attempts(5));
    let pacifist = |id: CombatantId, name: &str| Combatant::new(id, name).with_attack(Attack::new("Wave", 0, 0));

    let (mut seat_a, mut seat_b) = RandomController::pair(1);
    let err = coordinator
        .run_match(pacifist(ADA, "Ada"), pacifist(GRACE, "Grace"), &mut seat_a, &mut seat_b, &mut bank())
        .unwrap_err();
    assert_eq!(err, BattleError::Stalled { round: 3 });
}

/// Simulated matches terminate, are reproducible, and replay exactly.
#[test]
fn test_random_match_replays() {
    let coordinator = MatchCoordinator::default();

    let run = |seed| {
        let (mut seat_a, mut seat_b) = RandomController::pair(seed);
        coordinator
            .run_match(ada(), grace(), &mut seat_a, &mut seat_b, &mut bank())
            .unwrap()
    };

    for seed in [1, 7, 42, 1234] {
        let state = run(seed);
        assert!(state.is_finished());
        assert_eq!(state.log().len(), state.history().len());

        // Same seed, same match
        assert_eq!(run(seed), state);

        let history: Vec<_> = state.history().iter().cloned().collect();
        let replayed = coordinator.replay(ada(), grace(), &history).unwrap();
        assert_eq!(replayed, state);
    }
}

/// Both-combatant regeneration applies to coordinator-submitted attacks.
#[test]
fn test_both_regenerate_policy() {
    let coordinator = MatchCoordinator::new(BattleConfig::default().with_regen_policy(RegenPolicy::Both));
    let state = coordinator.start_match(ada(), grace()).unwrap();

    let question = QuizQuestion::new("Ada", "Engine Ada wrote for?", "Analytical", Difficulty::Hard, 8.0);
    let quiz = AnsweredQuiz::grade(&question, "Difference", 1.0);
    let attack = ada().attack("Analytical Strike").cloned().unwrap();

    let state = coordinator.submit_attack(&state, ADA, &attack, Some(&quiz)).unwrap();
    assert_eq!(state.combatant_a().mana, 80);
    assert_eq!(state.combatant_b().health, 93);
}

/// Replay re-applies the attack as played, not a catalog lookup by name.
#[test]
fn test_replay_uses_recorded_attacks() {
    let coordinator = MatchCoordinator::default();
    let twins = Combatant::new(ADA, "Ada")
        .with_attack(Attack::new("Jab", 10, 0))
        .with_attack(Attack::new("Jab", 40, 0));
    let heavy_jab = twins.attacks[1].clone();

    let state = coordinator.start_match(twins.clone(), grace()).unwrap();
    let state = coordinator.submit_attack(&state, ADA, &heavy_jab, None).unwrap();
    assert_eq!(state.combatant_b().health, 60);

    // Not in Ada's catalog at all
    let state = coordinator.submit_attack(&state, GRACE, &Attack::new("Jab", 10, 0), None).unwrap();
    let state = coordinator.submit_attack(&state, ADA, &Attack::new("Finisher", 100, 0), None).unwrap();
    assert!(state.is_finished());

    let history: Vec<_> = state.history().iter().cloned().collect();
    let replayed = coordinator.replay(twins, grace(), &history).unwrap();
    assert_eq!(replayed, state);
}
