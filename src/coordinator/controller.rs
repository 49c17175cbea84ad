//! Controllers: the decision-makers behind each seat of a driven match.
//!
//! A controller stands in for whatever sits on the presentation side of
//! the engine: a human at a UI, a scripted test, or a simulated player.
//! It picks the next attack and, for quiz-gated attacks, produces the
//! outcome of answering the question.

use std::collections::VecDeque;

use crate::core::{Attack, BattleRng, BattleState, CombatantId, QuizOutcome, QuizQuestion};

/// Decision source for one seat.
pub trait BattleController {
    /// Pick the next attack for `me`. `None` means there is nothing to play.
    fn choose_attack(&mut self, state: &BattleState, me: CombatantId) -> Option<Attack>;

    /// Answer a question presented for the attack just chosen.
    fn answer(&mut self, question: &QuizQuestion) -> QuizOutcome;
}

/// One scripted move: an attack name and, for quiz-gated attacks, the
/// outcome to report.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedMove {
    pub attack: String,
    pub outcome: Option<QuizOutcome>,
}

/// Plays a fixed sequence of moves, then runs out.
///
/// Attack names are resolved against the controlled combatant's catalog.
/// A quiz-gated move with no scripted outcome answers as if the deadline
/// passed.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    moves: VecDeque<ScriptedMove>,
    pending: Option<QuizOutcome>,
}

impl ScriptedController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain attack.
    #[must_use]
    pub fn then(mut self, attack: impl Into<String>) -> Self {
        self.moves.push_back(ScriptedMove {
            attack: attack.into(),
            outcome: None,
        });
        self
    }

    /// Queue a quiz-gated attack with its outcome.
    #[must_use]
    pub fn then_quiz(mut self, attack: impl Into<String>, outcome: QuizOutcome) -> Self {
        self.moves.push_back(ScriptedMove {
            attack: attack.into(),
            outcome: Some(outcome),
        });
        self
    }
}

impl BattleController for ScriptedController {
    fn choose_attack(&mut self, state: &BattleState, me: CombatantId) -> Option<Attack> {
        let next = self.moves.pop_front()?;
        self.pending = next.outcome;
        state.combatant(me)?.attack(&next.attack).cloned()
    }

    fn answer(&mut self, question: &QuizQuestion) -> QuizOutcome {
        self.pending
            .take()
            .unwrap_or_else(|| QuizOutcome::timed_out(question.expected_time_secs))
    }
}

/// Simulated player: picks uniformly among affordable attacks and answers
/// questions with a fixed accuracy.
///
/// Answer time is drawn as a fraction of the question's expected time, so
/// the same controller behaves sensibly across easy and hard questions.
#[derive(Clone, Debug)]
pub struct RandomController {
    rng: BattleRng,
    accuracy: f64,
    speed_range: (f64, f64),
}

impl RandomController {
    /// Create a controller with 70% accuracy answering within 0.3x to 1.5x
    /// of the expected time.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(BattleRng::new(seed))
    }

    /// Create a controller drawing from an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: BattleRng) -> Self {
        Self {
            rng,
            accuracy: 0.7,
            speed_range: (0.3, 1.5),
        }
    }

    /// Two controllers on independent streams derived from one seed.
    #[must_use]
    pub fn pair(seed: u64) -> (Self, Self) {
        let mut rng = BattleRng::new(seed);
        (Self::from_rng(rng.fork()), Self::from_rng(rng.fork()))
    }

    /// Probability of answering correctly.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Answer time range as fractions of the expected time.
    #[must_use]
    pub fn with_speed_range(mut self, fastest: f64, slowest: f64) -> Self {
        self.speed_range = (fastest, slowest);
        self
    }
}

impl BattleController for RandomController {
    fn choose_attack(&mut self, state: &BattleState, me: CombatantId) -> Option<Attack> {
        let options: Vec<&Attack> = state.combatant(me)?.affordable_attacks().collect();
        self.rng.choose(&options).map(|attack| (*attack).clone())
    }

    fn answer(&mut self, question: &QuizQuestion) -> QuizOutcome {
        let was_correct = self.rng.gen_bool(self.accuracy);
        let (fastest, slowest) = self.speed_range;
        let fraction = self.rng.gen_secs(fastest, slowest);
        QuizOutcome {
            was_correct,
            time_taken_secs: question.expected_time_secs * fraction,
        }
    }
}
