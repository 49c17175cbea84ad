//! Quiz questions and answer outcomes.
//!
//! Questions come from an external content collaborator (see
//! `content::QuizGate`). The engine never stores or validates question
//! content; it only reads the difficulty and expected answer time of the
//! question that gated an attack, paired with the caller-measured outcome.

use serde::{Deserialize, Serialize};

/// Question difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase label used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A timed knowledge check presented before a quiz-gated attack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Topic the question belongs to (usually the character's theme).
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,

    /// Time a reasonably quick player needs, in seconds. Scoring input only.
    pub expected_time_secs: f64,
}

impl QuizQuestion {
    /// Create a question. Options start out as just the correct answer.
    pub fn new(
        category: impl Into<String>,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        difficulty: Difficulty,
        expected_time_secs: f64,
    ) -> Self {
        let correct_answer = correct_answer.into();
        Self {
            category: category.into(),
            prompt: prompt.into(),
            options: vec![correct_answer.clone()],
            correct_answer,
            difficulty,
            expected_time_secs,
        }
    }

    /// Add a distractor option.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Check a submitted answer. Comparison ignores case and surrounding
    /// whitespace.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(self.correct_answer.trim())
    }
}

/// What happened when the player faced a question.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub was_correct: bool,
    pub time_taken_secs: f64,
}

impl QuizOutcome {
    /// A correct answer after `time_taken_secs`.
    #[must_use]
    pub const fn correct(time_taken_secs: f64) -> Self {
        Self {
            was_correct: true,
            time_taken_secs,
        }
    }

    /// A wrong answer after `time_taken_secs`.
    #[must_use]
    pub const fn wrong(time_taken_secs: f64) -> Self {
        Self {
            was_correct: false,
            time_taken_secs,
        }
    }

    /// The outcome to submit when input collection was cut off at a
    /// caller-enforced deadline.
    #[must_use]
    pub const fn timed_out(deadline_secs: f64) -> Self {
        Self::wrong(deadline_secs)
    }
}

/// A question's scoring inputs paired with the player's outcome.
///
/// This is what the turn engine consumes for a quiz-gated attack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuiz {
    pub difficulty: Difficulty,
    pub expected_time_secs: f64,
    pub outcome: QuizOutcome,
}

impl AnsweredQuiz {
    /// Pair a question with its outcome.
    #[must_use]
    pub fn new(question: &QuizQuestion, outcome: QuizOutcome) -> Self {
        Self {
            difficulty: question.difficulty,
            expected_time_secs: question.expected_time_secs,
            outcome,
        }
    }

    /// Grade a submitted answer against the question.
    #[must_use]
    pub fn grade(question: &QuizQuestion, answer: &str, time_taken_secs: f64) -> Self {
        let outcome = QuizOutcome {
            was_correct: question.is_correct(answer),
            time_taken_secs,
        };
        Self::new(question, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital() -> QuizQuestion {
        QuizQuestion::new("geography", "Capital of France?", "Paris", Difficulty::Easy, 5.0)
            .with_option("Lyon")
            .with_option("Nice")
    }

    #[test]
    fn test_question_options() {
        let q = capital();
        assert_eq!(q.options, vec!["Paris", "Lyon", "Nice"]);
    }

    #[test]
    fn test_answer_checking() {
        let q = capital();
        assert!(q.is_correct("Paris"));
        assert!(q.is_correct("  paris "));
        assert!(!q.is_correct("Lyon"));
    }

    #[test]
    fn test_grade() {
        let q = capital();

        let answered = AnsweredQuiz::grade(&q, "paris", 2.5);
        assert_eq!(answered.difficulty, Difficulty::Easy);
        assert_eq!(answered.expected_time_secs, 5.0);
        assert!(answered.outcome.was_correct);

        let answered = AnsweredQuiz::grade(&q, "Nice", 1.0);
        assert!(!answered.outcome.was_correct);
    }

    #[test]
    fn test_timed_out_is_wrong() {
        let outcome = QuizOutcome::timed_out(10.0);
        assert!(!outcome.was_correct);
        assert_eq!(outcome.time_taken_secs, 10.0);
    }

    #[test]
    fn test_difficulty_serialization() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }
}
