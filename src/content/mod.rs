//! Question supply for quiz-gated attacks.
//!
//! The engine depends on, but does not implement, a source of quiz
//! questions. `QuizGate` is that seam: the real question bank and the UI
//! timing live with the caller and can change independently of the combat
//! math. `QuestionBank` is an in-memory implementation.

pub mod bank;

pub use bank::QuestionBank;

use crate::core::QuizQuestion;

/// Supplier of quiz questions.
///
/// Returns `None` when no question is available for the category.
pub trait QuizGate {
    /// Fetch the next question for a category (typically the attacking
    /// combatant's theme).
    fn next_question(&mut self, category: &str) -> Option<QuizQuestion>;
}
