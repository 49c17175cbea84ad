//! In-memory question bank.
//!
//! `QuestionBank` stores questions per category and hands them out
//! round-robin. It is the simplest possible `QuizGate` and is what tests
//! and local simulations use in place of a real content service.

use rustc_hash::FxHashMap;

use super::QuizGate;
use crate::core::QuizQuestion;

/// Questions for one category plus the rotation cursor.
#[derive(Clone, Debug, Default)]
struct CategoryDeck {
    questions: Vec<QuizQuestion>,
    cursor: usize,
}

/// Registry of quiz questions keyed by category.
///
/// ## Example
///
/// ```
/// use quiz_battle::content::{QuestionBank, QuizGate};
/// use quiz_battle::core::{Difficulty, QuizQuestion};
///
/// let mut bank = QuestionBank::new();
/// bank.register(QuizQuestion::new("space", "Closest star?", "Sun", Difficulty::Easy, 4.0));
/// bank.register(QuizQuestion::new("space", "Red planet?", "Mars", Difficulty::Easy, 4.0));
///
/// assert_eq!(bank.next_question("space").unwrap().correct_answer, "Sun");
/// assert_eq!(bank.next_question("space").unwrap().correct_answer, "Mars");
/// assert_eq!(bank.next_question("space").unwrap().correct_answer, "Sun");
/// assert!(bank.next_question("history").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    decks: FxHashMap<String, CategoryDeck>,
}

impl QuestionBank {
    /// Create a new empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question under its own category.
    pub fn register(&mut self, question: QuizQuestion) {
        self.decks
            .entry(question.category.clone())
            .or_default()
            .questions
            .push(question);
    }

    /// Add a question, builder style.
    #[must_use]
    pub fn with_question(mut self, question: QuizQuestion) -> Self {
        self.register(question);
        self
    }

    /// Total number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.values().map(|d| d.questions.len()).sum()
    }

    /// Check if the bank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuizGate for QuestionBank {
    fn next_question(&mut self, category: &str) -> Option<QuizQuestion> {
        let deck = self.decks.get_mut(category)?;
        if deck.questions.is_empty() {
            return None;
        }
        let question = deck.questions[deck.cursor % deck.questions.len()].clone();
        deck.cursor = (deck.cursor + 1) % deck.questions.len();
        Some(question)
    }
}
