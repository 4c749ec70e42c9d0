//! Quiz progression and answer evaluation.
//!
//! A [`QuizEngine`] owns one quiz attempt: the fixed question list, the
//! current position, the selections for the current question, whether the
//! answer has been revealed, and the running score.
//!
//! Calls made outside their precondition (selecting after reveal, submitting
//! nothing, advancing before reveal) are ignored rather than reported, so a
//! UI that races ahead of its own controls cannot corrupt the session.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::models::Question;

/// Result of evaluating one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

/// How an option should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionClass {
    Neutral,
    Selected,
    Correct,
    IncorrectlyChosen,
}

/// State of a single quiz attempt.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    position: usize,
    selections: BTreeSet<usize>,
    revealed: bool,
    score: usize,
    outcomes: Vec<Outcome>,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            position: 0,
            selections: BTreeSet::new(),
            revealed: false,
            score: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question at the current position, or `None` once terminal.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selections(&self) -> &BTreeSet<usize> {
        &self.selections
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Outcomes of every evaluated question, in quiz order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn is_terminal(&self) -> bool {
        self.position >= self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.position == self.questions.len() - 1
    }

    /// Derived from the current question each time; `false` when terminal.
    pub fn is_multiple_choice(&self) -> bool {
        self.current_question().is_some_and(Question::is_multiple_choice)
    }

    /// Outcome of the current question once it has been revealed.
    pub fn current_outcome(&self) -> Option<Outcome> {
        if self.revealed {
            self.outcomes.get(self.position).copied()
        } else {
            None
        }
    }

    /// Whether `submit_multiple` would evaluate right now.
    pub fn can_submit(&self) -> bool {
        !self.revealed && self.is_multiple_choice() && !self.selections.is_empty()
    }

    /// Select (single-choice) or toggle (multi-choice) the option at `index`.
    ///
    /// Single-choice selection evaluates immediately. Ignored once revealed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not an option of the current question.
    pub fn select_option(&mut self, index: usize) {
        let Some(question) = self.questions.get(self.position) else {
            trace!("select_option({index}) ignored: quiz is finished");
            return;
        };
        if self.revealed {
            trace!("select_option({index}) ignored: answer already revealed");
            return;
        }

        let option_count = question.option_count();
        assert!(
            index < option_count,
            "option index {index} out of range for question with {option_count} options"
        );

        if question.is_multiple_choice() {
            if !self.selections.remove(&index) {
                self.selections.insert(index);
            }
            trace!("selections now {:?}", self.selections);
        } else {
            self.selections.clear();
            self.selections.insert(index);
            self.evaluate();
        }
    }

    /// Evaluate the current multi-choice selection.
    ///
    /// Ignored when nothing is selected or the answer is already revealed.
    pub fn submit_multiple(&mut self) {
        if self.is_terminal() || self.revealed {
            trace!("submit_multiple ignored: nothing pending");
            return;
        }
        if self.selections.is_empty() {
            trace!("submit_multiple ignored: no selection");
            return;
        }
        self.evaluate();
    }

    fn evaluate(&mut self) {
        let Some(question) = self.questions.get(self.position) else {
            return;
        };

        let outcome = if question.correct_answer.matches(&self.selections) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        self.revealed = true;
        if outcome.is_correct() {
            self.score += 1;
        }
        self.outcomes.push(outcome);

        debug!(
            "question {} answered {:?}: {:?}, score {}",
            self.position, self.selections, outcome, self.score
        );
    }

    /// Move past a revealed question, or into the terminal state after the last one.
    pub fn advance(&mut self) {
        if !self.revealed {
            trace!("advance ignored: answer not revealed");
            return;
        }

        self.position = if self.is_last_question() {
            self.questions.len()
        } else {
            self.position + 1
        };
        self.selections.clear();
        self.revealed = false;

        if self.is_terminal() {
            debug!(
                "quiz finished with {}/{}",
                self.score,
                self.questions.len()
            );
        } else {
            debug!("advanced to question {}", self.position);
        }
    }

    /// Start the attempt over from the first question.
    pub fn reset(&mut self) {
        self.position = 0;
        self.selections.clear();
        self.revealed = false;
        self.score = 0;
        self.outcomes.clear();
        debug!("quiz reset");
    }

    pub fn option_classification(&self, index: usize) -> OptionClass {
        let Some(question) = self.current_question() else {
            return OptionClass::Neutral;
        };
        let chosen = self.selections.contains(&index);

        if !self.revealed {
            return if chosen {
                OptionClass::Selected
            } else {
                OptionClass::Neutral
            };
        }

        if question.correct_answer.contains(index) {
            OptionClass::Correct
        } else if chosen {
            OptionClass::IncorrectlyChosen
        } else {
            OptionClass::Neutral
        }
    }
}
