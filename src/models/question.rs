use std::collections::BTreeSet;

/// The answer key of a question.
///
/// The shape decides the mode: a bare index is a single-choice question,
/// a set of indices is a multi-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectAnswer {
    Single(usize),
    Multiple(BTreeSet<usize>),
}

impl CorrectAnswer {
    pub fn is_multiple(&self) -> bool {
        matches!(self, CorrectAnswer::Multiple(_))
    }

    /// Whether `index` belongs to the correct set.
    pub fn contains(&self, index: usize) -> bool {
        match self {
            CorrectAnswer::Single(answer) => *answer == index,
            CorrectAnswer::Multiple(answers) => answers.contains(&index),
        }
    }

    /// Exact set comparison. No partial credit.
    pub fn matches(&self, selections: &BTreeSet<usize>) -> bool {
        match self {
            CorrectAnswer::Single(answer) => {
                selections.len() == 1 && selections.contains(answer)
            }
            CorrectAnswer::Multiple(answers) => answers == selections,
        }
    }
}

/// A single quiz question. Option indices are the only option identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: CorrectAnswer,
    pub explanation: String,
}

impl Question {
    pub fn single(
        prompt: impl Into<String>,
        options: &[&str],
        answer: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: CorrectAnswer::Single(answer),
            explanation: explanation.into(),
        }
    }

    pub fn multiple(
        prompt: impl Into<String>,
        options: &[&str],
        answers: &[usize],
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: CorrectAnswer::Multiple(answers.iter().copied().collect()),
            explanation: explanation.into(),
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.correct_answer.is_multiple()
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    #[test]
    fn test_mode_follows_answer_shape() {
        let single = Question::single("2 + 2?", &["3", "4"], 1, "");
        let multi = Question::multiple("Even numbers?", &["1", "2", "4"], &[1, 2], "");

        assert!(!single.is_multiple_choice());
        assert!(multi.is_multiple_choice());
    }

    #[test]
    fn test_single_matches_only_singleton() {
        let answer = CorrectAnswer::Single(1);

        assert!(answer.matches(&set(&[1])));
        assert!(!answer.matches(&set(&[0])));
        assert!(!answer.matches(&set(&[0, 1])));
        assert!(!answer.matches(&set(&[])));
    }

    #[test]
    fn test_multiple_requires_exact_set() {
        let answer = CorrectAnswer::Multiple(set(&[0, 2]));

        assert!(answer.matches(&set(&[2, 0])));
        assert!(!answer.matches(&set(&[0])));
        assert!(!answer.matches(&set(&[0, 1, 2])));
        assert!(!answer.matches(&set(&[0, 1])));
    }
}
