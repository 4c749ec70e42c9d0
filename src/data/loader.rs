use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::models::{CorrectAnswer, Question};

/// Error loading a question bank.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("question {} is invalid: {reason}", .index + 1)]
    InvalidQuestion { index: usize, reason: QuestionError },
}

/// Why a single question record was rejected.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("it has no options")]
    NoOptions,
    #[error("answer {answer} is out of range for {options} options")]
    AnswerOutOfRange { answer: usize, options: usize },
    #[error("the correct answer set is empty")]
    EmptyAnswerSet,
    #[error("answer {answer} is listed more than once")]
    DuplicateAnswer { answer: usize },
}

// Wire form. Multi-choice answers stay a list here so duplicates can be reported.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Single(usize),
    Multiple(Vec<usize>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(alias = "question")]
    prompt: String,
    options: Vec<String>,
    #[serde(alias = "correct_answer")]
    correct_answer: RawAnswer,
    #[serde(default)]
    explanation: String,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let options = raw.options.len();
        if options == 0 {
            return Err(QuestionError::NoOptions);
        }

        let check_range = |answer: usize| {
            if answer < options {
                Ok(answer)
            } else {
                Err(QuestionError::AnswerOutOfRange { answer, options })
            }
        };

        let correct_answer = match raw.correct_answer {
            RawAnswer::Single(answer) => CorrectAnswer::Single(check_range(answer)?),
            RawAnswer::Multiple(answers) => {
                if answers.is_empty() {
                    return Err(QuestionError::EmptyAnswerSet);
                }
                let mut set = BTreeSet::new();
                for answer in answers {
                    if !set.insert(check_range(answer)?) {
                        return Err(QuestionError::DuplicateAnswer { answer });
                    }
                }
                CorrectAnswer::Multiple(set)
            }
        };

        Ok(Question {
            prompt: raw.prompt,
            options: raw.options,
            correct_answer,
            explanation: raw.explanation,
        })
    }
}

/// Parse and validate a JSON question bank held in memory.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(LoadError::Empty);
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, question)| {
            Question::try_from(question)
                .map_err(|reason| LoadError::InvalidQuestion { index, reason })
        })
        .collect()
}

/// Load and validate questions from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content)?;
    info!("loaded {} questions from {}", questions.len(), path.display());

    Ok(questions)
}
