use serde::Serialize;

use crate::catalog::{AnswerSet, Catalog, Question};
use crate::error::CoreError;
use crate::range::score_to_range_string;
use crate::score::calculate_score;

pub const UNANSWERED_PROMPT: &str = "Please select an answer before proceeding.";

/// Outcome of a navigation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Now showing the question at this index.
    Question { index: usize },
    /// The current question has no answer yet.
    Blocked { prompt: &'static str },
    /// Last question answered; the score is final.
    Completed { score: f64, score_range: String },
    /// Stepped back from the first question.
    Exit,
}

/// One pass through the questionnaire.
#[derive(Debug, Clone)]
pub struct Questionnaire<'a> {
    catalog: &'a Catalog,
    current: usize,
    answers: AnswerSet,
    prompt: Option<&'static str>,
}

impl<'a> Questionnaire<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            current: 0,
            answers: AnswerSet::new(),
            prompt: None,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.catalog.question(self.current)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Prompt left by the last blocked `next()`, cleared by `select`.
    pub fn prompt(&self) -> Option<&'static str> {
        self.prompt
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.catalog.len()
    }

    /// Percentage of the way through, counting the current question.
    pub fn progress(&self) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.catalog.len() as f64 * 100.0
    }

    /// Records an answer for the current question, replacing any earlier one.
    pub fn select(&mut self, label: &str) -> Result<(), CoreError> {
        let index = self.current;
        let question = self
            .catalog
            .question(index)
            .ok_or(CoreError::UnknownQuestion(index))?;
        if question.option(label).is_none() {
            return Err(CoreError::UnknownOption {
                index,
                label: label.to_string(),
            });
        }
        self.answers.insert(index, label);
        self.prompt = None;
        Ok(())
    }

    /// Jumps to a question, e.g. to revise an earlier answer.
    pub fn go_to(&mut self, index: usize) -> Result<Step, CoreError> {
        if index >= self.catalog.len() {
            return Err(CoreError::UnknownQuestion(index));
        }
        self.current = index;
        self.prompt = None;
        Ok(Step::Question { index })
    }

    pub fn next(&mut self) -> Step {
        if self.answers.get(self.current).is_none() {
            self.prompt = Some(UNANSWERED_PROMPT);
            return Step::Blocked {
                prompt: UNANSWERED_PROMPT,
            };
        }

        if !self.is_last() {
            self.current += 1;
            return Step::Question {
                index: self.current,
            };
        }

        let score = calculate_score(&self.answers, self.catalog);
        Step::Completed {
            score,
            score_range: score_to_range_string(score),
        }
    }

    pub fn previous(&mut self) -> Step {
        self.prompt = None;
        match self.current.checked_sub(1) {
            Some(index) => {
                self.current = index;
                Step::Question { index }
            }
            None => Step::Exit,
        }
    }

    /// Back to the first question with no answers.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.prompt = None;
    }
}
