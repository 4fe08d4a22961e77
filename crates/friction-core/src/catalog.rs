use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use friction_content::QUESTIONS;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub text: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: usize,
    pub category: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|opt| opt.label == label)
    }
}

/// Ordered, immutable list of questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
}

static STANDARD: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CoreError> {
        for (pos, question) in questions.iter().enumerate() {
            if question.id != pos {
                return Err(CoreError::InvalidCatalog(format!(
                    "question id {} sits at position {pos}",
                    question.id
                )));
            }
            if question.options.is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "question {pos} has no options"
                )));
            }
            let mut seen = HashSet::new();
            for opt in &question.options {
                if !seen.insert(opt.label.as_str()) {
                    return Err(CoreError::InvalidCatalog(format!(
                        "question {pos} repeats label {:?}",
                        opt.label
                    )));
                }
            }
        }
        Ok(Self { questions })
    }

    /// The built-in questionnaire, built on first use.
    pub fn standard() -> &'static Self {
        STANDARD.get_or_init(|| Self {
            questions: QUESTIONS
                .iter()
                .map(|q| Question {
                    id: q.id as usize,
                    category: q.category.to_string(),
                    text: q.text.to_string(),
                    options: q
                        .options
                        .iter()
                        .map(|o| AnswerOption {
                            label: o.label.to_string(),
                            text: o.text.to_string(),
                            weight: f64::from(o.weight),
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn option(&self, index: usize, label: &str) -> Option<&AnswerOption> {
        self.question(index).and_then(|q| q.option(label))
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !out.contains(&question.category.as_str()) {
                out.push(&question.category);
            }
        }
        out
    }
}

/// Sparse map from question index to the chosen option label.
///
/// Iterates in ascending question index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<usize, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, label: impl Into<String>) -> Option<String> {
        self.0.insert(index, label.into())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        self.0.remove(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(idx, label)| (*idx, label.as_str()))
    }

    /// True once every catalog question has an answer.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        (0..catalog.len()).all(|idx| self.0.contains_key(&idx))
    }
}

impl<L: Into<String>> FromIterator<(usize, L)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (usize, L)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(idx, label)| (idx, label.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: usize, labels: &[&str]) -> Question {
        Question {
            id,
            category: "General".to_string(),
            text: format!("q{id}"),
            options: labels
                .iter()
                .map(|l| AnswerOption {
                    label: (*l).to_string(),
                    text: String::new(),
                    weight: 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn standard_catalog_has_eighteen_questions_in_nine_categories() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 18);
        let categories = catalog.categories();
        assert_eq!(categories.len(), 9);
        assert_eq!(categories.first().copied(), Some("Product Concept Clarity"));
        assert_eq!(categories.last().copied(), Some("UI/UX Simplicity"));
    }

    #[test]
    fn standard_catalog_passes_validation() {
        let rebuilt = Catalog::new(Catalog::standard().questions().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = Catalog::new(vec![question(0, &["A", "A"])]).unwrap_err();
        assert!(err.to_string().contains("repeats label"));
    }

    #[test]
    fn rejects_empty_options_and_misplaced_ids() {
        assert!(Catalog::new(vec![question(0, &[])]).is_err());
        assert!(Catalog::new(vec![question(1, &["A"])]).is_err());
    }

    #[test]
    fn answer_set_iterates_by_index_and_tracks_completion() {
        let catalog = Catalog::new(vec![question(0, &["A"]), question(1, &["A"])]).unwrap();
        let mut answers = AnswerSet::new();
        answers.insert(1, "A");
        answers.insert(0, "A");
        let order: Vec<usize> = answers.iter().map(|(idx, _)| idx).collect();
        assert_eq!(order, vec![0, 1]);
        assert!(answers.is_complete(&catalog));
        answers.remove(1);
        assert!(!answers.is_complete(&catalog));
    }

    #[test]
    fn answer_set_serializes_as_index_keyed_object() {
        let answers: AnswerSet = [(0, "A"), (2, "F")].into_iter().collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"0":"A","2":"F"}"#);
        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
    }
}
