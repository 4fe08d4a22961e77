use chrono::{DateTime, Utc};
use friction_core::AnswerSet;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A completed questionnaire. Synthesized sample answers never become one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub user_id: String,
    pub score: f64,
    pub answers: AnswerSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn new(user_id: impl Into<String>, score: f64, answers: AnswerSet) -> Self {
        Self {
            user_id: user_id.into(),
            score,
            answers,
            submitted_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.user_id.trim().is_empty() {
            return Err(StoreError::InvalidRecord(
                "submission user_id cannot be empty".to_string(),
            ));
        }
        if !self.score.is_finite() {
            return Err(StoreError::InvalidRecord(format!(
                "submission score {} is not a number",
                self.score
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Like,
    Dislike,
}

impl FeedbackType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

/// Like/dislike on a single recommendation bullet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub user_id: String,
    pub item_category: String,
    pub item_index: usize,
    pub item_text: String,
    pub feedback_type: FeedbackType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Feedback {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.user_id.trim().is_empty() {
            return Err(StoreError::InvalidRecord(
                "feedback user_id cannot be empty".to_string(),
            ));
        }
        if self.item_category.trim().is_empty() {
            return Err(StoreError::InvalidRecord(
                "feedback item_category cannot be empty".to_string(),
            ));
        }
        if self.item_text.trim().is_empty() {
            return Err(StoreError::InvalidRecord(
                "feedback item_text cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_uses_snake_case_schema() {
        let answers: AnswerSet = [(0, "A"), (1, "C")].into_iter().collect();
        let value = serde_json::to_value(Submission::new("user-abc", 3.0, answers)).unwrap();
        assert_eq!(value["user_id"], "user-abc");
        assert_eq!(value["answers"]["1"], "C");
        assert!(value.get("submitted_at").is_none());
    }

    #[test]
    fn feedback_type_round_trips_lowercase() {
        assert_eq!(FeedbackType::parse(" Like "), Some(FeedbackType::Like));
        assert_eq!(FeedbackType::parse("meh"), None);
        let value = serde_json::to_value(FeedbackType::Dislike).unwrap();
        assert_eq!(value, "dislike");
    }

    #[test]
    fn rejects_blank_fields() {
        let feedback = Feedback {
            user_id: "user-1".to_string(),
            item_category: "growth".to_string(),
            item_index: 0,
            item_text: "  ".to_string(),
            feedback_type: FeedbackType::Like,
            created_at: None,
        };
        assert!(feedback.validate().is_err());
        assert!(Submission::new("", 4.0, AnswerSet::new()).validate().is_err());
        assert!(Submission::new("u", f64::NAN, AnswerSet::new()).validate().is_err());
    }
}
