use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::JournalConfig;
use crate::error::StoreError;
use crate::traits::RecordSink;
use crate::types::{Feedback, Submission};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Journal {
    #[serde(default)]
    submissions: Vec<Submission>,
    #[serde(default)]
    feedback: Vec<Feedback>,
}

/// Local JSON file holding every record, rewritten on each insert.
pub struct JournalSink {
    path: PathBuf,
    journal: Mutex<Journal>,
}

impl JournalSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !path.exists() {
            let bytes = serde_json::to_vec_pretty(&Journal::default())?;
            fs::write(&path, bytes)?;
        }

        let bytes = fs::read(&path)?;
        let journal: Journal = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            submissions = journal.submissions.len(),
            feedback = journal.feedback.len(),
            "journal opened"
        );

        Ok(Self {
            path,
            journal: Mutex::new(journal),
        })
    }

    pub fn from_config(config: &JournalConfig) -> Result<Self, StoreError> {
        Self::open(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.journal.lock().submissions.clone()
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.journal.lock().feedback.clone()
    }

    fn persist(&self, journal: &Journal) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(journal)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordSink for JournalSink {
    fn name(&self) -> &'static str {
        "journal"
    }

    async fn save_submission(&self, mut submission: Submission) -> Result<(), StoreError> {
        submission.validate()?;
        submission.submitted_at.get_or_insert_with(Utc::now);

        let mut journal = self.journal.lock();
        journal.submissions.push(submission);
        if let Err(e) = self.persist(&journal) {
            journal.submissions.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn save_feedback(&self, mut feedback: Feedback) -> Result<(), StoreError> {
        feedback.validate()?;
        feedback.created_at.get_or_insert_with(Utc::now);

        let mut journal = self.journal.lock();
        journal.feedback.push(feedback);
        if let Err(e) = self.persist(&journal) {
            journal.feedback.pop();
            return Err(e);
        }
        Ok(())
    }
}
