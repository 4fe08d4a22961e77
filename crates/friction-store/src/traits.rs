use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{Feedback, Submission};

/// Destination for completed questionnaires and result feedback.
#[async_trait]
pub trait RecordSink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn save_submission(&self, submission: Submission) -> Result<(), StoreError>;

    async fn save_feedback(&self, feedback: Feedback) -> Result<(), StoreError>;
}
