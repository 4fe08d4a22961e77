use crate::error::StoreError;
use crate::traits::RecordSink;
use crate::types::{Feedback, Submission};

/// Accepts every record and keeps none.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSink;

#[async_trait::async_trait]
impl RecordSink for DisabledSink {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn save_submission(&self, submission: Submission) -> Result<(), StoreError> {
        tracing::debug!(user_id = %submission.user_id, "submission discarded, sink disabled");
        Ok(())
    }

    async fn save_feedback(&self, feedback: Feedback) -> Result<(), StoreError> {
        tracing::debug!(user_id = %feedback.user_id, "feedback discarded, sink disabled");
        Ok(())
    }
}
