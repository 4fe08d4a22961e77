use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::traits::RecordSink;
use crate::types::{Feedback, Submission};

/// Fire-and-forget writer in front of a [`RecordSink`].
///
/// Saves run on the given runtime. Failures are logged and dropped, never
/// retried, and the caller never waits.
#[derive(Clone)]
pub struct Dispatcher {
    sink: Arc<dyn RecordSink>,
    handle: Handle,
}

impl Dispatcher {
    pub fn new(sink: Arc<dyn RecordSink>, handle: Handle) -> Self {
        Self { sink, handle }
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    pub fn submit(&self, submission: Submission) -> JoinHandle<()> {
        let sink = Arc::clone(&self.sink);
        self.handle.spawn(async move {
            let user_id = submission.user_id.clone();
            let score = submission.score;
            match sink.save_submission(submission).await {
                Ok(()) => tracing::info!(sink = sink.name(), %user_id, score, "submission saved"),
                Err(e) => tracing::warn!(
                    sink = sink.name(),
                    %user_id,
                    error = %e,
                    "failed to save submission"
                ),
            }
        })
    }

    pub fn feedback(&self, feedback: Feedback) -> JoinHandle<()> {
        let sink = Arc::clone(&self.sink);
        self.handle.spawn(async move {
            let user_id = feedback.user_id.clone();
            let kind = feedback.feedback_type.as_str();
            match sink.save_feedback(feedback).await {
                Ok(()) => tracing::info!(sink = sink.name(), %user_id, kind, "feedback saved"),
                Err(e) => tracing::warn!(
                    sink = sink.name(),
                    %user_id,
                    error = %e,
                    "failed to save feedback"
                ),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use friction_core::AnswerSet;
    use parking_lot::Mutex;

    use super::*;
    use crate::error::StoreError;
    use crate::types::FeedbackType;

    #[derive(Default)]
    struct RecordingSink {
        submissions: Mutex<Vec<Submission>>,
        feedback: Mutex<Vec<Feedback>>,
    }

    #[async_trait::async_trait]
    impl RecordSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn save_submission(&self, submission: Submission) -> Result<(), StoreError> {
            self.submissions.lock().push(submission);
            Ok(())
        }

        async fn save_feedback(&self, feedback: Feedback) -> Result<(), StoreError> {
            self.feedback.lock().push(feedback);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait::async_trait]
    impl RecordSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn save_submission(&self, _submission: Submission) -> Result<(), StoreError> {
            Err(StoreError::Api {
                status: 503,
                body: "unavailable".to_string(),
            })
        }

        async fn save_feedback(&self, _feedback: Feedback) -> Result<(), StoreError> {
            Err(StoreError::Api {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    fn feedback() -> Feedback {
        Feedback {
            user_id: "user-x".to_string(),
            item_category: "keyAreas".to_string(),
            item_index: 1,
            item_text: "Explain gas fees".to_string(),
            feedback_type: FeedbackType::Dislike,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn delivers_records_in_background() {
        let sink = Arc::new(RecordingSink::default());
        let dispatcher = Dispatcher::new(sink.clone(), Handle::current());

        dispatcher
            .submit(Submission::new("user-x", 6.2, AnswerSet::new()))
            .await
            .unwrap();
        dispatcher.feedback(feedback()).await.unwrap();

        assert_eq!(sink.submissions.lock().len(), 1);
        assert_eq!(sink.feedback.lock().len(), 1);
        assert_eq!(dispatcher.sink_name(), "recording");
    }

    #[tokio::test]
    async fn failures_are_swallowed() {
        let dispatcher = Dispatcher::new(Arc::new(FailingSink), Handle::current());
        let joined = dispatcher
            .submit(Submission::new("user-x", 6.2, AnswerSet::new()))
            .await;
        assert!(joined.is_ok());
        assert!(dispatcher.feedback(feedback()).await.is_ok());
    }
}
