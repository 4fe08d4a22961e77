use reqwest::Client;
use serde::Serialize;

use crate::config::SupabaseConfig;
use crate::error::StoreError;
use crate::traits::RecordSink;
use crate::types::{Feedback, Submission};

/// Inserts rows through the Supabase PostgREST endpoint.
#[derive(Clone)]
pub struct SupabaseSink {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseSink {
    pub fn new(config: SupabaseConfig) -> Result<Self, StoreError> {
        if config.base_url.trim().is_empty() {
            return Err(StoreError::Config("supabase base url is empty".to_string()));
        }
        if config.anon_key.trim().is_empty() {
            return Err(StoreError::Config("supabase anon key is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            table
        )
    }

    async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<(), StoreError> {
        let res = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordSink for SupabaseSink {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn save_submission(&self, submission: Submission) -> Result<(), StoreError> {
        submission.validate()?;
        self.insert(&self.config.submissions_table, &submission)
            .await
    }

    async fn save_feedback(&self, feedback: Feedback) -> Result<(), StoreError> {
        feedback.validate()?;
        self.insert(&self.config.feedback_table, &feedback).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_trims_trailing_slash() {
        let sink = SupabaseSink::new(SupabaseConfig::new("https://demo.supabase.co/", "anon")).unwrap();
        assert_eq!(
            sink.table_url("feedback"),
            "https://demo.supabase.co/rest/v1/feedback"
        );
    }

    #[test]
    fn rejects_missing_credentials() {
        assert!(SupabaseSink::new(SupabaseConfig::new("", "anon")).is_err());
        assert!(SupabaseSink::new(SupabaseConfig::new("https://demo.supabase.co", " ")).is_err());
    }
}
