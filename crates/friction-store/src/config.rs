use std::path::PathBuf;
use std::time::Duration;

use crate::error::StoreError;

pub const DEFAULT_JOURNAL_PATH: &str = "./data/friction-journal.json";

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub base_url: String,
    pub anon_key: String,
    pub submissions_table: String,
    pub feedback_table: String,
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            submissions_table: "submissions".to_string(),
            feedback_table: "feedback".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JournalConfig {
    pub path: PathBuf,
}

impl JournalConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone)]
pub enum SinkConfig {
    Supabase(SupabaseConfig),
    Journal(JournalConfig),
    Disabled,
}

impl SinkConfig {
    /// Reads `FRICTION_SINK` and the settings of the chosen sink.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let kind = lookup("FRICTION_SINK")
            .map(|s| s.trim().to_ascii_lowercase())
            .unwrap_or_else(|| "none".to_string());

        match kind.as_str() {
            "none" | "disabled" | "" => Ok(Self::Disabled),
            "journal" => {
                let path = lookup("FRICTION_JOURNAL_PATH")
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_JOURNAL_PATH.to_string());
                Ok(Self::Journal(JournalConfig::new(path)))
            }
            "supabase" => {
                let url = lookup("SUPABASE_URL")
                    .filter(|v| !v.trim().is_empty())
                    .ok_or_else(|| StoreError::Config("SUPABASE_URL not configured".to_string()))?;
                let key = lookup("SUPABASE_ANON_KEY")
                    .filter(|v| !v.trim().is_empty())
                    .ok_or_else(|| {
                        StoreError::Config("SUPABASE_ANON_KEY not configured".to_string())
                    })?;
                let mut cfg = SupabaseConfig::new(url, key);
                if let Some(ms) = lookup("FRICTION_SINK_TIMEOUT_MS")
                    .and_then(|v| v.trim().parse::<u64>().ok())
                {
                    cfg.timeout = Duration::from_millis(ms.clamp(100, 120_000));
                }
                Ok(Self::Supabase(cfg))
            }
            other => Err(StoreError::Config(format!(
                "FRICTION_SINK must be supabase, journal or none (got {other:?})"
            ))),
        }
    }
}
