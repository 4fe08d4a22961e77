use std::sync::Arc;

use crate::config::SinkConfig;
use crate::error::StoreError;
use crate::providers::{DisabledSink, JournalSink, SupabaseSink};
use crate::traits::RecordSink;

pub fn build_record_sink(cfg: SinkConfig) -> Result<Arc<dyn RecordSink>, StoreError> {
    match cfg {
        SinkConfig::Supabase(c) => Ok(Arc::new(SupabaseSink::new(c)?)),
        SinkConfig::Journal(c) => Ok(Arc::new(JournalSink::from_config(&c)?)),
        SinkConfig::Disabled => Ok(Arc::new(DisabledSink)),
    }
}

pub fn build_record_sink_from_env() -> Result<Arc<dyn RecordSink>, StoreError> {
    build_record_sink(SinkConfig::from_env()?)
}
