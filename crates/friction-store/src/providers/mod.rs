pub mod disabled;
pub mod journal;
pub mod supabase;

pub use disabled::DisabledSink;
pub use journal::JournalSink;
pub use supabase::SupabaseSink;
