pub mod config;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod identity;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::*;
pub use dispatch::Dispatcher;
pub use error::StoreError;
pub use factory::*;
pub use identity::{generate_user_id, load_or_create_user_id};
pub use providers::{DisabledSink, JournalSink, SupabaseSink};
pub use traits::*;
pub use types::*;
