pub mod buckets;
pub mod peers;
pub mod questions;

pub use buckets::{
    bucket_text, BucketText, MarketingText, OnboardingText, ProfileText, BUCKETS, UNDETERMINED,
};
pub use peers::{peers_for_level, PeerProduct};
pub use questions::{OptionText, QuestionText, QUESTIONS};
