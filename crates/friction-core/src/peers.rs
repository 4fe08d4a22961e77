use friction_content::{peers_for_level, PeerProduct};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarProduct {
    pub name: String,
    pub category: String,
    pub website: String,
    pub twitter: String,
    pub logo: String,
}

impl From<&PeerProduct> for SimilarProduct {
    fn from(peer: &PeerProduct) -> Self {
        Self {
            name: peer.name.to_string(),
            category: peer.category.to_string(),
            website: peer.website.to_string(),
            twitter: peer.twitter.to_string(),
            logo: peer.logo.to_string(),
        }
    }
}

/// Known products at the score's nearest whole difficulty.
///
/// Empty when the rounded score falls outside `1..=10`.
pub fn similar_products(score: f64) -> Vec<SimilarProduct> {
    let rounded = score.round();
    if !(1.0..=10.0).contains(&rounded) {
        return Vec::new();
    }
    // in range, so the cast is exact
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let level = rounded as u8;
    peers_for_level(level).iter().map(SimilarProduct::from).collect()
}
