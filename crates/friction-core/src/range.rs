//! Shared band table and the score-range codec used for shareable links.
//!
//! The same ten bands drive range strings and interpretation buckets, so a
//! `/results/{range}` page and a freshly scored questionnaire always land on
//! the same content.

use serde::Serialize;

/// Score returned for a range string that cannot be read at all.
pub const FALLBACK_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub level: u8,
    pub range: &'static str,
    pub min: f64,
    pub max: f64,
    pub representative: f64,
    pub label: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

pub static BANDS: [Band; 10] = [
    Band {
        level: 1,
        range: "1.0-1.9",
        min: 1.0,
        max: 1.9,
        representative: 1.5,
        label: "Beginner-friendly",
        description: "Anyone can use without crypto knowledge",
        examples: &["Revolut Crypto", "Cash App Bitcoin", "PayPal Crypto"],
    },
    Band {
        level: 2,
        range: "2.0-2.9",
        min: 2.0,
        max: 2.9,
        representative: 2.5,
        label: "Accessible",
        description: "Basic crypto familiarity is useful",
        examples: &["Binance", "Coinbase", "Kraken", "Gemini"],
    },
    Band {
        level: 3,
        range: "3.0-3.9",
        min: 3.0,
        max: 3.9,
        representative: 3.5,
        label: "Crypto-leaning",
        description: "Basic crypto concepts required",
        examples: &["Argent", "Phantom", "Farcaster"],
    },
    Band {
        level: 4,
        range: "4.0-4.9",
        min: 4.0,
        max: 4.9,
        representative: 4.5,
        label: "Moderate",
        description: "Moderate crypto experience needed",
        examples: &["MetaMask", "OpenSea", "ENS"],
    },
    Band {
        level: 5,
        range: "5.0-5.9",
        min: 5.0,
        max: 5.9,
        representative: 5.5,
        label: "DeFi-focused",
        description: "DeFi knowledge required",
        examples: &["Uniswap", "PancakeSwap", "Jupiter", "1inch"],
    },
    Band {
        level: 6,
        range: "6.0-6.9",
        min: 6.0,
        max: 6.9,
        representative: 6.5,
        label: "High-friction",
        description: "Advanced crypto expertise needed",
        examples: &["dYdX", "Hyperliquid", "Synthetix"],
    },
    Band {
        level: 7,
        range: "7.0-7.9",
        min: 7.0,
        max: 7.9,
        representative: 7.5,
        label: "Advanced",
        description: "Deep DeFi/protocol knowledge",
        examples: &["Aave", "Curve", "MakerDAO", "Lido"],
    },
    Band {
        level: 8,
        range: "8.0-8.9",
        min: 8.0,
        max: 8.9,
        representative: 8.5,
        label: "Infra-heavy",
        description: "Technical infra focus",
        examples: &["Alchemy", "Chainlink", "Etherscan", "Dune"],
    },
    Band {
        level: 9,
        range: "9.0-9.9",
        min: 9.0,
        max: 9.9,
        representative: 9.5,
        label: "Protocol-layer",
        description: "Protocol development expertise",
        examples: &["Arbitrum", "Solana", "StarkNet", "zkSync"],
    },
    Band {
        level: 10,
        range: "10.0-10.0",
        min: 10.0,
        max: 10.0,
        representative: 10.0,
        label: "Gigachad-layer",
        description: "Cutting-edge research level",
        examples: &["Foundry", "Hardhat", "Aztec", "Flashbots"],
    },
];

impl Band {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }

    pub fn for_level(level: u8) -> Option<&'static Self> {
        BANDS.iter().find(|band| band.level == level)
    }

    pub fn by_range(range: &str) -> Option<&'static Self> {
        BANDS.iter().find(|band| band.range == range)
    }

    /// Band for any score, never failing.
    ///
    /// Scores in the gaps between bands (e.g. 1.95) go to the band holding
    /// their nearest integer; out-of-range and NaN scores clamp to an end band.
    pub fn for_score(score: f64) -> &'static Self {
        let [first, .., last] = &BANDS;

        if let Some(band) = BANDS.iter().find(|band| band.contains(score)) {
            return band;
        }
        if score > last.max {
            return last;
        }
        if score < first.min || score.is_nan() {
            return first;
        }

        let rounded = score.round();
        BANDS
            .iter()
            .find(|band| band.contains(rounded))
            .unwrap_or(first)
    }
}

pub fn score_to_range_string(score: f64) -> String {
    Band::for_score(score).range.to_string()
}

/// Representative score for a range string.
///
/// Unknown strings of the form `a-b` yield the midpoint of `a` and `b`;
/// anything else yields [`FALLBACK_SCORE`].
#[allow(clippy::float_cmp)]
pub fn range_string_to_score(range: &str) -> f64 {
    if let Some(band) = Band::by_range(range) {
        return band.representative;
    }

    let parts: Vec<&str> = range.split('-').collect();
    if let [lo, hi] = parts.as_slice() {
        let lo = lo.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        let hi = hi.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        if let (Some(lo), Some(hi)) = (lo, hi) {
            return if lo == hi { lo } else { (lo + hi) / 2.0 };
        }
    }

    FALLBACK_SCORE
}

pub fn is_valid_score_range(range: &str) -> bool {
    Band::by_range(range).is_some()
}

pub fn all_score_ranges() -> Vec<&'static str> {
    BANDS.iter().map(|band| band.range).collect()
}

/// Coarse five-step descriptor shown next to a score slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreLevel {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn score_level(score: f64) -> ScoreLevel {
    let (name, description) = if score <= 2.0 {
        (
            "Mainstream Ready",
            "Anyone can use this product without crypto knowledge",
        )
    } else if score <= 4.0 {
        ("Crypto Curious", "Basic crypto familiarity required")
    } else if score <= 6.0 {
        ("Crypto Experienced", "Moderate crypto expertise needed")
    } else if score <= 8.0 {
        ("Crypto Native", "Advanced crypto knowledge required")
    } else {
        ("Crypto Expert", "Deep technical expertise essential")
    };
    ScoreLevel { name, description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_strings_match_their_bounds() {
        for band in &BANDS {
            assert_eq!(band.range, format!("{:.1}-{:.1}", band.min, band.max));
            assert!(band.contains(band.representative));
        }
    }

    #[test]
    fn bands_are_contiguous_at_one_decimal() {
        for tenth in 10..=100 {
            let score = f64::from(tenth) / 10.0;
            let hits = BANDS.iter().filter(|band| band.contains(score)).count();
            assert_eq!(hits, 1, "score {score}");
        }
    }

    #[test]
    fn maps_scores_to_their_band() {
        assert_eq!(score_to_range_string(1.0), "1.0-1.9");
        assert_eq!(score_to_range_string(3.4), "3.0-3.9");
        assert_eq!(score_to_range_string(9.9), "9.0-9.9");
        assert_eq!(score_to_range_string(10.0), "10.0-10.0");
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(score_to_range_string(0.0), "1.0-1.9");
        assert_eq!(score_to_range_string(-42.0), "1.0-1.9");
        assert_eq!(score_to_range_string(10.01), "10.0-10.0");
        assert_eq!(score_to_range_string(1e9), "10.0-10.0");
        assert_eq!(score_to_range_string(f64::INFINITY), "10.0-10.0");
        assert_eq!(score_to_range_string(f64::NEG_INFINITY), "1.0-1.9");
        assert_eq!(score_to_range_string(f64::NAN), "1.0-1.9");
    }

    #[test]
    fn gap_scores_round_to_nearest_integer_band() {
        assert_eq!(score_to_range_string(1.95), "2.0-2.9");
        assert_eq!(score_to_range_string(4.92), "4.0-4.9");
        assert_eq!(score_to_range_string(9.95), "10.0-10.0");
    }

    #[test]
    fn canonical_strings_decode_to_representatives() {
        assert_eq!(range_string_to_score("1.0-1.9"), 1.5);
        assert_eq!(range_string_to_score("7.0-7.9"), 7.5);
        assert_eq!(range_string_to_score("10.0-10.0"), 10.0);
    }

    #[test]
    fn malformed_strings_fall_back() {
        assert_eq!(range_string_to_score("not-a-range"), 5.0);
        assert_eq!(range_string_to_score(""), 5.0);
        assert_eq!(range_string_to_score("1-2-3"), 5.0);
        assert_eq!(range_string_to_score("NaN-NaN"), 5.0);
        assert_eq!(range_string_to_score("3.0-4.0"), 3.5);
        assert_eq!(range_string_to_score("6-6"), 6.0);
    }

    #[test]
    fn bounds_must_parse_completely() {
        assert_eq!(range_string_to_score("3.0x-4.0"), FALLBACK_SCORE);
        assert_eq!(range_string_to_score("3.0-4.0 points"), FALLBACK_SCORE);
        assert_eq!(range_string_to_score(" 3.0 - 4.0 "), 3.5);
    }

    #[test]
    fn round_trip_lands_in_same_band() {
        for tenth in 10..=100 {
            let score = f64::from(tenth) / 10.0;
            let range = score_to_range_string(score);
            let back = range_string_to_score(&range);
            assert_eq!(score_to_range_string(back), range);
        }
    }

    #[test]
    fn validity_is_exact_membership() {
        for range in all_score_ranges() {
            assert!(is_valid_score_range(range));
        }
        assert_eq!(all_score_ranges().len(), 10);
        assert!(!is_valid_score_range("3.0-3.95"));
        assert!(!is_valid_score_range("10-10"));
        assert!(!is_valid_score_range(" 1.0-1.9"));
        assert!(!is_valid_score_range(""));
    }

    #[test]
    fn slider_levels() {
        assert_eq!(score_level(1.0).name, "Mainstream Ready");
        assert_eq!(score_level(2.0).name, "Mainstream Ready");
        assert_eq!(score_level(2.1).name, "Crypto Curious");
        assert_eq!(score_level(6.0).name, "Crypto Experienced");
        assert_eq!(score_level(7.5).name, "Crypto Native");
        assert_eq!(score_level(8.1).name, "Crypto Expert");
    }
}
