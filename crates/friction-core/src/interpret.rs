use friction_content::{bucket_text, BucketText, UNDETERMINED};
use serde::{Deserialize, Serialize};

use crate::range::{Band, BANDS};
use crate::score::CategoryScore;

/// Minimum absolute gap between a category and the overall score that is
/// worth calling out.
pub const DEVIATION_THRESHOLD: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealUserProfile {
    pub experience_level: String,
    pub knowledge_base: String,
    pub behavior: String,
    pub expectations: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingPlan {
    pub main: String,
    pub key_areas: Vec<String>,
    pub content_guide: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingPlan {
    pub main: String,
    pub principles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub marketing: MarketingPlan,
    pub onboarding: OnboardingPlan,
    pub growth_tactics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationKind {
    /// The category demands more crypto expertise than the product overall.
    Strength,
    /// The category is more approachable than the product overall.
    Weakness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviationInsight {
    pub category: String,
    pub category_score: f64,
    pub deviation: f64,
    pub kind: DeviationKind,
}

impl DeviationInsight {
    fn sentence(&self) -> String {
        let gap = self.deviation.abs();
        match self.kind {
            DeviationKind::Strength => format!(
                "{} scores {:.1}, {gap:.1} points above your overall score, so it asks noticeably more crypto expertise of users than the rest of your product.",
                self.category, self.category_score
            ),
            DeviationKind::Weakness => format!(
                "{} scores {:.1}, {gap:.1} points below your overall score, so it is noticeably more approachable than the rest of your product.",
                self.category, self.category_score
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub score: f64,
    /// Canonical range string, `None` for the undetermined sentinel.
    pub score_range: Option<String>,
    /// Bucket level 1..=10, `None` for the undetermined sentinel.
    pub level: Option<u8>,
    pub narrative: String,
    pub profile: IdealUserProfile,
    pub recommendations: Recommendations,
    pub insights: Vec<DeviationInsight>,
}

/// Bucket level for a score: integer floor clipped to `1..=10`.
///
/// The sentinel `0` and non-finite scores have no bucket.
#[allow(clippy::float_cmp)]
pub fn bucket_level(score: f64) -> Option<u8> {
    if !score.is_finite() || score == 0.0 {
        return None;
    }
    let [first, .., last] = &BANDS;
    let floor = score.floor().clamp(first.min, last.min);
    BANDS
        .iter()
        .find(|band| band.min <= floor && floor < band.min + 1.0)
        .map(|band| band.level)
}

/// Categories whose score sits at least [`DEVIATION_THRESHOLD`] away from the
/// overall score, in input order.
pub fn deviation_insights(score: f64, category_scores: &[CategoryScore]) -> Vec<DeviationInsight> {
    category_scores
        .iter()
        .filter_map(|cat| {
            let deviation = cat.score - score;
            if deviation.abs() < DEVIATION_THRESHOLD || deviation.is_nan() {
                return None;
            }
            let kind = if deviation > 0.0 {
                DeviationKind::Strength
            } else {
                DeviationKind::Weakness
            };
            Some(DeviationInsight {
                category: cat.category.clone(),
                category_score: cat.score,
                deviation,
                kind,
            })
        })
        .collect()
}

/// Narrative, ideal user profile and recommendations for a score.
///
/// Deterministic for a given score and category list. With no category data
/// the narrative is exactly the bucket's base text.
pub fn interpret(score: f64, category_scores: &[CategoryScore]) -> Interpretation {
    let level = bucket_level(score);
    let text = level.and_then(bucket_text).unwrap_or(&UNDETERMINED);

    let mut narrative = match level {
        Some(_) => format!(
            "Your product scores a {score} on the Friction Index. {}",
            text.summary
        ),
        None => text.summary.to_string(),
    };
    let mut recommendations = recommendations_from(text);

    let insights = if level.is_some() {
        deviation_insights(score, category_scores)
    } else {
        Vec::new()
    };

    for insight in &insights {
        narrative.push(' ');
        narrative.push_str(&insight.sentence());

        let category = &insight.category;
        match insight.kind {
            DeviationKind::Strength => {
                recommendations.marketing.key_areas.push(format!(
                    "{category} is the steepest part of the experience; explain it in plain terms before users reach it."
                ));
                recommendations.onboarding.principles.push(format!(
                    "Add extra guidance and safeguards around {category}, where users meet the most friction."
                ));
                recommendations.growth_tactics.push(format!(
                    "Reach users already fluent in {category} first, then widen the funnel as that area gets simpler."
                ));
            }
            DeviationKind::Weakness => {
                recommendations.marketing.key_areas.push(format!(
                    "Lead with {category} in messaging; it is the most approachable part of the product."
                ));
                recommendations.onboarding.principles.push(format!(
                    "Use {category} as the entry point for new users before introducing harder areas."
                ));
            }
        }
    }

    Interpretation {
        score,
        score_range: band_for_level(level).map(|band| band.range.to_string()),
        level,
        narrative,
        profile: profile_from(text),
        recommendations,
        insights,
    }
}

/// Band backing an interpretation level, if any.
pub fn band_for_level(level: Option<u8>) -> Option<&'static Band> {
    level.and_then(Band::for_level)
}

fn profile_from(text: &BucketText) -> IdealUserProfile {
    IdealUserProfile {
        experience_level: text.profile.experience_level.to_string(),
        knowledge_base: text.profile.knowledge_base.to_string(),
        behavior: text.profile.behavior.to_string(),
        expectations: text.profile.expectations.to_string(),
    }
}

fn recommendations_from(text: &BucketText) -> Recommendations {
    let owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();
    Recommendations {
        marketing: MarketingPlan {
            main: text.marketing.main.to_string(),
            key_areas: owned(text.marketing.key_areas),
            content_guide: owned(text.marketing.content_guide),
        },
        onboarding: OnboardingPlan {
            main: text.onboarding.main.to_string(),
            principles: owned(text.onboarding.principles),
        },
        growth_tactics: owned(text.growth_tactics),
    }
}
