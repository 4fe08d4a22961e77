use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::interpret::{IdealUserProfile, Interpretation, Recommendations};
use crate::peers::{similar_products, SimilarProduct};
use crate::range::score_to_range_string;

pub const REPORT_TITLE: &str = "Product-User Fit Analysis Report";

/// Exportable results document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub score: f64,
    pub score_range: String,
    pub interpretation: String,
    pub ideal_user_profile: IdealUserProfile,
    pub recommendations: Recommendations,
    pub similar_products: Vec<SimilarProduct>,
}

impl Report {
    pub fn from_interpretation(interpretation: &Interpretation) -> Self {
        let score = interpretation.score;
        Self {
            score,
            score_range: interpretation
                .score_range
                .clone()
                .unwrap_or_else(|| score_to_range_string(score)),
            interpretation: interpretation.narrative.clone(),
            ideal_user_profile: interpretation.profile.clone(),
            recommendations: interpretation.recommendations.clone(),
            similar_products: similar_products(score),
        }
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Flat sectioned CSV. Similar products are left out.
    pub fn to_csv(&self, generated_on: &str) -> String {
        let profile = &self.ideal_user_profile;
        let marketing = &self.recommendations.marketing;
        let onboarding = &self.recommendations.onboarding;

        let mut rows: Vec<String> = vec![
            REPORT_TITLE.to_string(),
            format!("Generated on: {generated_on}"),
            String::new(),
            "SCORE INFORMATION".to_string(),
            format!("Score Range,{}", self.score_range),
            format!("Numeric Score,{}", self.score),
            String::new(),
            "INTERPRETATION".to_string(),
            quote(&self.interpretation),
            String::new(),
            "IDEAL USER PROFILE".to_string(),
            format!("Experience Level,{}", quote(&profile.experience_level)),
            format!("Knowledge Base,{}", quote(&profile.knowledge_base)),
            format!("Behavior,{}", quote(&profile.behavior)),
            format!("Expectations,{}", quote(&profile.expectations)),
            String::new(),
            "MARKETING STRATEGY".to_string(),
            format!("Main Strategy,{}", quote(&marketing.main)),
            String::new(),
            "Key Focus Areas".to_string(),
        ];
        numbered(&mut rows, "Area", &marketing.key_areas);
        rows.push(String::new());
        rows.push("Content Strategy".to_string());
        numbered(&mut rows, "Strategy", &marketing.content_guide);
        rows.push(String::new());

        rows.push("ONBOARDING PRINCIPLES".to_string());
        rows.push(format!("Main Principle,{}", quote(&onboarding.main)));
        rows.push(String::new());
        rows.push("Core Principles".to_string());
        numbered(&mut rows, "Principle", &onboarding.principles);
        rows.push(String::new());

        rows.push("GROWTH TACTICS".to_string());
        numbered(&mut rows, "Tactic", &self.recommendations.growth_tactics);

        rows.join("\n")
    }

    /// Download name without extension, e.g. `product-user-fit-analysis-3-0-3.9`.
    pub fn file_stem(&self) -> String {
        format!(
            "product-user-fit-analysis-{}",
            self.score_range.replacen('.', "-", 1)
        )
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn numbered(rows: &mut Vec<String>, prefix: &str, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        rows.push(format!("{prefix} {},{}", i + 1, quote(item)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::interpret;
    use crate::score::CategoryScore;

    #[test]
    fn csv_keeps_section_layout() {
        let report = Report::from_interpretation(&interpret(3.5, &[]));
        let csv = report.to_csv("10/19/2026");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.first().copied(), Some(REPORT_TITLE));
        assert_eq!(lines.get(1).copied(), Some("Generated on: 10/19/2026"));
        assert!(lines.contains(&"Score Range,3.0-3.9"));
        assert!(lines.contains(&"Numeric Score,3.5"));

        let order = [
            "SCORE INFORMATION",
            "INTERPRETATION",
            "IDEAL USER PROFILE",
            "MARKETING STRATEGY",
            "ONBOARDING PRINCIPLES",
            "GROWTH TACTICS",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|heading| lines.iter().position(|l| l == heading).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let tactics = report.recommendations.growth_tactics.len();
        assert!(lines.last().unwrap().starts_with(&format!("Tactic {tactics},\"")));
        assert!(!csv.contains("logo.clearbit.com"));
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        assert_eq!(quote(r#"say "hi""#), r#""say ""hi""""#);
    }

    #[test]
    fn deviation_bullets_are_numbered_in_csv() {
        let interpretation = interpret(
            4.0,
            &[CategoryScore {
                category: "Wallet Knowledge".to_string(),
                score: 9.0,
                question_count: 2,
            }],
        );
        let report = Report::from_interpretation(&interpretation);
        let areas = report.recommendations.marketing.key_areas.len();
        let csv = report.to_csv("today");
        let expected = format!("Area {areas},\"Wallet Knowledge is the steepest");
        assert!(csv.contains(&expected));
    }

    #[test]
    fn json_export_carries_similar_products() {
        let report = Report::from_interpretation(&interpret(7.5, &[]));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["scoreRange"], "7.0-7.9");
        assert!(value["idealUserProfile"]["experienceLevel"].is_string());
        assert!(value["recommendations"]["marketing"]["keyAreas"].is_array());
        assert!(!value["similarProducts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn file_stem_replaces_first_dot_only() {
        let report = Report::from_interpretation(&interpret(3.5, &[]));
        assert_eq!(report.file_stem(), "product-user-fit-analysis-3-0-3.9");
    }

    #[test]
    fn export_range_matches_interpreted_bucket() {
        let report = Report::from_interpretation(&interpret(4.96, &[]));
        assert_eq!(report.score_range, "4.0-4.9");
        assert_eq!(report.file_stem(), "product-user-fit-analysis-4-0-4.9");
    }
}
