use serde::{Deserialize, Serialize};

use crate::catalog::{AnswerSet, Catalog};

/// Returned by [`calculate_score`] when no answer resolves.
pub const UNDETERMINED_SCORE: f64 = 0.0;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    /// Raw mean of the category's weights, neither rounded nor clamped.
    pub score: f64,
    pub question_count: usize,
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean weight of the resolvable answers, one decimal, clamped to `[1, 10]`.
///
/// Labels that match no option are skipped entirely. With nothing resolvable
/// the result is [`UNDETERMINED_SCORE`].
pub fn calculate_score(answers: &AnswerSet, catalog: &Catalog) -> f64 {
    let (total, answered) = catalog
        .questions()
        .iter()
        .enumerate()
        .filter_map(|(idx, question)| {
            answers
                .get(idx)
                .and_then(|label| question.option(label))
                .map(|opt| opt.weight)
        })
        .fold((0.0_f64, 0_u32), |(sum, n), weight| (sum + weight, n + 1));

    if answered == 0 {
        return UNDETERMINED_SCORE;
    }

    round_one_decimal(total / f64::from(answered)).clamp(MIN_SCORE, MAX_SCORE)
}

/// Per-category raw means, in ascending question-index order of first answer.
///
/// Unlike [`calculate_score`], an unresolvable label still counts toward its
/// category with weight 0. Answers for indices outside the catalog are ignored.
pub fn calculate_category_scores(answers: &AnswerSet, catalog: &Catalog) -> Vec<CategoryScore> {
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();

    for (idx, label) in answers.iter() {
        let Some(question) = catalog.question(idx) else {
            continue;
        };
        let weight = question.option(label).map_or(0.0, |opt| opt.weight);

        match groups
            .iter_mut()
            .find(|(category, _, _)| *category == question.category)
        {
            Some((_, total, count)) => {
                *total += weight;
                *count += 1;
            }
            None => groups.push((question.category.as_str(), weight, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(category, total, count)| CategoryScore {
            category: category.to_string(),
            score: total / count as f64,
            question_count: count,
        })
        .collect()
}
