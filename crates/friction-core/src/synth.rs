//! Plausible-looking answers for a target score.
//!
//! Output is for charts only. It must never be persisted or scored as a
//! real submission.

use rand::Rng;

use crate::catalog::{AnswerSet, Catalog};
use crate::score::{MAX_SCORE, MIN_SCORE};

/// Largest random offset applied to the target per question.
pub const MAX_JITTER: f64 = 1.0;

pub fn synthesize(target: f64, catalog: &Catalog) -> AnswerSet {
    synthesize_with_rng(target, catalog, &mut rand::thread_rng())
}

/// For each question, jitter the target by up to [`MAX_JITTER`], clamp to
/// `[1, 10]` and pick the option with the closest weight. Ties go to the
/// option listed first.
pub fn synthesize_with_rng<R: Rng + ?Sized>(
    target: f64,
    catalog: &Catalog,
    rng: &mut R,
) -> AnswerSet {
    let mut answers = AnswerSet::new();

    for (idx, question) in catalog.questions().iter().enumerate() {
        let jitter = rng.gen_range(-MAX_JITTER..=MAX_JITTER);
        let wanted = (target + jitter).clamp(MIN_SCORE, MAX_SCORE);

        let mut best: Option<(&str, f64)> = None;
        for opt in &question.options {
            let distance = (opt.weight - wanted).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((opt.label.as_str(), distance)),
            }
        }

        if let Some((label, _)) = best {
            answers.insert(idx, label);
        }
    }

    answers
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::{AnswerOption, Question};
    use crate::score::{calculate_category_scores, calculate_score};

    fn opt(label: &str, weight: f64) -> AnswerOption {
        AnswerOption {
            label: label.to_string(),
            text: String::new(),
            weight,
        }
    }

    #[test]
    fn answers_every_question_with_a_real_label() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let answers = synthesize_with_rng(6.5, catalog, &mut rng);
        assert!(answers.is_complete(catalog));
        for (idx, label) in answers.iter() {
            assert!(catalog.option(idx, label).is_some());
        }
    }

    #[test]
    fn synthesized_score_stays_near_target() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(42);
        for target in [1.0, 3.5, 5.5, 8.5, 10.0] {
            let answers = synthesize_with_rng(target, catalog, &mut rng);
            let score = calculate_score(&answers, catalog);
            assert!((score - target).abs() <= 3.0, "target {target} got {score}");
        }
    }

    #[test]
    fn category_scores_cluster_around_target() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(75);
        let mut total = 0usize;
        let mut in_band = 0usize;
        for _ in 0..500 {
            let answers = synthesize_with_rng(7.5, catalog, &mut rng);
            for cat in calculate_category_scores(&answers, catalog) {
                total += 1;
                if (6.5..=8.5).contains(&cat.score) {
                    in_band += 1;
                }
            }
        }
        assert_eq!(total, 500 * 9);
        assert!(in_band * 10 >= total * 9, "{in_band}/{total} within [6.5, 8.5]");
    }

    #[test]
    fn handles_empty_and_single_question_catalogs() {
        let mut rng = StdRng::seed_from_u64(11);
        let empty = Catalog::new(Vec::new()).unwrap();
        assert!(synthesize_with_rng(7.5, &empty, &mut rng).is_empty());

        let single = Catalog::new(vec![Question {
            id: 0,
            category: "Alpha".to_string(),
            text: "only".to_string(),
            options: vec![opt("a", 2.0), opt("b", 7.5), opt("c", 10.0)],
        }])
        .unwrap();
        let answers = synthesize_with_rng(7.5, &single, &mut rng);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(0), Some("b"));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let catalog = Catalog::standard();
        let a = synthesize_with_rng(4.0, catalog, &mut StdRng::seed_from_u64(1));
        let b = synthesize_with_rng(4.0, catalog, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn ties_go_to_first_option() {
        let catalog = Catalog::new(vec![Question {
            id: 0,
            category: "Alpha".to_string(),
            text: "tie".to_string(),
            options: vec![opt("low", 4.0), opt("high", 6.0)],
        }])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let answers = synthesize_with_rng(1.0, &catalog, &mut rng);
        assert_eq!(answers.get(0), Some("low"));

        let same = Catalog::new(vec![Question {
            id: 0,
            category: "Alpha".to_string(),
            text: "tie".to_string(),
            options: vec![opt("first", 5.0), opt("second", 5.0)],
        }])
        .unwrap();
        let answers = synthesize_with_rng(9.0, &same, &mut rng);
        assert_eq!(answers.get(0), Some("first"));
    }
}
