use crate::models::{CatProfile, CategoryWeights, LifestyleAnswers, MatchResult};
use crate::core::scoring::{calculate_cat_score, CatScore};

/// Lifestyle-compatibility matcher
///
/// Holds nothing but the category weights, so it is cheap to clone and safe
/// to share between request handlers and the alert sweep. Every call is
/// independent: no state survives between runs.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: CategoryWeights,
}

impl Matcher {
    pub fn new(weights: CategoryWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: CategoryWeights::default(),
        }
    }

    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Score a single cat against the adopter's answers
    pub fn score_cat(&self, answers: &LifestyleAnswers, cat: &CatProfile) -> CatScore {
        calculate_cat_score(answers, cat, &self.weights)
    }

    /// Score and rank every candidate
    ///
    /// Returns exactly one result per input cat, sorted by descending score.
    /// Cats with equal scores keep their relative order from `cats`.
    pub fn match_all_cats(
        &self,
        answers: &LifestyleAnswers,
        cats: &[CatProfile],
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = cats
            .iter()
            .map(|cat| {
                let CatScore { score, reasons } = self.score_cat(answers, cat);
                MatchResult {
                    cat: cat.clone(),
                    score,
                    reasons,
                }
            })
            .collect();

        // slice::sort_by is stable
        results.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::trace!("Ranked {} candidate cats", results.len());

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank candidates with the default category weights
pub fn match_all_cats(answers: &LifestyleAnswers, cats: &[CatProfile]) -> Vec<MatchResult> {
    Matcher::with_default_weights().match_all_cats(answers, cats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatStatus, Compatibility, Gender, HealthStatus, Personality};

    fn create_candidate(
        id: &str,
        personality: Vec<Personality>,
        compatibility: Vec<Compatibility>,
    ) -> CatProfile {
        CatProfile {
            id: id.to_string(),
            name: format!("Cat {}", id),
            breed: "Maine Coon".to_string(),
            age: 3,
            gender: Gender::Male,
            personality,
            compatibility,
            health_status: HealthStatus::Healthy,
            status: CatStatus::Adoption,
            shelter_id: Some("shelter_1".to_string()),
            description: None,
            image_url: None,
            heart_adoption: false,
            created_at: None,
        }
    }

    #[test]
    fn test_match_all_cats_basic() {
        let matcher = Matcher::with_default_weights();
        let answers = LifestyleAnswers {
            has_children: true,
            ..LifestyleAnswers::default()
        };

        let candidates = vec![
            create_candidate("1", vec![], vec![]),
            create_candidate("2", vec![], vec![Compatibility::Children]),
        ];

        let results = matcher.match_all_cats(&answers, &candidates);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].cat.id, "2");
        assert_eq!(results[1].cat.id, "1");
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let answers = LifestyleAnswers::default();

        let candidates: Vec<CatProfile> = (0..20)
            .map(|i| create_candidate(&i.to_string(), vec![Personality::Calm], vec![]))
            .collect();

        let results = matcher.match_all_cats(&answers, &candidates);
        let ids: Vec<&str> = results.iter().map(|r| r.cat.id.as_str()).collect();
        let expected: Vec<String> = (0..20).map(|i| i.to_string()).collect();

        assert_eq!(ids, expected);
    }

    #[test]
    fn test_empty_candidates() {
        let results = match_all_cats(&LifestyleAnswers::default(), &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let answers = LifestyleAnswers {
            hours_away: 10,
            has_other_cats: true,
            ..LifestyleAnswers::default()
        };
        let candidates = vec![
            create_candidate("lonely", vec![Personality::Affectionate], vec![]),
            create_candidate("solo", vec![Personality::Independent], vec![Compatibility::Cats]),
            create_candidate("plain", vec![], vec![Compatibility::Cats]),
        ];

        let results = match_all_cats(&answers, &candidates);
        let ids: Vec<&str> = results.iter().map(|r| r.cat.id.as_str()).collect();

        assert_eq!(ids, vec!["solo", "plain", "lonely"]);
    }
}
