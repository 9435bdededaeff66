use crate::models::{CatProfile, CatStatus, MatchResult, Tier, TieredResults};

/// Check if a cat can be offered to adopters
///
/// Only cats published for adoption are candidates; sheltered and fostered
/// cats stay in the catalog but are never ranked.
#[inline]
pub fn is_eligible(cat: &CatProfile) -> bool {
    cat.status == CatStatus::Adoption
}

/// Keep the eligible cats, preserving catalog order
pub fn eligible_candidates(cats: Vec<CatProfile>) -> Vec<CatProfile> {
    cats.into_iter().filter(is_eligible).collect()
}

/// Apply tier-based visibility to an already ranked list
///
/// Truncation always happens after ranking, so `total_results` reports every
/// ranked cat and `hidden_count` tells the caller how many sit behind the
/// paywall.
pub fn truncate_for_tier(
    mut results: Vec<MatchResult>,
    tier: Tier,
    free_limit: usize,
) -> TieredResults {
    let total_results = results.len();

    if tier == Tier::Free {
        results.truncate(free_limit);
    }

    let hidden_count = total_results - results.len();

    TieredResults {
        matches: results,
        total_results,
        hidden_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, HealthStatus};

    fn create_test_cat(id: &str, status: CatStatus) -> CatProfile {
        CatProfile {
            id: id.to_string(),
            name: "Test Cat".to_string(),
            breed: "Siamese".to_string(),
            age: 2,
            gender: Gender::Female,
            personality: vec![],
            compatibility: vec![],
            health_status: HealthStatus::Healthy,
            status,
            shelter_id: None,
            description: None,
            image_url: None,
            heart_adoption: false,
            created_at: None,
        }
    }

    fn ranked(count: usize) -> Vec<MatchResult> {
        (0..count)
            .map(|i| MatchResult {
                cat: create_test_cat(&i.to_string(), CatStatus::Adoption),
                score: (90 - i) as u8,
                reasons: vec![],
            })
            .collect()
    }

    #[test]
    fn test_eligibility() {
        assert!(is_eligible(&create_test_cat("a", CatStatus::Adoption)));
        assert!(!is_eligible(&create_test_cat("b", CatStatus::Sheltered)));
        assert!(!is_eligible(&create_test_cat("c", CatStatus::Foster)));
    }

    #[test]
    fn test_eligible_candidates_preserve_order() {
        let cats = vec![
            create_test_cat("1", CatStatus::Adoption),
            create_test_cat("2", CatStatus::Foster),
            create_test_cat("3", CatStatus::Adoption),
        ];

        let ids: Vec<String> = eligible_candidates(cats).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_free_tier_truncated() {
        let tiered = truncate_for_tier(ranked(8), Tier::Free, 3);

        assert_eq!(tiered.matches.len(), 3);
        assert_eq!(tiered.total_results, 8);
        assert_eq!(tiered.hidden_count, 5);
        assert_eq!(tiered.matches[0].cat.id, "0");
    }

    #[test]
    fn test_premium_sees_everything() {
        let tiered = truncate_for_tier(ranked(8), Tier::Premium, 3);

        assert_eq!(tiered.matches.len(), 8);
        assert_eq!(tiered.hidden_count, 0);
    }

    #[test]
    fn test_free_tier_under_limit() {
        let tiered = truncate_for_tier(ranked(2), Tier::Free, 3);

        assert_eq!(tiered.matches.len(), 2);
        assert_eq!(tiered.hidden_count, 0);
    }
}
