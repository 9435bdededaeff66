use std::collections::HashSet;
use crate::models::{MatchResult, NewMatch};

/// Find cats in a fresh ranking that the saved profile has not seen yet
///
/// `results` must already be ranked; new matches come back in ranked order.
/// Cats scoring below `min_score` are not worth an alert.
pub fn detect_new_matches(
    last_seen_cat_ids: &[String],
    results: &[MatchResult],
    min_score: u8,
) -> Vec<NewMatch> {
    let seen: HashSet<&str> = last_seen_cat_ids.iter().map(String::as_str).collect();

    results
        .iter()
        .filter(|result| result.score >= min_score)
        .filter(|result| !seen.contains(result.cat.id.as_str()))
        .map(|result| NewMatch {
            cat_id: result.cat.id.clone(),
            cat_name: result.cat.name.clone(),
            score: result.score,
        })
        .collect()
}

/// Cat ids to remember as the profile's last-seen set
pub fn seen_cat_ids(results: &[MatchResult]) -> Vec<String> {
    results.iter().map(|result| result.cat.id.clone()).collect()
}
