use crate::models::{CatProfile, CategoryWeights, LifestyleAnswers, Reason};
use crate::core::rules::{RuleCategory, BASELINE_SCORE, MAX_SCORE, MIN_SCORE, RULES};

/// Score and explanation for a single candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatScore {
    pub score: u8,
    pub reasons: Vec<Reason>,
}

/// Calculate a compatibility score (0-100) for one cat
///
/// Starts from [`BASELINE_SCORE`], walks the rule table in order and adds the
/// (category-scaled) weight of every rule that fires. Each fired rule yields
/// a reason whose sign matches its delta. Reasons are ordered by category
/// priority, keeping table order within a category.
pub fn calculate_cat_score(
    answers: &LifestyleAnswers,
    cat: &CatProfile,
    weights: &CategoryWeights,
) -> CatScore {
    let mut total = BASELINE_SCORE;
    let mut fired: Vec<(RuleCategory, Reason)> = Vec::new();

    for rule in RULES {
        if !(rule.applies)(answers, cat) {
            continue;
        }

        let delta = rule.scaled_weight(weights);
        if delta == 0 {
            continue;
        }

        total = total.saturating_add(delta);
        fired.push((
            rule.category,
            Reason {
                key: rule.key.to_string(),
                positive: delta > 0,
                delta,
            },
        ));
    }

    // Stable: equal categories keep table order
    fired.sort_by_key(|(category, _)| *category);

    CatScore {
        score: total.clamp(MIN_SCORE, MAX_SCORE) as u8,
        reasons: fired.into_iter().map(|(_, reason)| reason).collect(),
    }
}

/// Score one cat with the default category weights
pub fn score_cat(answers: &LifestyleAnswers, cat: &CatProfile) -> CatScore {
    calculate_cat_score(answers, cat, &CategoryWeights::default())
}
