// Core algorithm exports
pub mod alerts;
pub mod filters;
pub mod matcher;
pub mod rules;
pub mod scoring;

pub use alerts::{detect_new_matches, seen_cat_ids};
pub use filters::{eligible_candidates, is_eligible, truncate_for_tier};
pub use matcher::{match_all_cats, Matcher};
pub use rules::{Rule, RuleCategory, RULES};
pub use scoring::{calculate_cat_score, score_cat, CatScore};
