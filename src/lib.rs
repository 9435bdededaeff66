//! Cat Match - lifestyle-compatibility matching service for the cat adoption app
//!
//! The core is a pure, deterministic rule engine that scores every candidate
//! cat against an adopter's lifestyle answers and ranks the results with
//! localization-keyed reasons. Around it sit the catalog client, tier
//! truncation, saved profiles and the "new match" alert sweep.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{match_all_cats, score_cat, Matcher};
pub use models::{CatProfile, CategoryWeights, LifestyleAnswers, MatchResult, Reason};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let results = match_all_cats(&LifestyleAnswers::default(), &[]);
        assert!(results.is_empty());
    }
}
