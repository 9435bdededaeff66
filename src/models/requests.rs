use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{CatProfile, LifestyleAnswers, Tier};

/// Longest daily absence the questionnaire offers
pub const MAX_HOURS_AWAY: u8 = 12;

/// Answers must stay inside the questionnaire's domain before ranking
pub fn validate_answers(answers: &LifestyleAnswers) -> Result<(), ValidationError> {
    if answers.hours_away > MAX_HOURS_AWAY {
        let mut error = ValidationError::new("hours_away_range");
        error.message = Some(format!("hoursAway must be between 0 and {}", MAX_HOURS_AWAY).into());
        return Err(error);
    }
    Ok(())
}

/// Score an explicit candidate set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMatchesRequest {
    #[validate(custom(function = "validate_answers"))]
    pub answers: LifestyleAnswers,
    #[serde(default)]
    pub cats: Vec<CatProfile>,
}

/// Rank the adoptable catalog for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesRequest {
    #[validate(custom(function = "validate_answers"))]
    pub answers: LifestyleAnswers,
    #[serde(default)]
    pub tier: Tier,
}

/// Save answers for passive "new match" alerts
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[validate(custom(function = "validate_answers"))]
    pub answers: LifestyleAnswers,
}

/// Query parameters for listing alerts
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlertsQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[serde(default)]
    pub unread_only: bool,
}

/// Query parameters addressing a single user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id")]
    pub user_id: String,
}
