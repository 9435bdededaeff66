// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CatProfile, CatStatus, CategoryWeights, Compatibility, EnergyPreference, ExperienceLevel,
    Gender, HealthStatus, LifestyleAnswers, LivingSpace, MatchAlert, MatchResult, MonthlyBudget,
    NewMatch, NoisePreference, Personality, Reason, SavedProfile, SpecialSituation, Tier,
    TieredResults,
};
pub use requests::{
    AlertsQuery, FindMatchesRequest, SaveProfileRequest, ScoreMatchesRequest, UserQuery,
};
pub use responses::{
    AlertsResponse, ErrorResponse, FindMatchesResponse, HealthResponse, ProfilesResponse,
    ScoreMatchesResponse, UpdatedResponse,
};
