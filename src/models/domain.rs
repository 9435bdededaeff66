use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Size of the adopter's home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LivingSpace {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyPreference {
    Calm,
    Moderate,
    Active,
}

/// How much experience the adopter has with cats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    First,
    #[serde(rename = "some")]
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyBudget {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialSituation {
    #[serde(rename = "none")]
    Standard,
    Pregnancy,
    Elderly,
    Disability,
}

impl SpecialSituation {
    /// Elderly and disabled adopters carry extra caregiver burden
    pub fn limits_caregiving(self) -> bool {
        matches!(self, SpecialSituation::Elderly | SpecialSituation::Disability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoisePreference {
    Silent,
    Normal,
    NoMatter,
}

/// Lifestyle questionnaire answers collected by the adoption wizard
///
/// Every field is required on the wire, so incomplete answers are rejected
/// at deserialization time and never reach the matching engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleAnswers {
    pub hours_away: u8,
    pub has_children: bool,
    pub has_other_cats: bool,
    pub has_other_dogs: bool,
    pub living_space: LivingSpace,
    pub energy_preference: EnergyPreference,
    pub experience_level: ExperienceLevel,
    pub monthly_budget: MonthlyBudget,
    pub special_situation: SpecialSituation,
    pub noise_preference: NoisePreference,
}

impl Default for LifestyleAnswers {
    fn default() -> Self {
        Self {
            hours_away: 4,
            has_children: false,
            has_other_cats: false,
            has_other_dogs: false,
            living_space: LivingSpace::Medium,
            energy_preference: EnergyPreference::Moderate,
            experience_level: ExperienceLevel::Intermediate,
            monthly_budget: MonthlyBudget::Medium,
            special_situation: SpecialSituation::Standard,
            noise_preference: NoisePreference::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Playful,
    Calm,
    Shy,
    Independent,
    Affectionate,
    Curious,
}

/// Household categories a cat is known to get along with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Cats,
    Dogs,
    Children,
    Elderly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Treatment,
    Chronic,
    Recovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatStatus {
    Sheltered,
    Adoption,
    Foster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Cat profile as published by the shelter catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub breed: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(default)]
    pub personality: Vec<Personality>,
    #[serde(default)]
    pub compatibility: Vec<Compatibility>,
    #[serde(default)]
    pub health_status: HealthStatus,
    pub status: CatStatus,
    #[serde(default)]
    pub shelter_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub heart_adoption: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CatProfile {
    pub fn has_trait(&self, trait_: Personality) -> bool {
        self.personality.contains(&trait_)
    }

    pub fn gets_along_with(&self, category: Compatibility) -> bool {
        self.compatibility.contains(&category)
    }

    /// Playful or curious cats want space and stimulation
    pub fn is_energetic(&self) -> bool {
        self.has_trait(Personality::Playful) || self.has_trait(Personality::Curious)
    }

    /// Calm without a playful streak
    pub fn is_calm_natured(&self) -> bool {
        self.has_trait(Personality::Calm) && !self.has_trait(Personality::Playful)
    }

    /// Affectionate or playful cats that are not independent
    pub fn needs_company(&self) -> bool {
        (self.has_trait(Personality::Affectionate) || self.has_trait(Personality::Playful))
            && !self.has_trait(Personality::Independent)
    }

    pub fn needs_intensive_care(&self) -> bool {
        matches!(self.health_status, HealthStatus::Treatment | HealthStatus::Chronic)
    }
}

/// Signed, localization-keyed explanation attached to a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub key: String,
    pub positive: bool,
    pub delta: i32,
}

/// Scored candidate returned by the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub cat: CatProfile,
    pub score: u8,
    pub reasons: Vec<Reason>,
}

/// Per-category multipliers applied to rule weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    pub household: f64,
    pub care: f64,
    pub lifestyle: f64,
    pub comfort: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            household: 1.0,
            care: 1.0,
            lifestyle: 1.0,
            comfort: 1.0,
        }
    }
}

/// Result visibility tier of the requesting user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

/// Ranked results after tier truncation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieredResults {
    pub matches: Vec<MatchResult>,
    pub total_results: usize,
    pub hidden_count: usize,
}

/// Lifestyle answers saved by a user for passive match alerts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProfile {
    pub id: Uuid,
    pub user_id: String,
    pub answers: LifestyleAnswers,
    pub last_seen_cat_ids: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A cat that entered a saved profile's results since the last sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub cat_id: String,
    pub cat_name: String,
    pub score: u8,
}

/// Persisted "new match" notification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAlert {
    pub id: Uuid,
    pub user_id: String,
    pub profile_id: Uuid,
    pub cat_id: String,
    pub cat_name: String,
    pub score: i16,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
