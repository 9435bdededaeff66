use crate::models::{
    CatProfile, CategoryWeights, Compatibility, EnergyPreference, ExperienceLevel, HealthStatus,
    LifestyleAnswers, LivingSpace, MonthlyBudget, NoisePreference, Personality,
    SpecialSituation,
};

/// Rule family, in the order reasons are surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleCategory {
    /// Children and other pets in the home
    Household,
    /// Health care, experience, budget and special situations
    Care,
    /// Absence, energy and noise
    Lifestyle,
    /// Housing and other soft modifiers
    Comfort,
}

/// Smallest multiplier a category can run with; no category can be switched off
pub const MIN_CATEGORY_WEIGHT: f64 = 0.1;
/// Largest multiplier a category can run with
pub const MAX_CATEGORY_WEIGHT: f64 = 10.0;

impl RuleCategory {
    /// Configured multiplier, held between `MIN_CATEGORY_WEIGHT` and
    /// `MAX_CATEGORY_WEIGHT`; NaN falls back to 1.0
    pub fn multiplier(self, weights: &CategoryWeights) -> f64 {
        let value = match self {
            RuleCategory::Household => weights.household,
            RuleCategory::Care => weights.care,
            RuleCategory::Lifestyle => weights.lifestyle,
            RuleCategory::Comfort => weights.comfort,
        };

        if value.is_nan() {
            return 1.0;
        }
        value.clamp(MIN_CATEGORY_WEIGHT, MAX_CATEGORY_WEIGHT)
    }
}

/// One compatibility rule: when `applies` fires, `weight` points are added
/// and a reason keyed by `key` is emitted
#[derive(Clone, Copy)]
pub struct Rule {
    pub key: &'static str,
    pub category: RuleCategory,
    pub weight: i32,
    pub applies: fn(&LifestyleAnswers, &CatProfile) -> bool,
}

impl Rule {
    /// Weight after the category multiplier, rounded to whole points
    pub fn scaled_weight(&self, weights: &CategoryWeights) -> i32 {
        (self.weight as f64 * self.category.multiplier(weights)).round() as i32
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("key", &self.key)
            .field("category", &self.category)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Neutral starting score every candidate is adjusted from
pub const BASELINE_SCORE: i32 = 60;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Absences at or above this many hours count as long
const LONG_ABSENCE_HOURS: u8 = 8;
/// Absences at or above this many hours start to matter
const MEDIUM_ABSENCE_HOURS: u8 = 5;
/// Absences at or below this many hours count as short
const SHORT_ABSENCE_HOURS: u8 = 4;

const YOUNG_CAT_MAX_AGE: u8 = 2;
const SENIOR_CAT_MIN_AGE: u8 = 10;

/// The rule table, evaluated top to bottom
pub static RULES: &[Rule] = &[
    // Household
    Rule {
        key: "reason.children.unsuited",
        category: RuleCategory::Household,
        weight: -25,
        applies: |a, c| a.has_children && !c.gets_along_with(Compatibility::Children),
    },
    Rule {
        key: "reason.children.friendly",
        category: RuleCategory::Household,
        weight: 8,
        applies: |a, c| a.has_children && c.gets_along_with(Compatibility::Children),
    },
    Rule {
        key: "reason.cats.unsuited",
        category: RuleCategory::Household,
        weight: -20,
        applies: |a, c| a.has_other_cats && !c.gets_along_with(Compatibility::Cats),
    },
    Rule {
        key: "reason.cats.friendly",
        category: RuleCategory::Household,
        weight: 6,
        applies: |a, c| a.has_other_cats && c.gets_along_with(Compatibility::Cats),
    },
    Rule {
        key: "reason.dogs.unsuited",
        category: RuleCategory::Household,
        weight: -20,
        applies: |a, c| a.has_other_dogs && !c.gets_along_with(Compatibility::Dogs),
    },
    Rule {
        key: "reason.dogs.friendly",
        category: RuleCategory::Household,
        weight: 6,
        applies: |a, c| a.has_other_dogs && c.gets_along_with(Compatibility::Dogs),
    },
    // Care
    Rule {
        key: "reason.care.needs_experience",
        category: RuleCategory::Care,
        weight: -20,
        applies: |a, c| {
            c.needs_intensive_care() && a.experience_level < ExperienceLevel::Intermediate
        },
    },
    Rule {
        key: "reason.care.expert_home",
        category: RuleCategory::Care,
        weight: 10,
        applies: |a, c| c.needs_intensive_care() && a.experience_level == ExperienceLevel::Expert,
    },
    Rule {
        key: "reason.budget.care_costs",
        category: RuleCategory::Care,
        weight: -10,
        applies: |a, c| c.needs_intensive_care() && a.monthly_budget == MonthlyBudget::Low,
    },
    Rule {
        key: "reason.budget.covers_care",
        category: RuleCategory::Care,
        weight: 4,
        applies: |a, c| c.needs_intensive_care() && a.monthly_budget == MonthlyBudget::High,
    },
    Rule {
        key: "reason.shy.needs_patience",
        category: RuleCategory::Care,
        weight: -5,
        applies: |a, c| {
            c.has_trait(Personality::Shy) && a.experience_level == ExperienceLevel::First
        },
    },
    Rule {
        key: "reason.shy.experienced_home",
        category: RuleCategory::Care,
        weight: 4,
        applies: |a, c| {
            c.has_trait(Personality::Shy) && a.experience_level == ExperienceLevel::Expert
        },
    },
    Rule {
        key: "reason.special.calm_companion",
        category: RuleCategory::Care,
        weight: 8,
        applies: |a, c| a.special_situation.limits_caregiving() && c.has_trait(Personality::Calm),
    },
    Rule {
        key: "reason.special.low_maintenance",
        category: RuleCategory::Care,
        weight: 4,
        applies: |a, c| {
            a.special_situation.limits_caregiving()
                && c.health_status == HealthStatus::Healthy
        },
    },
    Rule {
        key: "reason.special.high_energy",
        category: RuleCategory::Care,
        weight: -12,
        applies: |a, c| {
            a.special_situation.limits_caregiving()
                && c.is_energetic()
                && !c.has_trait(Personality::Calm)
        },
    },
    Rule {
        key: "reason.special.care_burden",
        category: RuleCategory::Care,
        weight: -25,
        applies: |a, c| a.special_situation.limits_caregiving() && c.needs_intensive_care(),
    },
    Rule {
        key: "reason.elderly.friendly",
        category: RuleCategory::Care,
        weight: 6,
        applies: |a, c| {
            a.special_situation == SpecialSituation::Elderly
                && c.gets_along_with(Compatibility::Elderly)
        },
    },
    Rule {
        key: "reason.elderly.unsuited",
        category: RuleCategory::Care,
        weight: -8,
        applies: |a, c| {
            a.special_situation == SpecialSituation::Elderly
                && !c.gets_along_with(Compatibility::Elderly)
        },
    },
    Rule {
        key: "reason.pregnancy.calm",
        category: RuleCategory::Care,
        weight: 5,
        applies: |a, c| {
            a.special_situation == SpecialSituation::Pregnancy && c.has_trait(Personality::Calm)
        },
    },
    Rule {
        key: "reason.pregnancy.energetic",
        category: RuleCategory::Care,
        weight: -6,
        applies: |a, c| {
            a.special_situation == SpecialSituation::Pregnancy
                && c.is_energetic()
                && !c.has_trait(Personality::Calm)
        },
    },
    // Lifestyle
    Rule {
        key: "reason.absence.lonely",
        category: RuleCategory::Lifestyle,
        weight: -15,
        applies: |a, c| a.hours_away >= LONG_ABSENCE_HOURS && c.needs_company(),
    },
    Rule {
        key: "reason.absence.some_loneliness",
        category: RuleCategory::Lifestyle,
        weight: -7,
        applies: |a, c| {
            (MEDIUM_ABSENCE_HOURS..LONG_ABSENCE_HOURS).contains(&a.hours_away) && c.needs_company()
        },
    },
    Rule {
        key: "reason.absence.independent",
        category: RuleCategory::Lifestyle,
        weight: 10,
        applies: |a, c| {
            a.hours_away >= MEDIUM_ABSENCE_HOURS && c.has_trait(Personality::Independent)
        },
    },
    Rule {
        key: "reason.absence.company",
        category: RuleCategory::Lifestyle,
        weight: 6,
        applies: |a, c| {
            a.hours_away <= SHORT_ABSENCE_HOURS && c.has_trait(Personality::Affectionate)
        },
    },
    Rule {
        key: "reason.absence.kitten_alone",
        category: RuleCategory::Lifestyle,
        weight: -6,
        applies: |a, c| a.hours_away >= LONG_ABSENCE_HOURS && c.age == 0,
    },
    Rule {
        key: "reason.energy.active_match",
        category: RuleCategory::Lifestyle,
        weight: 10,
        applies: |a, c| a.energy_preference == EnergyPreference::Active && c.is_energetic(),
    },
    Rule {
        key: "reason.energy.too_calm",
        category: RuleCategory::Lifestyle,
        weight: -10,
        applies: |a, c| {
            a.energy_preference == EnergyPreference::Active
                && c.is_calm_natured()
                && !c.is_energetic()
        },
    },
    Rule {
        key: "reason.energy.calm_match",
        category: RuleCategory::Lifestyle,
        weight: 10,
        applies: |a, c| {
            a.energy_preference == EnergyPreference::Calm && c.has_trait(Personality::Calm)
        },
    },
    Rule {
        key: "reason.energy.too_active",
        category: RuleCategory::Lifestyle,
        weight: -10,
        applies: |a, c| {
            a.energy_preference == EnergyPreference::Calm
                && c.is_energetic()
                && !c.has_trait(Personality::Calm)
        },
    },
    Rule {
        key: "reason.energy.balanced",
        category: RuleCategory::Lifestyle,
        weight: 4,
        applies: |a, c| {
            a.energy_preference == EnergyPreference::Moderate
                && (c.has_trait(Personality::Curious) || c.has_trait(Personality::Affectionate))
        },
    },
    Rule {
        key: "reason.noise.vocal",
        category: RuleCategory::Lifestyle,
        weight: -8,
        applies: |a, c| {
            a.noise_preference == NoisePreference::Silent && c.has_trait(Personality::Playful)
        },
    },
    Rule {
        key: "reason.noise.quiet",
        category: RuleCategory::Lifestyle,
        weight: 6,
        applies: |a, c| {
            a.noise_preference == NoisePreference::Silent
                && (c.has_trait(Personality::Calm) || c.has_trait(Personality::Shy))
        },
    },
    // Comfort
    Rule {
        key: "reason.space.cramped",
        category: RuleCategory::Comfort,
        weight: -5,
        applies: |a, c| {
            a.living_space == LivingSpace::Small && c.is_energetic() && c.age <= YOUNG_CAT_MAX_AGE
        },
    },
    Rule {
        key: "reason.space.roomy",
        category: RuleCategory::Comfort,
        weight: 4,
        applies: |a, c| a.living_space == LivingSpace::Large && c.is_energetic(),
    },
    Rule {
        key: "reason.budget.senior_costs",
        category: RuleCategory::Comfort,
        weight: -4,
        applies: |a, c| a.monthly_budget == MonthlyBudget::Low && c.age >= SENIOR_CAT_MIN_AGE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_keys_are_unique() {
        let keys: HashSet<&str> = RULES.iter().map(|r| r.key).collect();
        assert_eq!(keys.len(), RULES.len());
    }

    #[test]
    fn test_rule_weights_are_nonzero() {
        assert!(RULES.iter().all(|r| r.weight != 0));
    }

    #[test]
    fn test_table_is_grouped_by_category() {
        let categories: Vec<RuleCategory> = RULES.iter().map(|r| r.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn test_household_outweighs_comfort() {
        let worst_comfort = RULES
            .iter()
            .filter(|r| r.category == RuleCategory::Comfort)
            .map(|r| r.weight.abs())
            .max()
            .unwrap();
        let children_penalty = RULES
            .iter()
            .find(|r| r.key == "reason.children.unsuited")
            .unwrap()
            .weight;

        assert!(children_penalty.abs() > worst_comfort);
    }

    #[test]
    fn test_care_burden_outweighs_experience_penalty() {
        let weight_of = |key: &str| RULES.iter().find(|r| r.key == key).unwrap().weight;
        assert!(
            weight_of("reason.special.care_burden") < weight_of("reason.care.needs_experience")
        );
    }

    #[test]
    fn test_multiplier_is_bounded() {
        let weights = CategoryWeights {
            household: 1e12,
            care: -1.0,
            lifestyle: 0.0,
            comfort: f64::NAN,
        };

        assert_eq!(RuleCategory::Household.multiplier(&weights), MAX_CATEGORY_WEIGHT);
        assert_eq!(RuleCategory::Care.multiplier(&weights), MIN_CATEGORY_WEIGHT);
        assert_eq!(RuleCategory::Lifestyle.multiplier(&weights), MIN_CATEGORY_WEIGHT);
        assert_eq!(RuleCategory::Comfort.multiplier(&weights), 1.0);
    }

    #[test]
    fn test_children_penalty_survives_smallest_multiplier() {
        let weights = CategoryWeights {
            household: 0.0,
            ..CategoryWeights::default()
        };
        let rule = RULES
            .iter()
            .find(|r| r.key == "reason.children.unsuited")
            .unwrap();

        assert_eq!(rule.scaled_weight(&weights), -3);
    }

    #[test]
    fn test_scaled_weight_rounds() {
        let weights = CategoryWeights {
            household: 0.5,
            ..CategoryWeights::default()
        };
        let rule = &RULES[0];
        assert_eq!(rule.scaled_weight(&weights), -13);
    }
}
