use super::domain::ApplicantInput;
use serde::{Deserialize, Serialize};

const YOUTH_AGE_RANGE: std::ops::RangeInclusive<i32> = 19..=39;
const YOUTH_AGE_POINTS: f64 = 20.0;
const DEFAULT_AGE_POINTS: f64 = 10.0;

const HOMELESS_POINTS_PER_MONTH: f64 = 0.5;
const HOMELESS_POINTS_CAP: f64 = 30.0;

const DEPENDENT_POINTS_EACH: f64 = 5.0;
const DEPENDENT_POINTS_CAP: f64 = 20.0;

const ACCOUNT_POINTS_PER_MONTH: f64 = 0.3;
const ACCOUNT_POINTS_CAP: f64 = 20.0;

const LOW_INCOME_CEILING: i32 = 3000;
const LOW_INCOME_POINTS: f64 = 10.0;
const DEFAULT_INCOME_POINTS: f64 = 5.0;

/// Per-category point decomposition for one applicant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointBreakdown {
    pub age_points: f64,
    pub homeless_points: f64,
    pub dependents_points: f64,
    pub subscription_account_points: f64,
    pub income_points: f64,
    pub total_points: f64,
}

impl PointBreakdown {
    /// Highest total reachable under the scoring table.
    pub const MAX_TOTAL: f64 = YOUTH_AGE_POINTS
        + HOMELESS_POINTS_CAP
        + DEPENDENT_POINTS_CAP
        + ACCOUNT_POINTS_CAP
        + LOW_INCOME_POINTS;

    /// Categories in display order, paired with their caps.
    pub fn categories(&self) -> [CategoryPoints; 5] {
        [
            CategoryPoints {
                category: PointCategory::Age,
                label: PointCategory::Age.label(),
                points: self.age_points,
                max_points: PointCategory::Age.max_points(),
            },
            CategoryPoints {
                category: PointCategory::HomelessPeriod,
                label: PointCategory::HomelessPeriod.label(),
                points: self.homeless_points,
                max_points: PointCategory::HomelessPeriod.max_points(),
            },
            CategoryPoints {
                category: PointCategory::Dependents,
                label: PointCategory::Dependents.label(),
                points: self.dependents_points,
                max_points: PointCategory::Dependents.max_points(),
            },
            CategoryPoints {
                category: PointCategory::SubscriptionAccount,
                label: PointCategory::SubscriptionAccount.label(),
                points: self.subscription_account_points,
                max_points: PointCategory::SubscriptionAccount.max_points(),
            },
            CategoryPoints {
                category: PointCategory::Income,
                label: PointCategory::Income.label(),
                points: self.income_points,
                max_points: PointCategory::Income.max_points(),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCategory {
    Age,
    HomelessPeriod,
    Dependents,
    SubscriptionAccount,
    Income,
}

impl PointCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::HomelessPeriod => "Homeless period",
            Self::Dependents => "Dependents",
            Self::SubscriptionAccount => "Subscription account",
            Self::Income => "Income",
        }
    }

    pub const fn max_points(self) -> f64 {
        match self {
            Self::Age => YOUTH_AGE_POINTS,
            Self::HomelessPeriod => HOMELESS_POINTS_CAP,
            Self::Dependents => DEPENDENT_POINTS_CAP,
            Self::SubscriptionAccount => ACCOUNT_POINTS_CAP,
            Self::Income => LOW_INCOME_POINTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPoints {
    pub category: PointCategory,
    pub label: &'static str,
    pub points: f64,
    pub max_points: f64,
}

/// Human-readable rule line for every category of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointExplanation {
    pub age: String,
    pub homeless: String,
    pub dependents: String,
    pub subscription_account: String,
    pub income: String,
}

impl PointExplanation {
    pub fn lines(&self) -> [&str; 5] {
        [
            self.age.as_str(),
            self.homeless.as_str(),
            self.dependents.as_str(),
            self.subscription_account.as_str(),
            self.income.as_str(),
        ]
    }
}

pub fn calculate_points(input: &ApplicantInput) -> PointBreakdown {
    let age_points = if YOUTH_AGE_RANGE.contains(&input.age) {
        YOUTH_AGE_POINTS
    } else {
        DEFAULT_AGE_POINTS
    };

    let homeless_points =
        (f64::from(input.homeless_period) * HOMELESS_POINTS_PER_MONTH).min(HOMELESS_POINTS_CAP);

    let dependents_points =
        (f64::from(input.dependents) * DEPENDENT_POINTS_EACH).min(DEPENDENT_POINTS_CAP);

    let subscription_account_points = (f64::from(input.subscription_account_period)
        * ACCOUNT_POINTS_PER_MONTH)
        .min(ACCOUNT_POINTS_CAP);

    let income_points = if input.income <= LOW_INCOME_CEILING {
        LOW_INCOME_POINTS
    } else {
        DEFAULT_INCOME_POINTS
    };

    // Summed left to right so fractional totals match the published table exactly.
    let total_points = age_points
        + homeless_points
        + dependents_points
        + subscription_account_points
        + income_points;

    PointBreakdown {
        age_points,
        homeless_points,
        dependents_points,
        subscription_account_points,
        income_points,
        total_points,
    }
}

pub fn point_explanation(breakdown: &PointBreakdown) -> PointExplanation {
    PointExplanation {
        age: format!(
            "Age: {} points (ages 19-39: 20 points, otherwise: 10 points)",
            breakdown.age_points
        ),
        homeless: format!(
            "Homeless period: {} points (0.5 per month, max 30)",
            breakdown.homeless_points
        ),
        dependents: format!(
            "Dependents: {} points (5 per dependent, max 20)",
            breakdown.dependents_points
        ),
        subscription_account: format!(
            "Subscription account: {} points (0.3 per month, max 20)",
            breakdown.subscription_account_points
        ),
        income: format!(
            "Income: {} points (annual income up to 30M KRW: 10 points, above: 5 points)",
            breakdown.income_points
        ),
    }
}
