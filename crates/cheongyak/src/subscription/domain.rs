use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Region value on a strategy that matches every applicant region.
pub const NATIONWIDE_REGION: &str = "전국";

/// Region choices offered to applicants. The core treats regions as opaque strings;
/// this list only feeds input surfaces.
pub const APPLICANT_REGIONS: [&str; 9] = [
    "서울", "경기", "인천", "부산", "대구", "대전", "광주", "울산", "지방",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdType {
    Single,
    Couple,
    Family,
}

impl HouseholdType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Single, Self::Couple, Self::Family]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Couple => "couple",
            Self::Family => "family",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single-person household",
            Self::Couple => "Married couple",
            Self::Family => "Family household",
        }
    }
}

impl fmt::Display for HouseholdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HouseholdType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "couple" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            other => Err(format!(
                "unknown household type '{other}' (expected single, couple, or family)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyCategory {
    Public,
    Private,
    Special,
}

impl StrategyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Special => "Special supply",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Attributes an applicant supplies for a single calculation.
///
/// Values outside the documented ranges are accepted as-is; clamping happens at the
/// input surfaces, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInput {
    pub age: i32,
    /// Months without owning a home.
    pub homeless_period: i32,
    pub dependents: i32,
    /// Months since the subscription savings account was opened.
    pub subscription_account_period: i32,
    /// Annual income in units of 10,000 KRW.
    pub income: i32,
    pub household_type: HouseholdType,
    pub region: String,
}

/// Documented input domains, used by surfaces that collect `ApplicantInput`.
pub mod limits {
    pub const AGE: (i32, i32) = (19, 100);
    pub const HOMELESS_PERIOD: (i32, i32) = (0, 600);
    pub const DEPENDENTS: (i32, i32) = (0, 10);
    pub const SUBSCRIPTION_ACCOUNT_PERIOD: (i32, i32) = (0, 600);
    pub const INCOME: (i32, i32) = (0, 10_000);
}
