use crate::subscription::domain::{ApplicantInput, HouseholdType};
use crate::subscription::{SimulationEngine, Strategy, StrategyCatalog};

/// The walkthrough applicant: 25 years old, single, living in Seoul.
pub(super) fn reference_input() -> ApplicantInput {
    ApplicantInput {
        age: 25,
        homeless_period: 12,
        dependents: 0,
        subscription_account_period: 6,
        income: 2500,
        household_type: HouseholdType::Single,
        region: "서울".to_string(),
    }
}

pub(super) fn applicant(household_type: HouseholdType, region: &str) -> ApplicantInput {
    ApplicantInput {
        household_type,
        region: region.to_string(),
        ..reference_input()
    }
}

pub(super) fn engine() -> SimulationEngine {
    SimulationEngine::new(StrategyCatalog::standard())
}

pub(super) fn ids<'a>(strategies: impl IntoIterator<Item = &'a Strategy>) -> Vec<&'static str> {
    strategies.into_iter().map(|strategy| strategy.id).collect()
}
