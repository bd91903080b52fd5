use super::super::catalog::Strategy;
use super::super::domain::{ApplicantInput, HouseholdType};

/// Which parts of the eligibility predicate a strategy satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchSignals {
    pub points: bool,
    pub household: bool,
    pub region: bool,
}

impl MatchSignals {
    pub fn eligible(self) -> bool {
        self.points && self.household && self.region
    }
}

pub(crate) fn match_strategy(
    strategy: &Strategy,
    user_points: f64,
    input: &ApplicantInput,
) -> MatchSignals {
    MatchSignals {
        points: points_match(strategy, user_points),
        household: household_match(strategy, input.household_type),
        region: region_match(strategy, &input.region),
    }
}

fn points_match(strategy: &Strategy, user_points: f64) -> bool {
    strategy.min_points <= user_points && user_points <= strategy.max_points
}

// A single-tagged strategy is open to every household; couple and family tags are exact.
fn household_match(strategy: &Strategy, household: HouseholdType) -> bool {
    strategy.household_type == household || strategy.household_type == HouseholdType::Single
}

fn region_match(strategy: &Strategy, region: &str) -> bool {
    strategy.is_nationwide() || strategy.region == region
}
