mod matching;

use super::catalog::{Strategy, StrategyCatalog};
use super::domain::ApplicantInput;
use matching::match_strategy;
use serde::Serialize;
use tracing::debug;

const RECOMMENDATION_LIMIT: usize = 3;
const ALTERNATIVE_LIMIT: usize = 3;

/// Stateless matcher that ranks the catalog against an applicant's points.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    catalog: StrategyCatalog,
}

impl SimulationEngine {
    pub fn new(catalog: StrategyCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    /// Strategies passing the points, household, and region checks, in catalog order.
    pub fn eligible_strategies(&self, user_points: f64, input: &ApplicantInput) -> Vec<&Strategy> {
        self.catalog
            .strategies()
            .iter()
            .filter(|strategy| match_strategy(strategy, user_points, input).eligible())
            .collect()
    }

    pub fn run(&self, user_points: f64, input: &ApplicantInput) -> SimulationResult {
        let eligible = self.eligible_strategies(user_points, input);

        let mut recommended = eligible.clone();
        recommended.sort_by(|a, b| b.success_rate.cmp(&a.success_rate));
        let recommended_strategies: Vec<Strategy> = recommended
            .into_iter()
            .take(RECOMMENDATION_LIMIT)
            .cloned()
            .collect();

        // Alternatives ignore household and region on purpose; they may repeat recommendations.
        let mut alternatives: Vec<&Strategy> = self
            .catalog
            .strategies()
            .iter()
            .filter(|strategy| strategy.min_points < user_points)
            .collect();
        alternatives.sort_by(|a, b| a.min_points.total_cmp(&b.min_points));
        let alternative_strategies: Vec<Strategy> = alternatives
            .into_iter()
            .take(ALTERNATIVE_LIMIT)
            .cloned()
            .collect();

        let success_probability = mean_success_rate(&eligible);

        debug!(
            user_points,
            household = %input.household_type,
            region = %input.region,
            eligible = eligible.len(),
            success_probability,
            "simulation complete"
        );

        SimulationResult {
            user_points,
            recommended_strategies,
            alternative_strategies,
            success_probability,
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(StrategyCatalog::standard())
    }
}

fn mean_success_rate(strategies: &[&Strategy]) -> f64 {
    if strategies.is_empty() {
        return 0.0;
    }

    let sum: f64 = strategies
        .iter()
        .map(|strategy| f64::from(strategy.success_rate))
        .sum();
    sum / strategies.len() as f64
}

/// Ranked strategy lists and aggregate success estimate for one applicant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub user_points: f64,
    pub recommended_strategies: Vec<Strategy>,
    pub alternative_strategies: Vec<Strategy>,
    pub success_probability: f64,
}
