use super::domain::{Difficulty, HouseholdType, StrategyCategory, NATIONWIDE_REGION};
use serde::Serialize;
use std::io;

/// One housing-subscription pathway with its eligibility band and success estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Inclusive lower bound on applicant points.
    pub min_points: f64,
    /// Inclusive upper bound on applicant points.
    pub max_points: f64,
    /// Estimated success rate, 0-100.
    pub success_rate: u8,
    pub region: &'static str,
    pub household_type: HouseholdType,
    pub category: StrategyCategory,
    pub difficulty: Difficulty,
}

impl Strategy {
    pub fn is_nationwide(&self) -> bool {
        self.region == NATIONWIDE_REGION
    }
}

/// Read-only strategy reference data. Built once and shared by every simulation.
#[derive(Debug, Clone)]
pub struct StrategyCatalog {
    strategies: Vec<Strategy>,
}

impl StrategyCatalog {
    pub fn standard() -> Self {
        Self {
            strategies: standard_strategies(),
        }
    }

    /// Catalog over caller-supplied entries; order is the tie-break order for ranking.
    pub fn from_strategies(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|strategy| strategy.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Strategy, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::UnknownStrategy(id.to_string()))
    }

    /// Writes the catalog as CSV with a header row, in catalog order.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), CatalogError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for strategy in &self.strategies {
            csv_writer.serialize(StrategyCsvRow::from(strategy))?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
    #[error("catalog export failed: {0}")]
    Export(#[from] csv::Error),
}

#[derive(Serialize)]
struct StrategyCsvRow<'a> {
    id: &'a str,
    name: &'a str,
    min_points: f64,
    max_points: f64,
    success_rate: u8,
    region: &'a str,
    household_type: &'a str,
    category: StrategyCategory,
    difficulty: Difficulty,
}

impl<'a> From<&'a Strategy> for StrategyCsvRow<'a> {
    fn from(strategy: &'a Strategy) -> Self {
        Self {
            id: strategy.id,
            name: strategy.name,
            min_points: strategy.min_points,
            max_points: strategy.max_points,
            success_rate: strategy.success_rate,
            region: strategy.region,
            household_type: strategy.household_type.key(),
            category: strategy.category,
            difficulty: strategy.difficulty,
        }
    }
}

fn standard_strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            id: "public-small",
            name: "중소형 공공분양",
            description: "공공주택 중 소형 평수 위주 청약",
            min_points: 40.0,
            max_points: 100.0,
            success_rate: 75,
            region: NATIONWIDE_REGION,
            household_type: HouseholdType::Single,
            category: StrategyCategory::Public,
            difficulty: Difficulty::Easy,
        },
        Strategy {
            id: "public-medium",
            name: "중형 공공분양",
            description: "공공주택 중형 평수 청약",
            min_points: 60.0,
            max_points: 100.0,
            success_rate: 60,
            region: NATIONWIDE_REGION,
            household_type: HouseholdType::Couple,
            category: StrategyCategory::Public,
            difficulty: Difficulty::Medium,
        },
        Strategy {
            id: "private-special",
            name: "민간 특별공급",
            description: "민간분양 특별공급 청약",
            min_points: 70.0,
            max_points: 100.0,
            success_rate: 45,
            region: "서울",
            household_type: HouseholdType::Family,
            category: StrategyCategory::Private,
            difficulty: Difficulty::Hard,
        },
        Strategy {
            id: "local-public",
            name: "지방 공공분양",
            description: "지방 공공주택 청약",
            min_points: 30.0,
            max_points: 100.0,
            success_rate: 85,
            region: "지방",
            household_type: HouseholdType::Single,
            category: StrategyCategory::Public,
            difficulty: Difficulty::Easy,
        },
        Strategy {
            id: "newlywed",
            name: "신혼부부 특별공급",
            description: "신혼부부 전용 특별공급",
            min_points: 50.0,
            max_points: 100.0,
            success_rate: 70,
            region: NATIONWIDE_REGION,
            household_type: HouseholdType::Couple,
            category: StrategyCategory::Special,
            difficulty: Difficulty::Medium,
        },
        Strategy {
            id: "youth-special",
            name: "청년 특별공급",
            description: "청년 전용 특별공급",
            min_points: 45.0,
            max_points: 100.0,
            success_rate: 65,
            region: NATIONWIDE_REGION,
            household_type: HouseholdType::Single,
            category: StrategyCategory::Special,
            difficulty: Difficulty::Medium,
        },
    ]
}
