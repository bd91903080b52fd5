//! Housing-subscription scoring: point calculation, grading, and strategy simulation.
//!
//! Every operation here is a pure function of its inputs. The only shared data is the
//! strategy catalog, which is built up front and owned by [`SimulationEngine`].

mod assessment;
pub mod catalog;
pub mod domain;
pub mod grade;
pub mod palette;
pub mod points;
pub mod router;
mod simulation;

#[cfg(test)]
mod tests;

pub use assessment::Assessment;
pub use catalog::{CatalogError, Strategy, StrategyCatalog};
pub use domain::{
    limits, ApplicantInput, Difficulty, HouseholdType, StrategyCategory, APPLICANT_REGIONS,
    NATIONWIDE_REGION,
};
pub use grade::{point_grade, GradeLevel, PointGrade};
pub use palette::success_rate_color;
pub use points::{
    calculate_points, point_explanation, CategoryPoints, PointBreakdown, PointCategory,
    PointExplanation,
};
pub use router::{subscription_router, PointsResponse, SimulationRequest};
pub use simulation::{SimulationEngine, SimulationResult};
