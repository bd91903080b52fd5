use super::domain::ApplicantInput;
use super::grade::{point_grade, PointGrade};
use super::points::{calculate_points, point_explanation, PointBreakdown, PointExplanation};
use super::simulation::{SimulationEngine, SimulationResult};
use serde::Serialize;

/// Breakdown, grade, and simulation for a single applicant input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub input: ApplicantInput,
    pub breakdown: PointBreakdown,
    pub explanation: PointExplanation,
    pub grade: PointGrade,
    pub simulation: SimulationResult,
}

impl SimulationEngine {
    /// Scores the input and feeds its total straight into the simulator.
    pub fn assess(&self, input: ApplicantInput) -> Assessment {
        let breakdown = calculate_points(&input);
        let explanation = point_explanation(&breakdown);
        let grade = point_grade(breakdown.total_points);
        let simulation = self.run(breakdown.total_points, &input);

        Assessment {
            input,
            breakdown,
            explanation,
            grade,
            simulation,
        }
    }
}
