use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::assessment::Assessment;
use super::catalog::Strategy;
use super::domain::ApplicantInput;
use super::grade::{point_grade, PointGrade};
use super::points::{
    calculate_points, point_explanation, CategoryPoints, PointBreakdown, PointExplanation,
};
use super::simulation::{SimulationEngine, SimulationResult};
use crate::error::AppError;

/// Router builder exposing the calculator, simulator, and catalog as JSON endpoints.
pub fn subscription_router(engine: Arc<SimulationEngine>) -> Router {
    Router::new()
        .route("/api/v1/points", post(points_handler))
        .route("/api/v1/simulation", post(simulation_handler))
        .route("/api/v1/assessment", post(assessment_handler))
        .route("/api/v1/strategies", get(strategies_handler))
        .route("/api/v1/strategies/:strategy_id", get(strategy_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsResponse {
    pub breakdown: PointBreakdown,
    pub grade: PointGrade,
    pub explanation: PointExplanation,
    pub categories: Vec<CategoryPoints>,
}

/// Simulation request. Without `userPoints`, the total is computed from `input`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    #[serde(default)]
    pub user_points: Option<f64>,
    pub input: ApplicantInput,
}

pub(crate) async fn points_handler(Json(input): Json<ApplicantInput>) -> Json<PointsResponse> {
    let breakdown = calculate_points(&input);

    Json(PointsResponse {
        breakdown,
        grade: point_grade(breakdown.total_points),
        explanation: point_explanation(&breakdown),
        categories: breakdown.categories().to_vec(),
    })
}

pub(crate) async fn simulation_handler(
    State(engine): State<Arc<SimulationEngine>>,
    Json(request): Json<SimulationRequest>,
) -> Json<SimulationResult> {
    let SimulationRequest { user_points, input } = request;
    let user_points = user_points.unwrap_or_else(|| calculate_points(&input).total_points);

    Json(engine.run(user_points, &input))
}

pub(crate) async fn assessment_handler(
    State(engine): State<Arc<SimulationEngine>>,
    Json(input): Json<ApplicantInput>,
) -> Json<Assessment> {
    Json(engine.assess(input))
}

pub(crate) async fn strategies_handler(
    State(engine): State<Arc<SimulationEngine>>,
) -> Json<Vec<Strategy>> {
    Json(engine.catalog().strategies().to_vec())
}

pub(crate) async fn strategy_handler(
    State(engine): State<Arc<SimulationEngine>>,
    Path(strategy_id): Path<String>,
) -> Result<Json<Strategy>, AppError> {
    let strategy = engine.catalog().require(&strategy_id)?;
    Ok(Json(strategy.clone()))
}
