use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::analysis::AnalysisRequest;
use super::domain::SavingsGoal;
use super::service::{BudgetPlannerService, PlannerError};
use crate::emi::{LoanPlanDraft, PlanId};

/// Router builder exposing the budget endpoints for intake, ranking, and
/// one-shot analysis.
pub fn budget_router(service: Arc<BudgetPlannerService>) -> Router {
    Router::new()
        .route(
            "/api/v1/budget/plans",
            post(submit_plan_handler).get(list_plans_handler),
        )
        .route("/api/v1/budget/plans/:plan_id", delete(remove_plan_handler))
        .route("/api/v1/budget/income", put(set_income_handler))
        .route("/api/v1/budget/goal", put(set_goal_handler))
        .route("/api/v1/budget/recommendation", get(recommendation_handler))
        .route("/api/v1/budget/analyze", post(analyze_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct IncomeUpdate {
    pub(crate) income: f64,
}

pub(crate) async fn submit_plan_handler(
    State(service): State<Arc<BudgetPlannerService>>,
    axum::Json(draft): axum::Json<LoanPlanDraft>,
) -> Response {
    match service.submit_plan(draft) {
        Ok(plan) => (StatusCode::CREATED, axum::Json(plan)).into_response(),
        Err(error @ PlannerError::Validation(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_plans_handler(
    State(service): State<Arc<BudgetPlannerService>>,
) -> Response {
    let outcome = service.ranked_plans();
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn remove_plan_handler(
    State(service): State<Arc<BudgetPlannerService>>,
    Path(plan_id): Path<String>,
) -> Response {
    let id = PlanId(plan_id);
    match service.remove_plan(&id) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(PlannerError::PlanNotFound(missing)) => {
            let payload = json!({ "error": format!("plan {missing} not found") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn set_income_handler(
    State(service): State<Arc<BudgetPlannerService>>,
    axum::Json(update): axum::Json<IncomeUpdate>,
) -> Response {
    match service.set_income(update.income) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error @ PlannerError::InvalidIncome(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn set_goal_handler(
    State(service): State<Arc<BudgetPlannerService>>,
    axum::Json(goal): axum::Json<SavingsGoal>,
) -> Response {
    let savings_gap = service.set_goal(goal);
    let payload = json!({ "savings_gap": savings_gap });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn recommendation_handler(
    State(service): State<Arc<BudgetPlannerService>>,
) -> Response {
    let outcome = service.ranked_plans();
    let payload = json!({
        "ceiling": outcome.ceiling,
        "recommendation": outcome.recommendation,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<BudgetPlannerService>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response {
    match service.analyze(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error @ PlannerError::Validation(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
