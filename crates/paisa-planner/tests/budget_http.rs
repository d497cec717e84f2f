//! HTTP-level specifications for the budget router using `tower::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use paisa_planner::budget::{budget_router, BudgetPlannerService};
use paisa_planner::emi::ScoringRubric;
use serde_json::{json, Value};
use tower::ServiceExt;

fn service() -> Arc<BudgetPlannerService> {
    Arc::new(BudgetPlannerService::new(ScoringRubric::standard()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn submitting_a_valid_plan_returns_created() {
    let app = budget_router(service());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/budget/plans",
            json!({
                "label": "Car Loan",
                "principal": 500000.0,
                "annual_rate": 9.2,
                "term_months": 60,
                "necessity": 6
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["monthly_payment"], json!(10428.0));
    assert!(body["id"].as_str().expect("id present").starts_with("plan-"));
}

#[tokio::test]
async fn invalid_drafts_are_unprocessable() {
    let app = budget_router(service());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/budget/plans",
            json!({
                "label": "Broken",
                "principal": 0.0,
                "annual_rate": 9.2,
                "term_months": 60,
                "necessity": 6
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().expect("error present").contains("principal"));
}

#[tokio::test]
async fn listing_plans_includes_the_recommendation() {
    let planner = service();
    planner.set_income(80_000.0).expect("valid income");
    let app = budget_router(planner.clone());

    let submit = json_request(
        "POST",
        "/api/v1/budget/plans",
        json!({
            "label": "Education Loan",
            "principal": 300000.0,
            "annual_rate": 8.0,
            "term_months": 48,
            "necessity": 9
        }),
    );
    let response = app.clone().oneshot(submit).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/budget/plans")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["scored"].as_array().expect("scored array").len(), 1);
    assert_eq!(body["recommendation"]["plan"]["label"], json!("Education Loan"));
}

#[tokio::test]
async fn deleting_an_unknown_plan_is_not_found() {
    let app = budget_router(service());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/budget/plans/plan-999999")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejecting_negative_income_is_unprocessable() {
    let app = budget_router(service());

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/budget/income",
            json!({ "income": -100.0 }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn storing_a_goal_reports_the_monthly_shortfall() {
    let planner = service();
    planner.set_income(50_000.0).expect("valid income");
    let app = budget_router(planner);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/budget/goal",
            json!({
                "kind": "Savings",
                "target_amount": 600000.0,
                "monthly_target": 60000.0,
                "description": "Emergency fund"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["savings_gap"], json!(10000.0));
}

#[tokio::test]
async fn analyze_returns_a_full_report() {
    let app = budget_router(service());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/budget/analyze",
            json!({
                "salary": 80000.0,
                "fixed_expenses": [
                    { "name": "Rent", "amount": 20000.0, "priority": "High", "locked": true }
                ],
                "reducible_expenses": [
                    { "name": "Dining", "amount": 6000.0, "priority": "Low" }
                ],
                "plans": [
                    { "label": "Car Loan", "principal": 500000.0, "annual_rate": 9.2,
                      "term_months": 60, "necessity": 6 }
                ],
                "monthly_savings_target": 10000.0
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["plans"]["recommendation"]["plan"]["label"], json!("Car Loan"));
    assert_eq!(body["optimization"]["goal_met"], json!(true));
    assert!(!body["advice"]["tips"].as_array().expect("tips array").is_empty());
    assert_eq!(body["optimized_expenses"].as_array().expect("expenses").len(), 2);
}
