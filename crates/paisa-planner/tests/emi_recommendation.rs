//! Integration specifications for the EMI planning workflow.
//!
//! Scenarios run through the public service facade so ranking, the shared
//! affordability ceiling, and recommendation bookkeeping are validated
//! end-to-end without reaching into private modules.

mod common {
    use paisa_planner::budget::BudgetPlannerService;
    use paisa_planner::emi::{LoanPlanDraft, ScoringRubric};

    pub(super) fn service_with_income(income: f64) -> BudgetPlannerService {
        let service = BudgetPlannerService::new(ScoringRubric::standard());
        service.set_income(income).expect("valid income");
        service
    }

    pub(super) fn draft(
        label: &str,
        principal: f64,
        rate: f64,
        term: u32,
        necessity: u8,
    ) -> LoanPlanDraft {
        LoanPlanDraft {
            label: label.to_string(),
            principal,
            annual_rate: rate,
            term_months: term,
            necessity,
        }
    }
}

use common::*;
use paisa_planner::emi::ScoreFactorKind;

#[test]
fn ranking_prefers_cheaper_credit_at_equal_necessity() {
    let service = service_with_income(120_000.0);
    service
        .submit_plan(draft("Personal Loan", 400_000.0, 18.0, 48, 6))
        .expect("valid plan");
    let home = service
        .submit_plan(draft("Home Loan Top-Up", 400_000.0, 8.0, 48, 6))
        .expect("valid plan");

    let outcome = service.ranked_plans();

    let best = outcome.recommendation.expect("recommendation present");
    assert_eq!(best.plan.id, home.id);
    assert!(outcome.scored[0].score > outcome.scored[1].score);
}

#[test]
fn mid_length_terms_outrank_short_and_long_ones() {
    // Income high enough that affordability saturates for every plan, so
    // the term preference decides the order: 25-60 months, then <=24, then
    // anything beyond 120.
    let service = service_with_income(500_000.0);
    let short = service
        .submit_plan(draft("Short", 300_000.0, 9.0, 18, 5))
        .expect("valid plan");
    let mid = service
        .submit_plan(draft("Mid", 300_000.0, 9.0, 48, 5))
        .expect("valid plan");
    let long = service
        .submit_plan(draft("Long", 300_000.0, 9.0, 150, 5))
        .expect("valid plan");

    let outcome = service.ranked_plans();

    let order: Vec<_> = outcome
        .scored
        .iter()
        .map(|scored| scored.plan.id.clone())
        .collect();
    assert_eq!(order, vec![mid.id, short.id, long.id]);
}

#[test]
fn every_scored_plan_carries_a_full_factor_breakdown() {
    let service = service_with_income(80_000.0);
    service
        .submit_plan(draft("Car Loan", 500_000.0, 9.2, 60, 6))
        .expect("valid plan");

    let outcome = service.ranked_plans();
    let scored = &outcome.scored[0];

    assert!((0.0..=10.0).contains(&scored.score));
    assert!(scored.total_interest >= 0.0);
    for kind in [
        ScoreFactorKind::Affordability,
        ScoreFactorKind::InterestRate,
        ScoreFactorKind::Duration,
        ScoreFactorKind::Necessity,
    ] {
        assert!(
            scored.factors.iter().any(|factor| factor.kind == kind),
            "missing factor {kind:?}"
        );
    }
}

#[test]
fn the_shared_ceiling_reflects_all_stored_plans() {
    let service = service_with_income(50_000.0);
    let plan = service
        .submit_plan(draft("Car Loan", 500_000.0, 9.2, 60, 6))
        .expect("valid plan");

    let outcome = service.ranked_plans();

    // The ceiling is computed over the whole collection, so the plan's own
    // payment counts against it.
    assert_eq!(outcome.ceiling, 50_000.0 * 0.4 - plan.monthly_payment);
}

#[test]
fn an_empty_collection_produces_no_recommendation() {
    let service = service_with_income(50_000.0);
    let outcome = service.ranked_plans();
    assert!(outcome.recommendation.is_none());
    assert!(outcome.scored.is_empty());
}

#[test]
fn identical_plans_keep_submission_order() {
    let service = service_with_income(90_000.0);
    let first = service
        .submit_plan(draft("Bike Loan", 200_000.0, 10.0, 36, 5))
        .expect("valid plan");
    service
        .submit_plan(draft("Scooter Loan", 200_000.0, 10.0, 36, 5))
        .expect("valid plan");

    let outcome = service.ranked_plans();

    assert_eq!(outcome.scored[0].score, outcome.scored[1].score);
    let best = outcome.recommendation.expect("recommendation present");
    assert_eq!(best.plan.id, first.id);
}
