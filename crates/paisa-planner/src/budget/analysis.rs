//! One-shot budget analysis: optimize expenses, rank plans, and attach
//! advice in a single stateless pass.

use serde::{Deserialize, Serialize};

use super::advice::{advise, Advice};
use super::backtrack;
use super::domain::Expense;
use super::optimizer::{self, OptimizationStatus};
use crate::emi::{
    LoanPlan, LoanPlanDraft, PlanId, PlanValidationError, RecommendationOutcome,
    RecommendationSelector,
};

/// Inputs for the analysis, independent of any stored budget state.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub salary: f64,
    #[serde(default)]
    pub fixed_expenses: Vec<Expense>,
    #[serde(default)]
    pub reducible_expenses: Vec<Expense>,
    #[serde(default)]
    pub plans: Vec<LoanPlanDraft>,
    #[serde(default)]
    pub monthly_savings_target: f64,
}

/// Everything the report view renders.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Fixed expenses followed by the optimized reducible expenses.
    pub optimized_expenses: Vec<Expense>,
    pub optimization: OptimizationStatus,
    /// True when the greedy pass fell short and the exhaustive search found
    /// a deeper combination of cuts.
    pub used_fallback: bool,
    pub plans: RecommendationOutcome,
    pub advice: Advice,
}

/// Run the full pipeline: validate plan drafts, trim reducible expenses
/// toward the savings target (escalating to the exhaustive search when the
/// greedy pass cannot reach it), score and rank the plans, and interpret the
/// result as alerts and tips.
pub fn analyze(
    request: AnalysisRequest,
    selector: &RecommendationSelector,
) -> Result<AnalysisReport, PlanValidationError> {
    let AnalysisRequest {
        salary,
        fixed_expenses,
        reducible_expenses,
        plans: drafts,
        monthly_savings_target,
    } = request;

    let plans: Vec<LoanPlan> = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            LoanPlan::from_draft(PlanId(format!("plan-{:03}", index + 1)), draft)
        })
        .collect::<Result<_, _>>()?;

    let fixed_total: f64 = fixed_expenses.iter().map(|e| e.amount).sum();
    let emi_total: f64 = plans.iter().map(|p| p.monthly_payment).sum();

    let (mut optimized_reducible, mut optimization) = optimizer::optimize_reducible(
        &reducible_expenses,
        salary,
        fixed_total,
        emi_total,
        monthly_savings_target,
    );

    let mut used_fallback = false;
    if !optimization.goal_met {
        let reducible_total: f64 = reducible_expenses.iter().map(|e| e.amount).sum();
        let baseline_net = salary - fixed_total - emi_total - reducible_total;
        let needed = monthly_savings_target - baseline_net;
        if needed > 0.0 {
            if let Some(cuts) = backtrack::search_reduction_plan(&reducible_expenses, needed) {
                used_fallback = true;
                optimization = optimizer::status_for(
                    &cuts,
                    salary,
                    fixed_total,
                    emi_total,
                    monthly_savings_target,
                );
                optimized_reducible = cuts;
            }
        }
    }

    let outcome = selector.recommend(&plans, salary, emi_total);

    let mut optimized_expenses = fixed_expenses;
    optimized_expenses.extend(optimized_reducible);

    let recommended_payment = outcome
        .recommendation
        .as_ref()
        .map(|scored| scored.plan.monthly_payment);
    let advice = advise(
        salary,
        &optimized_expenses,
        emi_total,
        recommended_payment,
        selector.rubric().income_cap_ratio,
    );

    Ok(AnalysisReport {
        optimized_expenses,
        optimization,
        used_fallback,
        plans: outcome,
        advice,
    })
}
