use serde::{Deserialize, Serialize};

use super::domain::{Expense, SavingsGoal};
use crate::emi::{LoanPlan, RecommendationOutcome, RecommendationSelector, ScoredPlan};

/// Explicit container for everything the budget owns: income, expense lists,
/// the plan collection, and the derived recommendation.
///
/// The EMI engine only ever receives value snapshots taken from here; every
/// mutation path calls `recompute` afterwards instead of relying on any
/// implicit change tracking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetState {
    pub income: f64,
    pub fixed_expenses: Vec<Expense>,
    pub reducible_expenses: Vec<Expense>,
    pub plans: Vec<LoanPlan>,
    pub goal: Option<SavingsGoal>,
    pub recommendation: Option<ScoredPlan>,
}

impl BudgetState {
    pub fn fixed_total(&self) -> f64 {
        self.fixed_expenses.iter().map(|e| e.amount).sum()
    }

    pub fn reducible_total(&self) -> f64 {
        self.reducible_expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of monthly payments across all stored plans.
    pub fn emi_total(&self) -> f64 {
        self.plans.iter().map(|p| p.monthly_payment).sum()
    }

    /// Income left after every expense and installment.
    pub fn monthly_balance(&self) -> f64 {
        self.income - self.fixed_total() - self.reducible_total() - self.emi_total()
    }

    /// Shortfall against the goal's monthly target, if a goal is set.
    pub fn savings_gap(&self) -> Option<f64> {
        self.goal
            .as_ref()
            .map(|goal| (goal.monthly_target - self.monthly_balance()).max(0.0))
    }

    /// Re-run the full scoring pass and store the fresh recommendation.
    /// Total and stateless: the whole plan collection is rescanned on every
    /// call.
    pub fn recompute(&mut self, selector: &RecommendationSelector) -> RecommendationOutcome {
        let outcome = selector.recommend(&self.plans, self.income, self.emi_total());
        self.recommendation = outcome.recommendation.clone();
        outcome
    }
}
