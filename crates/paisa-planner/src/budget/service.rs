use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::info;

use super::analysis::{self, AnalysisReport, AnalysisRequest};
use super::domain::SavingsGoal;
use super::state::BudgetState;
use crate::emi::{
    LoanPlan, LoanPlanDraft, PlanId, PlanValidationError, RecommendationOutcome,
    RecommendationSelector, ScoringRubric,
};

static PLAN_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_plan_id() -> PlanId {
    let id = PLAN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PlanId(format!("plan-{id:06}"))
}

/// Thread-safe facade over the budget state plus the recommendation engine.
/// Every mutation recomputes the recommendation before returning, so readers
/// always observe a consistent state.
pub struct BudgetPlannerService {
    state: Mutex<BudgetState>,
    selector: RecommendationSelector,
}

impl BudgetPlannerService {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self {
            state: Mutex::new(BudgetState::default()),
            selector: RecommendationSelector::new(rubric),
        }
    }

    pub fn with_state(rubric: ScoringRubric, state: BudgetState) -> Self {
        let service = Self {
            state: Mutex::new(state),
            selector: RecommendationSelector::new(rubric),
        };
        service
            .state
            .lock()
            .expect("budget state mutex poisoned")
            .recompute(&service.selector);
        service
    }

    /// Set income and return the refreshed ranking.
    pub fn set_income(&self, income: f64) -> Result<RecommendationOutcome, PlannerError> {
        if !income.is_finite() || income < 0.0 {
            return Err(PlannerError::InvalidIncome(income));
        }
        let mut state = self.state.lock().expect("budget state mutex poisoned");
        state.income = income;
        let outcome = state.recompute(&self.selector);
        info!(income, "income updated");
        Ok(outcome)
    }

    /// Validate a draft, store the resulting plan, and refresh the ranking.
    pub fn submit_plan(&self, draft: LoanPlanDraft) -> Result<LoanPlan, PlannerError> {
        let plan = LoanPlan::from_draft(next_plan_id(), draft)?;
        let mut state = self.state.lock().expect("budget state mutex poisoned");
        state.plans.push(plan.clone());
        state.recompute(&self.selector);
        info!(plan_id = %plan.id.0, payment = plan.monthly_payment, "loan plan stored");
        Ok(plan)
    }

    /// Remove a plan and return the refreshed ranking.
    pub fn remove_plan(&self, id: &PlanId) -> Result<RecommendationOutcome, PlannerError> {
        let mut state = self.state.lock().expect("budget state mutex poisoned");
        let before = state.plans.len();
        state.plans.retain(|plan| &plan.id != id);
        if state.plans.len() == before {
            return Err(PlannerError::PlanNotFound(id.0.clone()));
        }
        let outcome = state.recompute(&self.selector);
        info!(plan_id = %id.0, "loan plan removed");
        Ok(outcome)
    }

    /// Current ranking over the stored plans, recomputed on demand.
    pub fn ranked_plans(&self) -> RecommendationOutcome {
        let state = self.state.lock().expect("budget state mutex poisoned");
        self.selector
            .recommend(&state.plans, state.income, state.emi_total())
    }

    /// Store the savings goal and report the current monthly shortfall
    /// against its target.
    pub fn set_goal(&self, goal: SavingsGoal) -> f64 {
        let mut state = self.state.lock().expect("budget state mutex poisoned");
        state.goal = Some(goal);
        let gap = state.savings_gap().unwrap_or(0.0);
        info!(gap, "savings goal updated");
        gap
    }

    /// Value snapshot of the full state for rendering.
    pub fn snapshot(&self) -> BudgetState {
        self.state
            .lock()
            .expect("budget state mutex poisoned")
            .clone()
    }

    /// Stateless one-shot analysis; does not touch the stored budget.
    pub fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, PlannerError> {
        analysis::analyze(request, &self.selector).map_err(PlannerError::from)
    }
}

/// Error raised by the planner service.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error(transparent)]
    Validation(#[from] PlanValidationError),
    #[error("income must be a finite, non-negative amount, got {0}")]
    InvalidIncome(f64),
    #[error("plan {0} not found")]
    PlanNotFound(String),
}
