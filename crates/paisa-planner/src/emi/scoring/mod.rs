mod config;
mod rules;

pub use config::ScoringRubric;
pub use rules::{ScoreFactor, ScoreFactorKind};

use super::domain::LoanPlan;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the rubric to individual plans.
pub struct ScoringEngine {
    rubric: ScoringRubric,
}

impl ScoringEngine {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    /// Score one plan against the shared affordability ceiling. The returned
    /// composite is rounded to one decimal; the factor breakdown keeps the
    /// unrounded sub-scores for display and audit.
    pub fn score(&self, plan: &LoanPlan, ceiling: f64) -> ScoredPlan {
        let (factors, score) = rules::score_plan(plan, ceiling, &self.rubric);

        ScoredPlan {
            total_interest: plan.total_interest(),
            plan: plan.clone(),
            score,
            factors,
        }
    }
}

/// A plan augmented with its composite score, lifetime interest cost, and
/// per-factor breakdown. Produced transiently by a scoring pass; never
/// persisted beyond the active view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlan {
    pub plan: LoanPlan,
    pub score: f64,
    pub total_interest: f64,
    pub factors: Vec<ScoreFactor>,
}
