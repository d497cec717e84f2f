use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::LoanPlan;
use super::scoring::{ScoredPlan, ScoringEngine, ScoringRubric};

/// Ranked output of one scoring pass over the full plan collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub ceiling: f64,
    pub scored: Vec<ScoredPlan>,
    pub recommendation: Option<ScoredPlan>,
}

/// Selects the top-ranked plan from a collection using one shared
/// affordability ceiling. Stateless; every call rescans the full collection.
pub struct RecommendationSelector {
    engine: ScoringEngine,
}

impl RecommendationSelector {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self {
            engine: ScoringEngine::new(rubric),
        }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        self.engine.rubric()
    }

    /// Score every plan against a single global ceiling and rank descending.
    ///
    /// `existing_emi_total` is expected to include the payments of the plans
    /// being scored: the ceiling is computed once for the whole pass, so a
    /// plan's own payment counts against it. The sort is stable, so plans
    /// with equal rounded scores keep their input order and the earliest
    /// wins.
    pub fn recommend(
        &self,
        plans: &[LoanPlan],
        income: f64,
        existing_emi_total: f64,
    ) -> RecommendationOutcome {
        let ceiling = self
            .engine
            .rubric()
            .affordability_ceiling(income, existing_emi_total);

        if plans.is_empty() {
            return RecommendationOutcome {
                ceiling,
                scored: Vec::new(),
                recommendation: None,
            };
        }

        let mut scored: Vec<ScoredPlan> = plans
            .iter()
            .map(|plan| self.engine.score(plan, ceiling))
            .collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let recommendation = scored.first().cloned();

        RecommendationOutcome {
            ceiling,
            scored,
            recommendation,
        }
    }
}
