//! Installment-loan engine: amortized payment math, multi-criteria plan
//! scoring, and recommendation selection.
//!
//! Everything here is a pure computation over value snapshots. Callers own
//! the plan collection and invoke the engine explicitly after each mutation;
//! the engine never retains references or reads ambient state.

pub mod amortization;
pub mod domain;
pub mod recommendation;
pub(crate) mod scoring;

pub use amortization::{monthly_payment, AmortizationError};
pub use domain::{LoanPlan, LoanPlanDraft, PlanId, PlanValidationError};
pub use recommendation::{RecommendationOutcome, RecommendationSelector};
pub use scoring::{ScoreFactor, ScoreFactorKind, ScoredPlan, ScoringEngine, ScoringRubric};
