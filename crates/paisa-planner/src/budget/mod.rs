//! Budget state, the expense analysis pipeline, and the HTTP surface.
//!
//! The state container owns the plan collection and invokes the EMI engine
//! explicitly after every mutation; the analysis pipeline is the stateless
//! one-shot equivalent that powers the `/analyze` endpoint.

pub mod advice;
pub mod analysis;
pub(crate) mod backtrack;
pub mod domain;
pub mod optimizer;
pub mod router;
pub mod service;
pub mod state;

pub use advice::Advice;
pub use analysis::{analyze, AnalysisReport, AnalysisRequest};
pub use domain::{Expense, ExpensePriority, GoalKind, SavingsGoal};
pub use optimizer::{optimize_reducible, OptimizationStatus};
pub use router::budget_router;
pub use service::{BudgetPlannerService, PlannerError};
pub use state::BudgetState;
