use serde::{Deserialize, Serialize};

use super::amortization::{self, AmortizationError};

/// Identifier wrapper for stored loan plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub String);

/// User-entered description of a candidate installment loan, prior to
/// validation and payment computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPlanDraft {
    pub label: String,
    pub principal: f64,
    pub annual_rate: f64,
    pub term_months: u32,
    pub necessity: u8,
}

/// A validated plan with its amortized monthly payment fixed at creation.
///
/// The payment is never hand-edited; it is recomputed only by rebuilding the
/// plan from a fresh draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPlan {
    pub id: PlanId,
    pub label: String,
    pub principal: f64,
    pub annual_rate: f64,
    pub term_months: u32,
    pub necessity: u8,
    pub monthly_payment: f64,
}

impl LoanPlan {
    /// Validate a draft and compute its payment, rounded once to the nearest
    /// whole currency unit. The stored rounded value is what scoring and
    /// display both consume.
    pub fn from_draft(id: PlanId, draft: LoanPlanDraft) -> Result<Self, PlanValidationError> {
        if !(1..=10).contains(&draft.necessity) {
            return Err(PlanValidationError::NecessityOutOfRange(draft.necessity));
        }

        let monthly_payment =
            amortization::monthly_payment(draft.principal, draft.annual_rate, draft.term_months)?
                .round();

        Ok(Self {
            id,
            label: draft.label,
            principal: draft.principal,
            annual_rate: draft.annual_rate,
            term_months: draft.term_months,
            necessity: draft.necessity,
            monthly_payment,
        })
    }

    /// Interest paid over the full term; non-negative for any amortized plan.
    pub fn total_interest(&self) -> f64 {
        self.monthly_payment * f64::from(self.term_months) - self.principal
    }
}

/// Validation failures raised while turning a draft into a stored plan.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanValidationError {
    #[error("necessity must be between 1 and 10, got {0}")]
    NecessityOutOfRange(u8),
    #[error(transparent)]
    Amortization(#[from] AmortizationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LoanPlanDraft {
        LoanPlanDraft {
            label: "Car Loan".to_string(),
            principal: 500_000.0,
            annual_rate: 9.2,
            term_months: 60,
            necessity: 6,
        }
    }

    #[test]
    fn draft_becomes_plan_with_rounded_payment() {
        let plan = LoanPlan::from_draft(PlanId("plan-000001".to_string()), draft())
            .expect("valid draft");
        assert_eq!(plan.monthly_payment, 10_428.0);
        assert_eq!(plan.necessity, 6);
    }

    #[test]
    fn total_interest_is_non_negative() {
        let plan = LoanPlan::from_draft(PlanId("plan-000002".to_string()), draft())
            .expect("valid draft");
        let interest = plan.total_interest();
        assert!(interest >= 0.0);
        assert_eq!(interest, 10_428.0 * 60.0 - 500_000.0);
    }

    #[test]
    fn zero_rate_plan_has_zero_interest() {
        let plan = LoanPlan::from_draft(
            PlanId("plan-000003".to_string()),
            LoanPlanDraft {
                annual_rate: 0.0,
                principal: 120_000.0,
                term_months: 24,
                ..draft()
            },
        )
        .expect("valid draft");
        assert_eq!(plan.monthly_payment, 5_000.0);
        assert_eq!(plan.total_interest(), 0.0);
    }

    #[test]
    fn rejects_out_of_range_necessity() {
        let result = LoanPlan::from_draft(
            PlanId("plan-000004".to_string()),
            LoanPlanDraft {
                necessity: 0,
                ..draft()
            },
        );
        assert_eq!(result, Err(PlanValidationError::NecessityOutOfRange(0)));

        let result = LoanPlan::from_draft(
            PlanId("plan-000005".to_string()),
            LoanPlanDraft {
                necessity: 11,
                ..draft()
            },
        );
        assert_eq!(result, Err(PlanValidationError::NecessityOutOfRange(11)));
    }

    #[test]
    fn amortization_errors_propagate() {
        let result = LoanPlan::from_draft(
            PlanId("plan-000006".to_string()),
            LoanPlanDraft {
                term_months: 0,
                ..draft()
            },
        );
        assert!(matches!(
            result,
            Err(PlanValidationError::Amortization(
                AmortizationError::ZeroTerm
            ))
        ));
    }
}
