use serde::{Deserialize, Serialize};

/// Fixed policy weights for the composite plan score, plus the share of
/// income policy permits toward total installment obligations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRubric {
    pub affordability_weight: f64,
    pub interest_weight: f64,
    pub duration_weight: f64,
    pub necessity_weight: f64,
    pub income_cap_ratio: f64,
}

impl ScoringRubric {
    /// The production rubric. The four weights must sum to 1.0 so the
    /// composite stays on the same 0-10 scale as the sub-scores.
    pub fn standard() -> Self {
        let rubric = Self {
            affordability_weight: 0.4,
            interest_weight: 0.3,
            duration_weight: 0.1,
            necessity_weight: 0.2,
            income_cap_ratio: 0.4,
        };
        debug_assert!((rubric.weight_sum() - 1.0).abs() < f64::EPSILON);
        rubric
    }

    pub fn weight_sum(&self) -> f64 {
        self.affordability_weight
            + self.interest_weight
            + self.duration_weight
            + self.necessity_weight
    }

    /// Maximum additional monthly obligation policy permits: a fixed share
    /// of income minus everything already committed.
    pub fn affordability_ceiling(&self, income: f64, existing_emi_total: f64) -> f64 {
        income * self.income_cap_ratio - existing_emi_total
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_weights_sum_to_one() {
        let rubric = ScoringRubric::standard();
        assert!((rubric.weight_sum() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ceiling_subtracts_existing_obligations() {
        let rubric = ScoringRubric::standard();
        assert_eq!(rubric.affordability_ceiling(50_000.0, 0.0), 20_000.0);
        assert_eq!(rubric.affordability_ceiling(50_000.0, 12_000.0), 8_000.0);
    }

    #[test]
    fn ceiling_may_go_negative() {
        let rubric = ScoringRubric::standard();
        assert!(rubric.affordability_ceiling(10_000.0, 9_000.0) < 0.0);
    }
}
