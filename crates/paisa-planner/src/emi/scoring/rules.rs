use super::config::ScoringRubric;
use crate::emi::domain::LoanPlan;
use serde::{Deserialize, Serialize};

/// The criteria feeding the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreFactorKind {
    Affordability,
    InterestRate,
    Duration,
    Necessity,
}

/// Discrete contribution to a plan score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub kind: ScoreFactorKind,
    pub value: f64,
    pub weight: f64,
    pub notes: String,
}

/// A plan consuming a fifth of remaining capacity scores the full 10; larger
/// shares fall off linearly. A zero payment is maximally affordable, and a
/// negative ceiling saturates at the floor rather than going negative.
pub(crate) fn affordability_score(ceiling: f64, monthly_payment: f64) -> f64 {
    if monthly_payment <= 0.0 {
        return 10.0;
    }
    ((ceiling / monthly_payment) * 5.0).clamp(0.0, 10.0)
}

/// Lower rates score higher, floored at 1 so no plan is scored non-positive
/// purely on rate.
pub(crate) fn interest_rate_score(annual_rate: f64) -> f64 {
    (10.0 - annual_rate / 2.0).max(1.0)
}

/// Policy preference for mid-length terms: 2-5 years is ideal, short terms
/// carry a higher payment burden, long terms accumulate interest.
pub(crate) fn duration_score(term_months: u32) -> f64 {
    match term_months {
        0..=24 => 8.0,
        25..=60 => 10.0,
        61..=120 => 7.0,
        _ => 5.0,
    }
}

pub(crate) fn score_plan(
    plan: &LoanPlan,
    ceiling: f64,
    rubric: &ScoringRubric,
) -> (Vec<ScoreFactor>, f64) {
    let affordability = affordability_score(ceiling, plan.monthly_payment);
    let interest = interest_rate_score(plan.annual_rate);
    let duration = duration_score(plan.term_months);
    let necessity = f64::from(plan.necessity);

    let factors = vec![
        ScoreFactor {
            kind: ScoreFactorKind::Affordability,
            value: affordability,
            weight: rubric.affordability_weight,
            notes: format!(
                "payment {:.0} against remaining capacity {:.0}",
                plan.monthly_payment, ceiling
            ),
        },
        ScoreFactor {
            kind: ScoreFactorKind::InterestRate,
            value: interest,
            weight: rubric.interest_weight,
            notes: format!("annual rate {:.2}%", plan.annual_rate),
        },
        ScoreFactor {
            kind: ScoreFactorKind::Duration,
            value: duration,
            weight: rubric.duration_weight,
            notes: format!("{} month term", plan.term_months),
        },
        ScoreFactor {
            kind: ScoreFactorKind::Necessity,
            value: necessity,
            weight: rubric.necessity_weight,
            notes: format!("declared necessity {}/10", plan.necessity),
        },
    ];

    let composite: f64 = factors
        .iter()
        .map(|factor| factor.value * factor.weight)
        .sum();

    (factors, (composite * 10.0).round() / 10.0)
}
