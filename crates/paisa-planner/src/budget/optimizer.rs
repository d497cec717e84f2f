//! Greedy reduction of reducible expenses toward a monthly savings target.

use serde::{Deserialize, Serialize};

use super::domain::Expense;

/// Outcome summary of an optimization pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationStatus {
    pub actual_savings: f64,
    pub goal_met: bool,
    pub gap_remaining: f64,
    pub message: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Trim reducible expenses until the net savings target is met, walking Low,
/// then Medium, then High priority, each capped by its priority's maximum
/// reduction. Locked expenses are untouched. The returned list preserves the
/// input order so callers can zip it against the original.
///
/// Net savings = `income - (fixed_total + emi_total + sum(reducible))`.
pub fn optimize_reducible(
    reducible: &[Expense],
    income: f64,
    fixed_total: f64,
    emi_total: f64,
    monthly_target: f64,
) -> (Vec<Expense>, OptimizationStatus) {
    let mut amounts: Vec<f64> = reducible.iter().map(|expense| expense.amount).collect();

    let mut order: Vec<usize> = (0..reducible.len()).collect();
    order.sort_by_key(|&idx| reducible[idx].priority.cut_rank());

    for idx in order {
        let expense = &reducible[idx];
        if expense.locked {
            continue;
        }

        let current_total: f64 = amounts.iter().sum();
        let net_savings = income - (fixed_total + emi_total + current_total);
        if net_savings >= monthly_target {
            break;
        }

        let needed = monthly_target - net_savings;
        let max_reduction = expense.amount * expense.priority.reduction_cap();
        let reduction = max_reduction.min(needed).min(expense.amount);
        amounts[idx] = round2(expense.amount - reduction);
    }

    let optimized: Vec<Expense> = reducible
        .iter()
        .zip(&amounts)
        .map(|(expense, &amount)| Expense {
            amount,
            ..expense.clone()
        })
        .collect();

    let status = status_for(&optimized, income, fixed_total, emi_total, monthly_target);
    (optimized, status)
}

/// Build the status summary for any optimized reducible list, greedy or
/// fallback.
pub(crate) fn status_for(
    optimized: &[Expense],
    income: f64,
    fixed_total: f64,
    emi_total: f64,
    monthly_target: f64,
) -> OptimizationStatus {
    let reducible_total: f64 = optimized.iter().map(|expense| expense.amount).sum();
    let net_savings = income - (fixed_total + emi_total + reducible_total);
    let goal_met = net_savings >= monthly_target;
    let gap_remaining = (monthly_target - net_savings).max(0.0);

    let nothing_to_cut = optimized.is_empty() || optimized.iter().all(|expense| expense.locked);
    let message = if goal_met {
        format!(
            "Savings goal met: net savings {:.0} covers the target {:.0}.",
            net_savings, monthly_target
        )
    } else if nothing_to_cut {
        "No reducible expenses could be optimized; everything is locked or fixed. \
         Lower a priority or relax the savings target."
            .to_string()
    } else {
        format!(
            "Partial optimization: net savings {:.0} of the target {:.0}; gap remaining {:.0}.",
            net_savings, monthly_target, gap_remaining
        )
    };

    OptimizationStatus {
        actual_savings: round2(net_savings),
        goal_met,
        gap_remaining: round2(gap_remaining),
        message,
    }
}
