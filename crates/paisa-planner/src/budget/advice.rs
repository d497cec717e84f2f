//! Rule-based alerts and tips derived from the optimized budget.

use serde::{Deserialize, Serialize};

use super::domain::{Expense, ExpensePriority};

/// Human-readable guidance attached to an analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub alerts: Vec<String>,
    pub tips: Vec<String>,
}

/// Interpret the optimized budget: alerts for situations needing action,
/// tips that always apply. `expenses` is the combined fixed plus optimized
/// reducible list, excluding installment payments.
pub fn advise(
    income: f64,
    expenses: &[Expense],
    emi_total: f64,
    recommended_payment: Option<f64>,
    income_cap_ratio: f64,
) -> Advice {
    let mut alerts = Vec::new();
    let mut tips = Vec::new();

    let expense_total: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let balance = income - expense_total - emi_total;
    let savings_rate = if income > 0.0 {
        balance / income * 100.0
    } else {
        0.0
    };

    if balance < 0.0 {
        alerts.push("Your expenses exceed your income. Immediate action required.".to_string());
    }
    if (0.0..10.0).contains(&savings_rate) {
        alerts.push(
            "Your savings rate is below 10%. Consider reducing non-essential expenses."
                .to_string(),
        );
    }
    if let Some(payment) = recommended_payment {
        if payment > income * income_cap_ratio {
            alerts.push(format!(
                "The recommended installment exceeds {:.0}% of your income, which is higher than advised.",
                income_cap_ratio * 100.0
            ));
        }
    }

    tips.push(
        "Try the 50/30/20 rule: 50% for needs, 30% for wants, and 20% for savings.".to_string(),
    );
    tips.push("Consider automating your savings with a standing transfer.".to_string());
    tips.push("Review your subscriptions and cancel those you rarely use.".to_string());
    tips.push("Look for ways to grow income through side work or skill development.".to_string());

    let cuttable_high_priority = expenses
        .iter()
        .any(|expense| expense.priority == ExpensePriority::High && !expense.locked);
    if cuttable_high_priority {
        tips.push("Review high priority expenses carefully before making cuts.".to_string());
    }

    Advice { alerts, tips }
}
