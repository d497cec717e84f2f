use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How aggressively an expense may be trimmed during optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpensePriority {
    High,
    Medium,
    Low,
}

impl ExpensePriority {
    /// Maximum fraction of the original amount the optimizer may cut.
    pub fn reduction_cap(self) -> f64 {
        match self {
            ExpensePriority::High => 0.1,
            ExpensePriority::Medium => 0.4,
            ExpensePriority::Low => 0.7,
        }
    }

    /// Cut order: low-priority spending gives way first.
    pub(crate) fn cut_rank(self) -> u8 {
        match self {
            ExpensePriority::Low => 0,
            ExpensePriority::Medium => 1,
            ExpensePriority::High => 2,
        }
    }
}

/// A named monthly outflow. Locked expenses are never reduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: f64,
    pub priority: ExpensePriority,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalKind {
    Savings,
    Investment,
    Purchase,
}

/// Target the user is saving toward; `monthly_target` is what the optimizer
/// tries to free up each month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub kind: GoalKind,
    pub target_amount: f64,
    pub monthly_target: f64,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub description: String,
}
