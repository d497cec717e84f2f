//! Exhaustive fallback search for expense cuts when the greedy pass falls
//! short of the savings target.

use super::domain::Expense;

const REDUCTION_STEPS: u32 = 10;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Depth-first search over stepped reductions (ten steps up to each
/// priority's cap), keeping the deepest total cut that reaches the target.
/// Returns `None` when no combination of cuts can free up `savings_needed`.
///
/// The search is exponential in the number of expenses; the expected scale
/// is a handful of personal budget lines.
pub(crate) fn search_reduction_plan(
    reducible: &[Expense],
    savings_needed: f64,
) -> Option<Vec<Expense>> {
    let mut best: Option<(Vec<Expense>, f64)> = None;
    let mut current: Vec<Expense> = Vec::with_capacity(reducible.len());
    explore(reducible, 0, savings_needed, &mut current, 0.0, &mut best);
    best.map(|(expenses, _)| expenses)
}

fn explore(
    expenses: &[Expense],
    index: usize,
    target: f64,
    current: &mut Vec<Expense>,
    reduced: f64,
    best: &mut Option<(Vec<Expense>, f64)>,
) {
    if reduced >= target {
        let deeper = match best {
            Some((_, best_reduced)) => reduced > *best_reduced,
            None => true,
        };
        if deeper {
            let mut solution = current.clone();
            solution.extend_from_slice(&expenses[index..]);
            *best = Some((solution, reduced));
        }
        return;
    }

    let Some(expense) = expenses.get(index) else {
        return;
    };

    if expense.locked {
        current.push(expense.clone());
        explore(expenses, index + 1, target, current, reduced, best);
        current.pop();
        return;
    }

    let max_reduction = expense.amount * expense.priority.reduction_cap();
    for step in 0..=REDUCTION_STEPS {
        let reduction = max_reduction * f64::from(step) / f64::from(REDUCTION_STEPS);
        let mut cut = expense.clone();
        cut.amount = round2(expense.amount - reduction);
        current.push(cut);
        explore(expenses, index + 1, target, current, reduced + reduction, best);
        current.pop();
    }
}
