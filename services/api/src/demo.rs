use crate::infra::default_scoring_rubric;
use clap::Args;
use paisa_planner::budget::{AnalysisRequest, BudgetPlannerService, Expense, ExpensePriority};
use paisa_planner::emi::{LoanPlan, LoanPlanDraft, PlanId, ScoringEngine};
use paisa_planner::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct EmiScoreArgs {
    /// Loan principal
    #[arg(long)]
    pub(crate) principal: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) annual_rate: f64,
    /// Repayment term in months
    #[arg(long)]
    pub(crate) term_months: u32,
    /// Necessity rating from 1 (luxury) to 10 (essential)
    #[arg(long, default_value_t = 5)]
    pub(crate) necessity: u8,
    /// Monthly income; when provided the plan is also scored
    #[arg(long)]
    pub(crate) income: Option<f64>,
    /// Total of EMIs already being serviced
    #[arg(long, default_value_t = 0.0)]
    pub(crate) existing_emi: f64,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Monthly take-home salary for the demo household
    #[arg(long, default_value_t = 80_000.0)]
    pub(crate) salary: f64,
    /// Monthly savings goal the optimizer should chase
    #[arg(long, default_value_t = 15_000.0)]
    pub(crate) savings_target: f64,
}

pub(crate) fn run_emi_score(args: EmiScoreArgs) -> Result<(), AppError> {
    let EmiScoreArgs {
        principal,
        annual_rate,
        term_months,
        necessity,
        income,
        existing_emi,
    } = args;

    let draft = LoanPlanDraft {
        label: "cli".to_string(),
        principal,
        annual_rate,
        term_months,
        necessity,
    };
    let plan = match LoanPlan::from_draft(PlanId("cli-plan".to_string()), draft) {
        Ok(plan) => plan,
        Err(err) => {
            println!("Plan rejected: {}", err);
            return Ok(());
        }
    };

    println!("EMI schedule");
    println!("- Principal: {:.2}", plan.principal);
    println!(
        "- Rate: {:.2}% over {} months",
        plan.annual_rate, plan.term_months
    );
    println!("- Monthly payment: {:.2}", plan.monthly_payment);
    println!("- Total interest: {:.2}", plan.total_interest());

    if let Some(income) = income {
        let rubric = default_scoring_rubric();
        let ceiling = rubric.affordability_ceiling(income, existing_emi);
        let engine = ScoringEngine::new(rubric);
        let scored = engine.score(&plan, ceiling);

        println!("\nScore breakdown (ceiling {:.2})", ceiling);
        for factor in &scored.factors {
            println!(
                "- {:?}: {:.2} x {:.2} ({})",
                factor.kind, factor.value, factor.weight, factor.notes
            );
        }
        println!("- Composite: {:.1} / 10", scored.score);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        salary,
        savings_target,
    } = args;

    println!("Paisa planner demo");

    let request = AnalysisRequest {
        salary,
        fixed_expenses: vec![
            expense("Rent", 18_000.0, ExpensePriority::High, true),
            expense("Groceries", 7_000.0, ExpensePriority::High, false),
        ],
        reducible_expenses: vec![
            expense("Dining out", 5_000.0, ExpensePriority::Low, false),
            expense("Streaming", 1_200.0, ExpensePriority::Low, false),
            expense("Gym", 2_000.0, ExpensePriority::Medium, false),
        ],
        plans: vec![
            demo_draft("Car Loan", 500_000.0, 9.2, 60, 6),
            demo_draft("Home Renovation", 800_000.0, 8.4, 120, 8),
            demo_draft("Gadget Upgrade", 120_000.0, 14.0, 24, 3),
        ],
        monthly_savings_target: savings_target,
    };

    let service = BudgetPlannerService::new(default_scoring_rubric());
    let report = service.analyze(request)?;

    println!("\nExpense optimization");
    for expense in &report.optimized_expenses {
        let lock_marker = if expense.locked { " [locked]" } else { "" };
        println!(
            "- {}: {:.2} ({:?}){}",
            expense.name, expense.amount, expense.priority, lock_marker
        );
    }
    println!("  {}", report.optimization.message);
    if report.used_fallback {
        println!("  (deep search engaged after the greedy pass fell short)");
    }

    println!(
        "\nLoan ranking (affordability ceiling {:.2})",
        report.plans.ceiling
    );
    for scored in &report.plans.scored {
        println!(
            "- {}: score {:.1}, EMI {:.2}, interest {:.2}",
            scored.plan.label, scored.score, scored.plan.monthly_payment, scored.total_interest
        );
    }
    match &report.plans.recommendation {
        Some(best) => println!("  Recommended: {}", best.plan.label),
        None => println!("  Recommended: none"),
    }

    println!("\nAdvice");
    for alert in &report.advice.alerts {
        println!("- ALERT: {}", alert);
    }
    for tip in &report.advice.tips {
        println!("- {}", tip);
    }

    Ok(())
}

fn expense(name: &str, amount: f64, priority: ExpensePriority, locked: bool) -> Expense {
    Expense {
        name: name.to_string(),
        amount,
        priority,
        locked,
    }
}

fn demo_draft(label: &str, principal: f64, annual_rate: f64, term_months: u32, necessity: u8) -> LoanPlanDraft {
    LoanPlanDraft {
        label: label.to_string(),
        principal,
        annual_rate,
        term_months,
        necessity,
    }
}
