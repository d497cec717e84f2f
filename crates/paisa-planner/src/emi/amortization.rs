//! Fixed-payment amortization math.

/// Reasons a payment cannot be computed. Invalid inputs surface as typed
/// errors rather than a zero sentinel, so a zero payment is never ambiguous
/// between "not computable" and a legitimate straight-line result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AmortizationError {
    #[error("principal must be a positive amount, got {0}")]
    NonPositivePrincipal(f64),
    #[error("term must be at least one month")]
    ZeroTerm,
    #[error("annual interest rate must not be negative, got {0}")]
    NegativeRate(f64),
    #[error("principal and rate must be finite numbers")]
    NonFiniteInput,
}

/// Standard fixed-payment amortization: `P * r * (1+r)^n / ((1+r)^n - 1)`
/// where `r` is the monthly rate, with a straight-line branch when the rate
/// is zero. Returns the exact payment; callers round once when storing so
/// displayed and scored values cannot drift.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> Result<f64, AmortizationError> {
    if !principal.is_finite() || !annual_rate_percent.is_finite() {
        return Err(AmortizationError::NonFiniteInput);
    }
    if principal <= 0.0 {
        return Err(AmortizationError::NonPositivePrincipal(principal));
    }
    if term_months == 0 {
        return Err(AmortizationError::ZeroTerm);
    }
    if annual_rate_percent < 0.0 {
        return Err(AmortizationError::NegativeRate(annual_rate_percent));
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let term = f64::from(term_months);

    if monthly_rate == 0.0 {
        return Ok(principal / term);
    }

    let growth = (1.0 + monthly_rate).powf(term);
    Ok(principal * monthly_rate * growth / (growth - 1.0))
}
