//! Derived payoff guidance
//!
//! Turns simulation results into the values a caller needs to explain them:
//! an outlook, at most one warning, and the savings from paying extra.
//! Currency formatting stays with the caller.

use std::fmt;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::simulation::{MinimumPaymentPolicy, SimulationResult};

/// Minimum-mode payoffs longer than this get a warning
pub const LONG_PAYOFF_MONTHS: u32 = 120;

/// Minimum due this month, before any extra payment
pub fn estimated_current_minimum_payment(balance: f64, policy: &MinimumPaymentPolicy) -> f64 {
    policy.minimum_due(balance)
}

/// Interest charged on the balance over one month
pub fn estimated_monthly_interest(balance: f64, apr: f64) -> f64 {
    balance.max(0.0) * (apr.max(0.0) / 12.0 / 100.0)
}

/// Headline outcome of a base scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayoffOutlook {
    PaidOff { months: u32 },
    /// Minimum payments never clear the balance within the horizon
    NoPayoffTrajectory,
    ExceedsHorizon { max_months: u32 },
}

impl PayoffOutlook {
    pub fn from_result(result: &SimulationResult, minimum_mode: bool, max_months: u32) -> Self {
        match result.months_to_payoff {
            Some(months) => PayoffOutlook::PaidOff { months },
            None if minimum_mode => PayoffOutlook::NoPayoffTrajectory,
            None => PayoffOutlook::ExceedsHorizon { max_months },
        }
    }
}

impl fmt::Display for PayoffOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffOutlook::PaidOff { months } => write!(f, "Estimated payoff: {} months", months),
            PayoffOutlook::NoPayoffTrajectory => write!(f, "No full payoff trajectory"),
            PayoffOutlook::ExceedsHorizon { max_months } => write!(f, "Payoff exceeds {} months", max_months),
        }
    }
}

/// User-facing warning derived from a base scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffWarning {
    MinimumBelowInterest,
    NeverPaysOff,
    NegativeAmortization,
    LongPayoff,
}

impl PayoffWarning {
    /// Highest-priority warning for a result, if any
    pub fn for_result(result: &SimulationResult, minimum_mode: bool) -> Option<Self> {
        let no_trajectory = minimum_mode && !result.is_paid_off();

        if no_trajectory {
            if result.negative_amortization_risk {
                return Some(PayoffWarning::MinimumBelowInterest);
            }
            return Some(PayoffWarning::NeverPaysOff);
        }

        if result.negative_amortization_risk {
            return Some(PayoffWarning::NegativeAmortization);
        }

        match result.months_to_payoff {
            Some(months) if minimum_mode && months > LONG_PAYOFF_MONTHS => Some(PayoffWarning::LongPayoff),
            _ => None,
        }
    }
}

impl fmt::Display for PayoffWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PayoffWarning::MinimumBelowInterest => {
                "The minimum payment can fall below monthly interest, so the balance may grow instead of shrinking."
            }
            PayoffWarning::NeverPaysOff => {
                "At this minimum setting the balance is not paid off within the horizon."
            }
            PayoffWarning::NegativeAmortization => {
                "The payment may be too low to reduce the balance (negative amortization risk)."
            }
            PayoffWarning::LongPayoff => "At this pace, payoff could take over 10 years.",
        };
        f.write_str(text)
    }
}

/// What paying extra saves relative to the base payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtraPaymentSavings {
    /// Interest avoided, never negative
    pub interest_saved: f64,

    /// Months shaved off, only known when both scenarios pay off
    pub months_saved: Option<u32>,
}

impl ExtraPaymentSavings {
    pub fn between(base: &SimulationResult, with_extra: &SimulationResult) -> Self {
        let months_saved = match (base.months_to_payoff, with_extra.months_to_payoff) {
            (Some(base_months), Some(extra_months)) => Some(base_months.saturating_sub(extra_months)),
            _ => None,
        };

        Self {
            interest_saved: (base.total_interest - with_extra.total_interest).max(0.0),
            months_saved,
        }
    }
}

/// Calendar month in which the balance is cleared, counting from `start`
pub fn projected_payoff_date(start: NaiveDate, result: &SimulationResult) -> Option<NaiveDate> {
    result
        .months_to_payoff
        .and_then(|months| start.checked_add_months(Months::new(months)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{simulate_fixed_payment, simulate_minimum_payment, SimulationInput};
    use approx::assert_abs_diff_eq;

    fn result(months: Option<u32>, interest: f64, risk: bool) -> SimulationResult {
        SimulationResult {
            months_to_payoff: months,
            total_interest: interest,
            total_paid: 1000.0 + interest,
            negative_amortization_risk: risk,
            reached_max_months: months.is_none(),
        }
    }

    #[test]
    fn test_estimates() {
        let policy = MinimumPaymentPolicy::new(2.0, 25.0).with_extra(100.0);
        assert_abs_diff_eq!(estimated_current_minimum_payment(1900.0, &policy), 38.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimated_monthly_interest(1200.0, 24.0), 24.0, epsilon = 1e-9);
        assert_eq!(estimated_monthly_interest(-10.0, 24.0), 0.0);
    }

    #[test]
    fn test_outlook() {
        assert_eq!(
            PayoffOutlook::from_result(&result(Some(26), 300.0, false), false, 600),
            PayoffOutlook::PaidOff { months: 26 }
        );
        assert_eq!(
            PayoffOutlook::from_result(&result(None, 9000.0, true), true, 600),
            PayoffOutlook::NoPayoffTrajectory
        );
        let exceeds = PayoffOutlook::from_result(&result(None, 9000.0, true), false, 600);
        assert_eq!(exceeds.to_string(), "Payoff exceeds 600 months");
    }

    #[test]
    fn test_warning_priority() {
        assert_eq!(
            PayoffWarning::for_result(&result(None, 0.0, true), true),
            Some(PayoffWarning::MinimumBelowInterest)
        );
        assert_eq!(
            PayoffWarning::for_result(&result(None, 0.0, false), true),
            Some(PayoffWarning::NeverPaysOff)
        );
        assert_eq!(
            PayoffWarning::for_result(&result(None, 0.0, true), false),
            Some(PayoffWarning::NegativeAmortization)
        );
        assert_eq!(
            PayoffWarning::for_result(&result(Some(121), 0.0, false), true),
            Some(PayoffWarning::LongPayoff)
        );
        assert_eq!(PayoffWarning::for_result(&result(Some(121), 0.0, false), false), None);
        assert_eq!(PayoffWarning::for_result(&result(Some(120), 0.0, false), true), None);
    }

    #[test]
    fn test_minimum_example_warns() {
        let policy = MinimumPaymentPolicy::new(2.0, 25.0);
        let base = simulate_minimum_payment(1900.0, 24.99, &policy, true, 600);
        assert!(PayoffWarning::for_result(&base, true).is_some());
    }

    #[test]
    fn test_savings_from_extra_payment() {
        let base = simulate_fixed_payment(&SimulationInput::new(1900.0, 24.99, 60.0));
        let extra = simulate_fixed_payment(&SimulationInput::new(1900.0, 24.99, 85.0));
        let savings = ExtraPaymentSavings::between(&base, &extra);

        assert!(savings.interest_saved > 0.0);
        let saved = savings.months_saved.unwrap();
        assert_eq!(saved, base.months_to_payoff.unwrap() - extra.months_to_payoff.unwrap());
        assert!(saved > 0);
    }

    #[test]
    fn test_savings_without_payoff() {
        let savings = ExtraPaymentSavings::between(&result(None, 500.0, true), &result(Some(40), 700.0, false));
        assert_eq!(savings.months_saved, None);
        assert_eq!(savings.interest_saved, 0.0);
    }

    #[test]
    fn test_projected_payoff_date() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let date = projected_payoff_date(start, &result(Some(1), 0.0, false)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(projected_payoff_date(start, &result(None, 0.0, true)), None);
    }
}
