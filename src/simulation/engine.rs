//! Core amortization engine for monthly payoff simulations

use log::debug;

use super::input::{FixedPayment, MinimumPaymentPolicy, PaymentPlan, PaymentRule, SimulationInput, DEFAULT_MAX_MONTHS};
use super::result::{Projection, ScheduleRow, SimulationResult};
use super::state::BalanceState;

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Add unpaid interest to the balance before the payment is applied
    pub include_compounding: bool,

    /// Hard iteration ceiling
    pub max_months: u32,

    /// Whether to record a schedule row per month
    pub detailed_output: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            include_compounding: true,
            max_months: DEFAULT_MAX_MONTHS,
            detailed_output: false,
        }
    }
}

/// Main amortization engine
pub struct AmortizationEngine {
    config: SimulationConfig,
}

impl AmortizationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Project a balance forward under the given payment rule until payoff or the month ceiling
    pub fn project<R: PaymentRule + ?Sized>(&self, balance: f64, apr: f64, rule: &R) -> Projection {
        let mut state = BalanceState::new(balance, apr);
        let starting_balance = state.balance;
        let mut schedule = Vec::new();

        while !state.is_paid_off() && state.month < self.config.max_months {
            let row = self.calculate_month(&mut state, rule);
            if self.config.detailed_output {
                schedule.push(row);
            }
        }

        let paid_off = state.is_paid_off();
        if !paid_off {
            debug!(
                "balance {:.2} not paid off within {} months (remaining {:.2})",
                starting_balance, self.config.max_months, state.balance
            );
        }

        let result = SimulationResult {
            months_to_payoff: paid_off.then_some(state.month),
            total_interest: state.total_interest,
            total_paid: starting_balance + state.total_interest,
            negative_amortization_risk: state.negative_amortization,
            reached_max_months: !paid_off,
        };

        Projection { result, schedule }
    }

    /// Project a scenario's payment plan
    pub fn project_plan(&self, balance: f64, apr: f64, plan: &PaymentPlan) -> Projection {
        match plan {
            PaymentPlan::Fixed { monthly_payment } => self.project(balance, apr, &FixedPayment(*monthly_payment)),
            PaymentPlan::Minimum(policy) => self.project(balance, apr, policy),
        }
    }

    /// Apply one month of interest and payment to the state
    fn calculate_month<R: PaymentRule + ?Sized>(&self, state: &mut BalanceState, rule: &R) -> ScheduleRow {
        let bop_balance = state.balance;
        let payment = rule.payment_for(bop_balance);
        let interest = state.interest_due();

        let mut underpaid = payment <= interest;
        state.total_interest += interest;

        let eop_balance = if self.config.include_compounding {
            let accrued = bop_balance + interest;
            accrued - payment.min(accrued)
        } else {
            // Interest is settled from the payment but never added to principal.
            // The applied amount is checked separately from the raw payment.
            let principal_reduction = (payment - interest).max(0.0);
            let payment_applied = payment.min(bop_balance + interest);
            if payment_applied < interest {
                underpaid = true;
            }
            (bop_balance - principal_reduction).max(0.0)
        };

        state.flag_underpayment(underpaid);
        state.advance_month(eop_balance);

        ScheduleRow {
            month: state.month,
            bop_balance,
            payment,
            interest,
            principal: bop_balance - eop_balance,
            eop_balance,
            cumulative_interest: state.total_interest,
            underpaid,
        }
    }
}

/// Simulate a fixed monthly payment
pub fn simulate_fixed_payment(input: &SimulationInput) -> SimulationResult {
    let engine = AmortizationEngine::new(SimulationConfig {
        include_compounding: input.include_compounding,
        max_months: input.max_months,
        detailed_output: false,
    });
    engine
        .project(input.balance, input.apr, &FixedPayment(input.monthly_payment))
        .result
}

/// Simulate an issuer-style minimum payment recomputed from the balance each month
pub fn simulate_minimum_payment(
    balance: f64,
    apr: f64,
    policy: &MinimumPaymentPolicy,
    include_compounding: bool,
    max_months: u32,
) -> SimulationResult {
    let engine = AmortizationEngine::new(SimulationConfig {
        include_compounding,
        max_months,
        detailed_output: false,
    });
    engine.project(balance, apr, policy).result
}
