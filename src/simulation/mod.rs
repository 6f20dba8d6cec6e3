//! Amortization simulator for fixed and minimum-payment policies

mod state;
mod input;
mod engine;
mod result;

pub use state::{BalanceState, PAID_OFF_EPSILON};
pub use input::{
    FixedPayment, MinimumPaymentPolicy, PaymentPlan, PaymentRule, PaymentScenario, SimulationInput,
    DEFAULT_MAX_MONTHS,
};
pub use engine::{simulate_fixed_payment, simulate_minimum_payment, AmortizationEngine, SimulationConfig};
pub use result::{Projection, ScheduleRow, SimulationResult};
