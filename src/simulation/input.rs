//! Simulation inputs and payment rules

use serde::{Deserialize, Serialize};

/// Default iteration ceiling (50 years of monthly statements)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Inputs for a fixed-payment simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Starting principal
    pub balance: f64,

    /// Annual percentage rate as a percent (24.99 means 24.99%)
    pub apr: f64,

    /// Fixed amount paid every month
    pub monthly_payment: f64,

    /// Add unpaid interest back into the balance before the payment is applied
    pub include_compounding: bool,

    /// Hard iteration ceiling
    pub max_months: u32,
}

impl SimulationInput {
    pub fn new(balance: f64, apr: f64, monthly_payment: f64) -> Self {
        Self {
            balance,
            apr,
            monthly_payment,
            include_compounding: true,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }

    /// Copy of this input with a different monthly payment
    pub fn with_payment(&self, monthly_payment: f64) -> Self {
        Self { monthly_payment, ..*self }
    }
}

/// Issuer-style minimum payment, recomputed from the balance every month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumPaymentPolicy {
    /// Percent of the current balance due each month
    pub min_percent: f64,

    /// Minimum absolute payment regardless of the percentage
    pub floor_amount: f64,

    /// Fixed amount paid on top of the computed minimum
    pub extra_payment: f64,
}

impl MinimumPaymentPolicy {
    pub fn new(min_percent: f64, floor_amount: f64) -> Self {
        Self {
            min_percent,
            floor_amount,
            extra_payment: 0.0,
        }
    }

    pub fn with_extra(mut self, extra_payment: f64) -> Self {
        self.extra_payment = extra_payment;
        self
    }

    /// Minimum due before any extra payment
    pub fn minimum_due(&self, balance: f64) -> f64 {
        let pct_due = self.min_percent.max(0.0) / 100.0 * balance.max(0.0);
        self.floor_amount.max(0.0).max(pct_due)
    }
}

impl Default for MinimumPaymentPolicy {
    fn default() -> Self {
        Self::new(2.0, 25.0)
    }
}

/// Rule that decides how much is paid in a month given the balance owed
pub trait PaymentRule {
    fn payment_for(&self, balance: f64) -> f64;
}

/// Same payment every month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPayment(pub f64);

impl PaymentRule for FixedPayment {
    fn payment_for(&self, _balance: f64) -> f64 {
        self.0.max(0.0)
    }
}

impl PaymentRule for MinimumPaymentPolicy {
    fn payment_for(&self, balance: f64) -> f64 {
        self.minimum_due(balance) + self.extra_payment.max(0.0)
    }
}

/// Payment policy of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PaymentPlan {
    /// Fixed monthly payment
    Fixed { monthly_payment: f64 },
    /// Dynamic issuer minimum
    Minimum(MinimumPaymentPolicy),
}

impl PaymentPlan {
    /// Payment due in the first month for the given starting balance
    pub fn first_payment(&self, balance: f64) -> f64 {
        match self {
            PaymentPlan::Fixed { monthly_payment } => FixedPayment(*monthly_payment).payment_for(balance),
            PaymentPlan::Minimum(policy) => policy.payment_for(balance),
        }
    }

    pub fn is_minimum(&self) -> bool {
        matches!(self, PaymentPlan::Minimum(_))
    }
}

/// Balance, rate and payment plan for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentScenario {
    pub balance: f64,
    pub apr: f64,
    pub plan: PaymentPlan,
    pub include_compounding: bool,
    pub max_months: u32,
}

impl PaymentScenario {
    pub fn fixed(balance: f64, apr: f64, monthly_payment: f64) -> Self {
        Self {
            balance,
            apr,
            plan: PaymentPlan::Fixed { monthly_payment },
            include_compounding: true,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }

    pub fn minimum(balance: f64, apr: f64, policy: MinimumPaymentPolicy) -> Self {
        Self {
            balance,
            apr,
            plan: PaymentPlan::Minimum(policy),
            include_compounding: true,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }

    pub fn with_compounding(mut self, include_compounding: bool) -> Self {
        self.include_compounding = include_compounding;
        self
    }

    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.max_months = max_months;
        self
    }

    /// Same scenario paying a different fixed amount
    pub fn with_fixed_payment(&self, monthly_payment: f64) -> Self {
        Self {
            plan: PaymentPlan::Fixed { monthly_payment },
            ..*self
        }
    }
}
