//! Balance state tracking for a single payoff simulation

/// Remaining balance at or below this is treated as fully paid
pub const PAID_OFF_EPSILON: f64 = 0.0001;

/// State of the card balance at a point in time during simulation
#[derive(Debug, Clone)]
pub struct BalanceState {
    /// Months simulated so far
    pub month: u32,

    /// Beginning of period balance
    pub balance: f64,

    /// Monthly periodic rate (APR / 12 / 100)
    pub monthly_rate: f64,

    /// Cumulative interest charged
    pub total_interest: f64,

    /// Sticky: set once any month's payment fails to cover its interest
    pub negative_amortization: bool,
}

impl BalanceState {
    /// Initialize state at simulation start, clamping negative inputs to zero
    pub fn new(balance: f64, apr: f64) -> Self {
        Self {
            month: 0,
            balance: balance.max(0.0),
            monthly_rate: apr.max(0.0) / 12.0 / 100.0,
            total_interest: 0.0,
            negative_amortization: false,
        }
    }

    /// Interest charged on the current balance for one month
    pub fn interest_due(&self) -> f64 {
        self.balance * self.monthly_rate
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= PAID_OFF_EPSILON
    }

    pub fn flag_underpayment(&mut self, underpaid: bool) {
        self.negative_amortization |= underpaid;
    }

    /// Close out the month with the new ending balance
    pub fn advance_month(&mut self, eop_balance: f64) {
        self.balance = eop_balance;
        self.month += 1;
    }
}
