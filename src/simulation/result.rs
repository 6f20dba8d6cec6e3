//! Simulation output structures

use serde::{Deserialize, Serialize};

/// Summary of a payoff trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Months until payoff, absent when not paid off within the horizon
    pub months_to_payoff: Option<u32>,

    /// Cumulative interest charged across all simulated months
    pub total_interest: f64,

    /// Starting balance plus total interest
    pub total_paid: f64,

    /// Payment failed to cover the month's interest at least once
    pub negative_amortization_risk: bool,

    /// Loop exhausted the month ceiling without payoff
    pub reached_max_months: bool,
}

impl SimulationResult {
    /// Result for a balance that is already paid off
    pub fn paid_off_immediately() -> Self {
        Self {
            months_to_payoff: Some(0),
            total_interest: 0.0,
            total_paid: 0.0,
            negative_amortization_risk: false,
            reached_max_months: false,
        }
    }

    pub fn is_paid_off(&self) -> bool {
        self.months_to_payoff.is_some()
    }
}

/// One month of a detailed payoff schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-indexed month number
    pub month: u32,
    pub bop_balance: f64,
    pub payment: f64,
    pub interest: f64,
    /// Reduction of the balance this month (negative when it grew)
    pub principal: f64,
    pub eop_balance: f64,
    pub cumulative_interest: f64,
    /// Payment did not cover this month's interest
    pub underpaid: bool,
}

/// Summary plus the optional month-by-month schedule
#[derive(Debug, Clone)]
pub struct Projection {
    pub result: SimulationResult,
    pub schedule: Vec<ScheduleRow>,
}

impl Projection {
    /// Payment made in the first simulated month
    pub fn first_payment(&self) -> Option<f64> {
        self.schedule.first().map(|row| row.payment)
    }

    /// Largest balance seen at the end of any month
    pub fn peak_balance(&self) -> f64 {
        self.schedule
            .iter()
            .map(|row| row.eop_balance)
            .fold(0.0, f64::max)
    }
}
