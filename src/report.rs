//! Full payoff report for one request

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{RequestMode, ScenarioRequest};
use crate::insight::{
    estimated_current_minimum_payment, estimated_monthly_interest, projected_payoff_date, ExtraPaymentSavings,
    PayoffOutlook, PayoffWarning,
};
use crate::scenario::{ComparisonScenario, ScenarioRunner};

/// Everything a caller needs to display a payoff estimate
#[derive(Debug, Clone, Serialize)]
pub struct PayoffReport {
    pub request: ScenarioRequest,
    pub scenarios: Vec<ComparisonScenario>,
    pub outlook: PayoffOutlook,
    pub warning: Option<PayoffWarning>,
    /// Fixed mode only: base payment versus the custom extra
    pub savings: Option<ExtraPaymentSavings>,
    pub current_minimum_payment: f64,
    pub monthly_interest: f64,
    pub payoff_date: Option<NaiveDate>,
}

impl PayoffReport {
    pub fn build(runner: &ScenarioRunner, request: &ScenarioRequest, start: NaiveDate) -> Self {
        let base = request.base_scenario();
        let minimum_mode = request.mode == RequestMode::Minimum;
        let scenarios = runner.comparison_scenarios(&base, &request.variants());

        let base_result = runner.simulate(&base);
        // The custom extra is always the last fixed-mode scenario
        let savings = match (minimum_mode, scenarios.last()) {
            (false, Some(extra)) => Some(ExtraPaymentSavings::between(&base_result, &extra.result)),
            _ => None,
        };

        Self {
            request: request.clone(),
            outlook: PayoffOutlook::from_result(&base_result, minimum_mode, request.max_months),
            warning: PayoffWarning::for_result(&base_result, minimum_mode),
            savings,
            current_minimum_payment: estimated_current_minimum_payment(request.balance, &request.minimum_policy()),
            monthly_interest: estimated_monthly_interest(request.balance, request.apr),
            payoff_date: projected_payoff_date(start, &base_result),
            scenarios,
        }
    }
}
