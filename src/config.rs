//! Scenario request configuration
//!
//! A request carries the editable inputs of a payoff estimate. Every field has a
//! default, so `{}` is a valid request.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PayoffError, Result};
use crate::scenario::ScenarioVariants;
use crate::simulation::{MinimumPaymentPolicy, PaymentScenario, DEFAULT_MAX_MONTHS};

/// Payment policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    #[default]
    Fixed,
    Minimum,
}

impl std::str::FromStr for RequestMode {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "standard" => Ok(RequestMode::Fixed),
            "minimum" => Ok(RequestMode::Minimum),
            other => Err(PayoffError::invalid("mode", format!("unknown mode '{}'", other))),
        }
    }
}

/// Inputs for one payoff estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    #[serde(default)]
    pub mode: RequestMode,

    #[serde(default = "default_balance")]
    pub balance: f64,

    /// APR as a percent
    #[serde(default = "default_apr")]
    pub apr: f64,

    /// Fixed monthly payment (fixed mode)
    #[serde(default = "default_payment")]
    pub payment: f64,

    /// Extra on top of the base payment
    #[serde(default = "default_extra_payment")]
    pub extra_payment: f64,

    #[serde(default = "default_true")]
    pub include_compounding: bool,

    /// Percent of balance due each month (minimum mode)
    #[serde(default = "default_min_percent")]
    pub min_percent: f64,

    /// Minimum absolute payment (minimum mode)
    #[serde(default = "default_floor_amount")]
    pub floor_amount: f64,

    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

fn default_balance() -> f64 { 1900.0 }
fn default_apr() -> f64 { 24.99 }
fn default_payment() -> f64 { 60.0 }
fn default_extra_payment() -> f64 { 25.0 }
fn default_true() -> bool { true }
fn default_min_percent() -> f64 { 2.0 }
fn default_floor_amount() -> f64 { 25.0 }
fn default_max_months() -> u32 { DEFAULT_MAX_MONTHS }

impl Default for ScenarioRequest {
    fn default() -> Self {
        Self {
            mode: RequestMode::Fixed,
            balance: default_balance(),
            apr: default_apr(),
            payment: default_payment(),
            extra_payment: default_extra_payment(),
            include_compounding: true,
            min_percent: default_min_percent(),
            floor_amount: default_floor_amount(),
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

impl ScenarioRequest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject values the simulator cannot clamp into something meaningful
    ///
    /// Negative amounts are allowed and clamped later; non-finite numbers and a
    /// zero horizon are not.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("balance", self.balance),
            ("apr", self.apr),
            ("payment", self.payment),
            ("extra_payment", self.extra_payment),
            ("min_percent", self.min_percent),
            ("floor_amount", self.floor_amount),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PayoffError::invalid(field, "must be a finite number"));
            }
        }
        if self.max_months == 0 {
            return Err(PayoffError::invalid("max_months", "must be greater than zero"));
        }
        Ok(())
    }

    pub fn minimum_policy(&self) -> MinimumPaymentPolicy {
        MinimumPaymentPolicy::new(self.min_percent, self.floor_amount)
    }

    /// Base scenario for this request
    ///
    /// Minimum mode simulates the bare minimum; the extra payment only feeds
    /// the fixed-mode comparison.
    pub fn base_scenario(&self) -> PaymentScenario {
        let scenario = match self.mode {
            RequestMode::Fixed => PaymentScenario::fixed(self.balance, self.apr, self.payment),
            RequestMode::Minimum => PaymentScenario::minimum(self.balance, self.apr, self.minimum_policy()),
        };
        scenario
            .with_compounding(self.include_compounding)
            .with_max_months(self.max_months)
    }

    pub fn variants(&self) -> ScenarioVariants {
        ScenarioVariants::with_extra(self.extra_payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::PaymentPlan;

    #[test]
    fn test_empty_json_uses_defaults() {
        let request = ScenarioRequest::from_json_str("{}").unwrap();
        assert_eq!(request, ScenarioRequest::default());
        assert_eq!(request.base_scenario(), PaymentScenario::fixed(1900.0, 24.99, 60.0));
    }

    #[test]
    fn test_minimum_mode_request() {
        let request = ScenarioRequest::from_json_str(
            r#"{"mode": "minimum", "balance": 4000, "min_percent": 3, "include_compounding": false}"#,
        )
        .unwrap();

        let scenario = request.base_scenario();
        assert!(!scenario.include_compounding);
        assert_eq!(scenario.plan, PaymentPlan::Minimum(MinimumPaymentPolicy::new(3.0, 25.0)));
    }

    #[test]
    fn test_invalid_requests() {
        assert!(matches!(
            ScenarioRequest::from_json_str(r#"{"max_months": 0}"#),
            Err(PayoffError::InvalidField { .. })
        ));
        assert!(matches!(
            ScenarioRequest::from_json_str(r#"{"mode": "weekly"}"#),
            Err(PayoffError::Json(_))
        ));
        assert!(matches!(
            ScenarioRequest::from_json_str("not json"),
            Err(PayoffError::Json(_))
        ));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Minimum".parse::<RequestMode>().unwrap(), RequestMode::Minimum);
        assert_eq!("standard".parse::<RequestMode>().unwrap(), RequestMode::Fixed);
        assert!("biweekly".parse::<RequestMode>().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let request = ScenarioRequest {
            apr: f64::NAN,
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
