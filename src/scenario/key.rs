//! Quantized cache keys for simulation results

use crate::simulation::{PaymentPlan, PaymentScenario, SimulationInput};

/// Payment policy tag carried in a cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMode {
    Fixed,
    Minimum,
}

/// Round to hundredths (cents for currency, basis points for percents)
///
/// Rounding happens before hashing so inputs that differ only by
/// floating-point noise land on the same key.
pub fn quantize(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Hashable projection of every input that affects a simulation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub mode: PaymentMode,
    pub balance: i64,
    pub apr: i64,
    /// Fixed payment, or the extra payment in minimum mode
    pub payment: i64,
    pub min_percent: i64,
    pub floor: i64,
    pub include_compounding: bool,
    pub max_months: u32,
}

impl CacheKey {
    pub fn for_fixed(input: &SimulationInput) -> Self {
        Self {
            mode: PaymentMode::Fixed,
            balance: quantize(input.balance),
            apr: quantize(input.apr),
            payment: quantize(input.monthly_payment),
            min_percent: 0,
            floor: 0,
            include_compounding: input.include_compounding,
            max_months: input.max_months,
        }
    }

    pub fn for_scenario(scenario: &PaymentScenario) -> Self {
        let (mode, payment, min_percent, floor) = match &scenario.plan {
            PaymentPlan::Fixed { monthly_payment } => (PaymentMode::Fixed, *monthly_payment, 0.0, 0.0),
            PaymentPlan::Minimum(policy) => (
                PaymentMode::Minimum,
                policy.extra_payment,
                policy.min_percent,
                policy.floor_amount,
            ),
        };

        Self {
            mode,
            balance: quantize(scenario.balance),
            apr: quantize(scenario.apr),
            payment: quantize(payment),
            min_percent: quantize(min_percent),
            floor: quantize(floor),
            include_compounding: scenario.include_compounding,
            max_months: scenario.max_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::MinimumPaymentPolicy;

    #[test]
    fn test_quantize_rounds_to_hundredths() {
        assert_eq!(quantize(24.99), 2499);
        assert_eq!(quantize(0.1 + 0.2), 30);
        assert_eq!(quantize(1899.999), 190000);
        assert_eq!(quantize(-0.004), 0);
    }

    #[test]
    fn test_float_noise_collapses_to_same_key() {
        let a = CacheKey::for_fixed(&SimulationInput::new(1900.0, 24.99, 60.0));
        let b = CacheKey::for_fixed(&SimulationInput::new(1900.0000001, 24.990000001, 59.9999999));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mode_and_compounding_separate_keys() {
        let fixed = PaymentScenario::fixed(1900.0, 24.99, 25.0);
        let minimum = PaymentScenario::minimum(1900.0, 24.99, MinimumPaymentPolicy::new(0.0, 0.0).with_extra(25.0));
        assert_ne!(CacheKey::for_scenario(&fixed), CacheKey::for_scenario(&minimum));

        let simple = fixed.with_compounding(false);
        assert_ne!(CacheKey::for_scenario(&fixed), CacheKey::for_scenario(&simple));
    }

    #[test]
    fn test_scenario_key_matches_input_key() {
        let scenario = PaymentScenario::fixed(1200.0, 18.5, 75.0);
        let input = SimulationInput::new(1200.0, 18.5, 75.0);
        assert_eq!(CacheKey::for_scenario(&scenario), CacheKey::for_fixed(&input));
    }
}
