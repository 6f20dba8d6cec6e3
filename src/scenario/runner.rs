//! Scenario runner for repeated and batch simulations
//!
//! Owns one cache so that callers re-deriving results on every input change
//! only pay for scenarios they have not seen yet.

use rayon::prelude::*;

use super::cache::SimulationCache;
use super::comparison::{build_comparison_scenarios, cached_simulation, ComparisonScenario, ScenarioVariants, MIN_SCENARIO_PAYMENT};
use crate::simulation::{AmortizationEngine, PaymentScenario, Projection, SimulationConfig, SimulationResult};

/// Memoizing scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let base = PaymentScenario::fixed(1900.0, 24.99, 60.0);
///
/// // Safe to call on every keystroke
/// let scenarios = runner.comparison_scenarios(&base, &ScenarioVariants::with_extra(40.0));
/// ```
#[derive(Debug, Default)]
pub struct ScenarioRunner {
    cache: SimulationCache,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary result for one scenario
    pub fn simulate(&self, scenario: &PaymentScenario) -> SimulationResult {
        cached_simulation(&self.cache, scenario)
    }

    /// Month-by-month schedule for one scenario (not cached)
    pub fn schedule(&self, scenario: &PaymentScenario) -> Projection {
        let engine = AmortizationEngine::new(SimulationConfig {
            include_compounding: scenario.include_compounding,
            max_months: scenario.max_months,
            detailed_output: true,
        });
        engine.project_plan(scenario.balance, scenario.apr, &scenario.plan)
    }

    pub fn comparison_scenarios(&self, base: &PaymentScenario, variants: &ScenarioVariants) -> Vec<ComparisonScenario> {
        build_comparison_scenarios(&self.cache, base, variants)
    }

    /// One fixed-payment scenario per payment, in input order
    pub fn sweep_payments(&self, base: &PaymentScenario, payments: &[f64]) -> Vec<ComparisonScenario> {
        payments
            .par_iter()
            .map(|&payment| {
                let scenario = base.with_fixed_payment(payment.max(MIN_SCENARIO_PAYMENT));
                ComparisonScenario {
                    label: format!("${:.2}/mo", payment),
                    payment,
                    result: self.simulate(&scenario),
                }
            })
            .collect()
    }

    /// Run many scenarios in parallel sharing the cache
    pub fn run_batch(&self, scenarios: &[PaymentScenario]) -> Vec<SimulationResult> {
        scenarios.par_iter().map(|s| self.simulate(s)).collect()
    }

    pub fn cache(&self) -> &SimulationCache {
        &self.cache
    }

    /// Drop all memoized results
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{simulate_fixed_payment, MinimumPaymentPolicy, SimulationInput};

    #[test]
    fn test_run_batch_matches_serial() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = [40.0, 60.0, 80.0, 60.0]
            .iter()
            .map(|&p| PaymentScenario::fixed(1900.0, 24.99, p))
            .collect();

        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), 4);
        assert_eq!(results[1], results[3]);
        assert_eq!(results[2], simulate_fixed_payment(&SimulationInput::new(1900.0, 24.99, 80.0)));
        assert_eq!(runner.cache().len(), 3);
    }

    #[test]
    fn test_sweep_payments_monotone() {
        let runner = ScenarioRunner::new();
        let base = PaymentScenario::fixed(5000.0, 22.9, 0.0);
        let payments: Vec<f64> = (1..=10).map(|i| 100.0 + 25.0 * i as f64).collect();

        let sweep = runner.sweep_payments(&base, &payments);
        assert_eq!(sweep.len(), payments.len());
        assert_eq!(sweep[0].label, "$125.00/mo");
        for pair in sweep.windows(2) {
            assert!(pair[1].result.total_interest <= pair[0].result.total_interest);
        }
    }

    #[test]
    fn test_schedule_matches_cached_summary() {
        let runner = ScenarioRunner::new();
        let scenario = PaymentScenario::minimum(3000.0, 19.0, MinimumPaymentPolicy::new(3.0, 30.0).with_extra(20.0));

        let projection = runner.schedule(&scenario);
        assert_eq!(projection.result, runner.simulate(&scenario));
        assert_eq!(projection.schedule.len() as u32, projection.result.months_to_payoff.unwrap());
    }

    #[test]
    fn test_clear_cache() {
        let runner = ScenarioRunner::new();
        runner.simulate(&PaymentScenario::fixed(800.0, 12.0, 100.0));
        assert!(!runner.cache().is_empty());

        runner.clear_cache();
        assert!(runner.cache().is_empty());
    }
}
