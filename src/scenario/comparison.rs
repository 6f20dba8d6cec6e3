//! Side-by-side payment strategy comparisons

use serde::{Deserialize, Serialize};

use super::cache::SimulationCache;
use super::key::CacheKey;
use crate::simulation::{simulate_fixed_payment, simulate_minimum_payment, PaymentPlan, PaymentScenario, SimulationInput, SimulationResult};

/// Fixed-mode scenarios never simulate a payment below this
pub const MIN_SCENARIO_PAYMENT: f64 = 1.0;

/// Offsets added to the base payment, in display order
pub const DEFAULT_PAYMENT_OFFSETS: [f64; 2] = [25.0, 50.0];

/// A labelled payment strategy and its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScenario {
    pub label: String,
    pub payment: f64,
    pub result: SimulationResult,
}

/// Payments to compare against the base scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioVariants {
    /// Fixed offsets, labelled "+$N"
    pub offsets: Vec<f64>,

    /// Caller-chosen extra on top of the base payment
    pub extra_payment: f64,
}

impl ScenarioVariants {
    pub fn with_extra(extra_payment: f64) -> Self {
        Self {
            extra_payment,
            ..Default::default()
        }
    }
}

impl Default for ScenarioVariants {
    fn default() -> Self {
        Self {
            offsets: DEFAULT_PAYMENT_OFFSETS.to_vec(),
            extra_payment: 25.0,
        }
    }
}

/// Simulate a scenario through the cache
pub fn cached_simulation(cache: &SimulationCache, scenario: &PaymentScenario) -> SimulationResult {
    let key = CacheKey::for_scenario(scenario);
    cache.get_or_simulate(key, || match &scenario.plan {
        PaymentPlan::Fixed { monthly_payment } => simulate_fixed_payment(&SimulationInput {
            balance: scenario.balance,
            apr: scenario.apr,
            monthly_payment: *monthly_payment,
            include_compounding: scenario.include_compounding,
            max_months: scenario.max_months,
        }),
        PaymentPlan::Minimum(policy) => simulate_minimum_payment(
            scenario.balance,
            scenario.apr,
            policy,
            scenario.include_compounding,
            scenario.max_months,
        ),
    })
}

/// Build the comparison set for a base scenario
///
/// Fixed mode yields base, each offset in order, then the custom extra.
/// Minimum mode yields a single entry, since the payment depends on the balance.
pub fn build_comparison_scenarios(
    cache: &SimulationCache,
    base: &PaymentScenario,
    variants: &ScenarioVariants,
) -> Vec<ComparisonScenario> {
    match &base.plan {
        PaymentPlan::Fixed { monthly_payment } => {
            let base_payment = *monthly_payment;
            let mut payments = Vec::with_capacity(variants.offsets.len() + 2);
            payments.push(("Current".to_string(), base_payment));
            for offset in &variants.offsets {
                payments.push((format!("+${}", offset), base_payment + offset));
            }
            payments.push(("Your extra".to_string(), base_payment + variants.extra_payment));

            payments
                .into_iter()
                .map(|(label, payment)| {
                    let simulated = base.with_fixed_payment(payment.max(MIN_SCENARIO_PAYMENT));
                    ComparisonScenario {
                        label,
                        payment,
                        result: cached_simulation(cache, &simulated),
                    }
                })
                .collect()
        }
        PaymentPlan::Minimum(_) => vec![ComparisonScenario {
            label: "Current minimum".to_string(),
            payment: base.plan.first_payment(base.balance),
            result: cached_simulation(cache, base),
        }],
    }
}
