//! Card Payoff - Credit card payoff simulation engine
//!
//! This library provides:
//! - Month-by-month amortization under a fixed payment or an issuer-style minimum
//! - Negative amortization detection and a hard month ceiling
//! - Memoized simulations keyed on quantized inputs
//! - Side-by-side comparison scenarios and derived payoff guidance

pub mod error;
pub mod simulation;
pub mod scenario;
pub mod insight;
pub mod config;
pub mod loader;
pub mod report;

// Re-export commonly used types
pub use error::PayoffError;
pub use simulation::{
    simulate_fixed_payment, simulate_minimum_payment, AmortizationEngine, MinimumPaymentPolicy, PaymentPlan,
    PaymentScenario, SimulationInput, SimulationResult,
};
pub use scenario::{build_comparison_scenarios, CacheKey, ComparisonScenario, ScenarioRunner, ScenarioVariants, SimulationCache};
pub use config::{RequestMode, ScenarioRequest};
pub use report::PayoffReport;
