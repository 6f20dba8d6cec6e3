//! Scenario memoization and comparison layer

mod key;
mod cache;
mod comparison;
mod runner;

pub use key::{quantize, CacheKey, PaymentMode};
pub use cache::SimulationCache;
pub use comparison::{
    build_comparison_scenarios, cached_simulation, ComparisonScenario, ScenarioVariants,
    DEFAULT_PAYMENT_OFFSETS, MIN_SCENARIO_PAYMENT,
};
pub use runner::ScenarioRunner;
