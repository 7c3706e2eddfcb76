//! Classifiers over the aggregate state
//!
//! Each classifier is a pure function of the state it reads. [`classify`]
//! runs them all and bundles the results with a copy of the run metrics.

use crate::state::{AggregateState, Metrics, PackageTiming, SlowRecord, TestKey};
use std::collections::BTreeMap;
use tracing::debug;

pub mod failures;
pub mod flaky;
pub mod packages;
pub mod races;
pub mod slowest;

pub use failures::classify_failures;
pub use flaky::{classify_flaky, FlakyTest};
pub use packages::classify_packages;
pub use races::{classify_races, classify_races_with, RaceGroup, RaceSummary};
pub use slowest::classify_slowest;

/// Every classification of one run, ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub flaky: Vec<FlakyTest>,
    /// All executions, slowest first.
    pub slowest: Vec<SlowRecord>,
    pub races: RaceSummary,
    /// Packages, slowest first.
    pub packages: Vec<PackageTiming>,
    /// Joined output of each failing test, in key order.
    pub failures: BTreeMap<TestKey, String>,
    /// Run metrics, including the `flaky` counter when any flaky test exists.
    pub metrics: Metrics,
}

/// Runs every classifier over `state`.
pub fn classify(state: &AggregateState) -> Classification {
    let flaky = classify_flaky(&state.passed, &state.failed);
    let slowest = classify_slowest(&state.slow_records);
    let races = classify_races(&state.races);
    let packages = classify_packages(&state.packages);
    let failures = classify_failures(&state.failures);

    let mut metrics = state.metrics.clone();
    if !flaky.is_empty() {
        metrics.set("flaky", flaky.len());
    }

    debug!(
        flaky = flaky.len(),
        executions = slowest.len(),
        races = races.total,
        unique_races = races.unique(),
        packages = packages.len(),
        failures = failures.len(),
        "classified run"
    );

    Classification {
        flaky,
        slowest,
        races,
        packages,
        failures,
        metrics,
    }
}
