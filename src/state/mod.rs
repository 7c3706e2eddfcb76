//! Aggregate state for a single test run
//!
//! The ingestion stage feeds finished [`TestOutcome`]s into an
//! [`AggregateState`]; classifiers then read it without modifying it. A fresh
//! state is required per run.
//!
//! # Examples
//!
//! ```
//! use teststat::state::{AggregateState, TestOutcome};
//!
//! let mut state = AggregateState::new(1.0);
//! state.ingest(&TestOutcome::fail("pkg", "TestFoo").with_elapsed(0.5));
//! state.ingest(&TestOutcome::pass("pkg", "TestFoo").with_elapsed(0.4));
//!
//! assert_eq!(state.metrics.count("pass"), 1);
//! assert_eq!(state.metrics.count("fail"), 1);
//! assert!(state.failures.is_empty());
//! ```

use crate::duration::secs_to_duration;
use crate::histogram::Histogram;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{trace, warn};

pub mod outcome;

pub use outcome::{Action, TestKey, TestOutcome};

/// One timed pass/fail execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SlowRecord {
    pub action: Action,
    pub package: String,
    pub test: String,
    pub elapsed: f64,
}

/// A raw race-detector dump and the test that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceIncident {
    pub test: String,
    pub text: String,
}

/// Accumulated elapsed time of one package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageTiming {
    pub package: String,
    pub elapsed: f64,
}

/// Running counters and timings for the whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    /// Counters by label, ordered by label.
    pub counts: BTreeMap<String, usize>,
    /// Total elapsed time reported by packages.
    pub elapsed: Duration,
    /// Total elapsed time of executions at or above the slow threshold.
    pub elapsed_slow: Duration,
    /// Distribution of every pass/fail elapsed value, in seconds.
    pub histogram: Histogram,
}

impl Metrics {
    /// Increments the counter for `label`.
    pub fn increment(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    /// Sets the counter for `label`.
    pub fn set(&mut self, label: &str, value: usize) {
        self.counts.insert(label.to_string(), value);
    }

    /// Returns the counter for `label`, zero if never touched.
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Renders counters as `label:value` pairs separated by spaces.
    pub fn format_counts(&self) -> String {
        self.counts
            .iter()
            .map(|(label, value)| format!("{}:{}", label, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything accumulated about one run.
#[derive(Debug, Clone, Default)]
pub struct AggregateState {
    /// Executions at or above this many seconds count as slow.
    pub slow_threshold: f64,
    /// Pass counts per test.
    pub passed: BTreeMap<TestKey, usize>,
    /// Fail counts per test.
    pub failed: BTreeMap<TestKey, usize>,
    /// Every pass/fail execution, in arrival order.
    pub slow_records: Vec<SlowRecord>,
    /// Package timings, in order of first appearance.
    pub packages: Vec<PackageTiming>,
    /// Race dumps, in arrival order.
    pub races: Vec<RaceIncident>,
    /// Captured output of tests whose latest execution failed.
    pub failures: BTreeMap<TestKey, Vec<String>>,
    pub metrics: Metrics,
}

impl AggregateState {
    /// Creates an empty state using the given slow threshold in seconds.
    pub fn new(slow_threshold: f64) -> Self {
        AggregateState {
            slow_threshold,
            ..Default::default()
        }
    }

    /// Folds one finished execution into the state.
    pub fn ingest(&mut self, outcome: &TestOutcome) {
        let Some(key) = outcome.key() else {
            if outcome.package.is_empty() {
                warn!(action = %outcome.action, "skipping record with no package or test");
                return;
            }
            self.record_package(&outcome.package, outcome.elapsed);
            self.metrics
                .increment(&format!("package_{}", outcome.action.as_str()));
            return;
        };

        trace!(test = %key, action = %outcome.action, elapsed = outcome.elapsed, "ingest");

        self.metrics.increment(outcome.action.as_str());

        match outcome.action {
            Action::Skip => return,
            Action::Pass => {
                *self.passed.entry(key.clone()).or_insert(0) += 1;
                self.failures.remove(&key);
            }
            Action::Fail => {
                *self.failed.entry(key.clone()).or_insert(0) += 1;
                self.failures
                    .entry(key.clone())
                    .or_default()
                    .extend(outcome.output.iter().cloned());
            }
        }

        self.slow_records.push(SlowRecord {
            action: outcome.action,
            package: key.package.clone(),
            test: key.test.clone(),
            elapsed: outcome.elapsed,
        });

        self.metrics.histogram.record(outcome.elapsed);
        if outcome.elapsed >= self.slow_threshold {
            self.metrics.elapsed_slow += secs_to_duration(outcome.elapsed);
            self.metrics.increment("slow");
        }

        for dump in &outcome.races {
            self.record_race(&key.test, dump);
        }
    }

    /// Adds package elapsed time, creating the package entry on first sight.
    pub fn record_package(&mut self, package: &str, elapsed: f64) {
        self.metrics.elapsed += secs_to_duration(elapsed);

        match self.packages.iter_mut().find(|p| p.package == package) {
            Some(timing) => timing.elapsed += elapsed,
            None => self.packages.push(PackageTiming {
                package: package.to_string(),
                elapsed,
            }),
        }
    }

    /// Records one race-detector dump produced by `test`.
    pub fn record_race(&mut self, test: &str, text: &str) {
        self.metrics.increment("data_race");
        self.races.push(RaceIncident {
            test: test.to_string(),
            text: text.to_string(),
        });
    }
}
