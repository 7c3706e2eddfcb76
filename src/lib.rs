//! teststat - flaky, slow, racy and failing test reports
//!
//! teststat turns the finished executions of a test run into a single report:
//! which tests are flaky, which executions were slowest, which data races were
//! detected (deduplicated across runs), which packages took longest, and what
//! failing tests printed, followed by run metrics and an elapsed-time
//! histogram.
//!
//! # Architecture
//!
//! Data flows one way through the library:
//!
//! - [`state`]: the aggregate state an ingestion stage fills from [`state::TestOutcome`]s
//! - [`classify`]: pure classifiers over the state (flaky, slowest, races, packages, failures)
//! - [`normalize`]: race-dump normalization used to deduplicate races
//! - [`render`]: plain-text and Markdown renderers writing to a [`ui::UI`]
//! - [`events`]: JSON-lines reader for outcome records
//! - [`commands`]: the report command used by the `teststat` binary
//! - [`config`]: report options and their INI configuration file
//! - [`histogram`], [`duration`]: elapsed-time distribution and formatting
//! - [`error`]: Error types and Result alias
//!
//! # Example
//!
//! ```
//! use teststat::config::ReportConfig;
//! use teststat::render::report;
//! use teststat::state::{AggregateState, TestOutcome};
//! use teststat::ui::CliUI;
//!
//! # fn main() -> teststat::error::Result<()> {
//! let mut state = AggregateState::new(1.0);
//! state.ingest(&TestOutcome::fail("pkg", "Foo").with_elapsed(0.5));
//! state.ingest(&TestOutcome::pass("pkg", "Foo").with_elapsed(0.25));
//!
//! // Starts with "Flaky tests:" and "pkg Foo: 1 passed, 1 failed"
//! let mut ui = CliUI::new();
//! report(&state, &ReportConfig::default(), &mut ui)?;
//! ui.flush()?;
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod events;
pub mod histogram;
pub mod normalize;
pub mod render;
pub mod state;
pub mod ui;

pub use error::{Error, Result};
