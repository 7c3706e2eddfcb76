//! Plain-text console rendering

use super::{trim_output, Renderer};
use crate::classify::{FlakyTest, RaceSummary};
use crate::duration::{format_duration, format_secs};
use crate::error::Result;
use crate::state::{Metrics, SlowRecord, TestKey};
use crate::ui::UI;
use std::collections::BTreeMap;

/// Affected tests listed per race before the list is cut short.
const RACE_TESTS_SHOWN: usize = 3;

/// Line-oriented renderer. It has no package ranking section.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn flaky(&self, ui: &mut dyn UI, flaky: &[FlakyTest]) -> Result<()> {
        ui.output("Flaky tests:")?;
        for ft in flaky {
            ui.output(&format!(
                "{}: {} passed, {} failed",
                ft.key(),
                ft.passed,
                ft.failed
            ))?;
        }
        ui.output("")
    }

    fn slowest(&self, ui: &mut dyn UI, records: &[SlowRecord], limit: usize) -> Result<()> {
        ui.output("Slowest tests:")?;
        for record in records.iter().take(limit) {
            ui.output(&format!(
                "{} {} {} {}",
                record.action,
                record.package,
                record.test,
                format_secs(record.elapsed)
            ))?;
        }
        ui.output("")
    }

    fn races(&self, ui: &mut dyn UI, races: &RaceSummary) -> Result<()> {
        ui.output("Data races:")?;
        for group in races.groups.values() {
            let mut tests: Vec<&str> = group
                .tests
                .iter()
                .take(RACE_TESTS_SHOWN)
                .map(String::as_str)
                .collect();
            if group.tests.len() > RACE_TESTS_SHOWN {
                tests.push("...");
            }
            ui.output(&tests.join(", "))?;
            ui.output(&group.text)?;
        }
        ui.output("")
    }

    fn failures(&self, ui: &mut dyn UI, failures: &BTreeMap<TestKey, String>) -> Result<()> {
        ui.output("Failed tests:")?;
        for (key, output) in failures {
            ui.output(&format!("{}:", key))?;
            let output = trim_output(output);
            if !output.is_empty() {
                ui.output(output)?;
            }
        }
        ui.output("")
    }

    fn footer(&self, ui: &mut dyn UI, metrics: &Metrics) -> Result<()> {
        ui.output(&format!("Metrics: {}", metrics.format_counts()))?;
        ui.output(&format!("Elapsed: {}", format_duration(metrics.elapsed)))?;
        ui.output(&format!("Slow: {}", format_duration(metrics.elapsed_slow)))?;
        ui.output("")?;
        ui.output("Elapsed distribution:")?;
        ui.output(&metrics.histogram.render())
    }
}
