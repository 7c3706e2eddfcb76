//! Collapsible Markdown rendering
//!
//! Every section is a `## Title` heading followed by a `<details>` block whose
//! `<summary>` carries the section's count.

use super::{trim_output, Renderer};
use crate::classify::{FlakyTest, RaceSummary};
use crate::duration::{format_duration, format_secs};
use crate::error::Result;
use crate::state::{Metrics, PackageTiming, SlowRecord, TestKey};
use crate::ui::UI;
use std::collections::BTreeMap;

const FENCE: &str = "```";

/// GitHub-flavoured Markdown renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

/// Escapes pipes so a value cannot break out of its table cell.
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Escapes HTML special characters for text placed inside a tag.
fn html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Returns a backtick fence longer than any backtick run in `content`.
fn fence_for(content: &str) -> String {
    let longest = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(FENCE.len() - 1) + 1)
}

fn fenced(ui: &mut dyn UI, content: &str) -> Result<()> {
    let fence = fence_for(content);
    ui.output(&fence)?;
    ui.output(content)?;
    ui.output(&fence)
}

fn summary_code(value: &str) -> String {
    format!("<summary><code>{}</code></summary>", html(value))
}

fn open_section(ui: &mut dyn UI, title: &str, summary: &str) -> Result<()> {
    ui.output(&format!("## {}", title))?;
    ui.output("<details>")?;
    ui.output(&format!("<summary>{}</summary>", summary))?;
    ui.output("")
}

impl Renderer for MarkdownRenderer {
    fn flaky(&self, ui: &mut dyn UI, flaky: &[FlakyTest]) -> Result<()> {
        open_section(ui, "Flaky tests", &format!("Tests: {}", flaky.len()))?;

        ui.output("| Pass | Fail | Package | Test |")?;
        ui.output("| - | - | - | - |")?;
        for ft in flaky {
            ui.output(&format!(
                "| {} | {} | {} | {} |",
                ft.passed,
                ft.failed,
                cell(&ft.package),
                cell(&ft.test)
            ))?;
        }

        ui.output("</details>")?;
        ui.output("")
    }

    fn slowest(&self, ui: &mut dyn UI, records: &[SlowRecord], limit: usize) -> Result<()> {
        open_section(
            ui,
            "Slow tests",
            &format!("Total slow runs: {}", records.len()),
        )?;

        ui.output("| Result | Duration | Package | Test |")?;
        ui.output("| - | - | - | - |")?;
        for record in records.iter().take(limit) {
            ui.output(&format!(
                "| {} | {} | {} | {} |",
                record.action,
                format_secs(record.elapsed),
                cell(&record.package),
                cell(&record.test)
            ))?;
        }

        ui.output("</details>")?;
        ui.output("")
    }

    fn races(&self, ui: &mut dyn UI, races: &RaceSummary) -> Result<()> {
        open_section(
            ui,
            "Data races",
            &format!(
                "Total data races: {}, unique: {}",
                races.total,
                races.unique()
            ),
        )?;

        for group in races.groups.values() {
            let (first, others) = match group.tests.split_first() {
                Some((first, others)) => (first.as_str(), others),
                None => ("", &[][..]),
            };

            ui.output("<details>")?;
            ui.output(&summary_code(first))?;
            ui.output("")?;

            if !others.is_empty() {
                ui.output("Other affected tests:")?;
                let fence = fence_for(&others.join("\n"));
                ui.output(&fence)?;
                for test in others {
                    ui.output(test)?;
                }
                ui.output(&fence)?;
            }

            ui.output("")?;
            fenced(ui, &group.text)?;
            ui.output("</details>")?;
            ui.output("")?;
        }

        ui.output("</details>")?;
        ui.output("")
    }

    /// Shows one row past `limit`: the cutoff is checked after each row.
    fn packages(&self, ui: &mut dyn UI, packages: &[PackageTiming], limit: usize) -> Result<()> {
        open_section(
            ui,
            "Slowest test packages",
            &format!("Total packages with tests: {}", packages.len()),
        )?;

        ui.output("| Duration | Package |")?;
        ui.output("| - | - |")?;
        for (i, timing) in packages.iter().enumerate() {
            ui.output(&format!(
                "| {} | {} |",
                format_secs(timing.elapsed),
                cell(&timing.package)
            ))?;

            if i >= limit {
                break;
            }
        }

        ui.output("</details>")?;
        ui.output("")
    }

    fn failures(&self, ui: &mut dyn UI, failures: &BTreeMap<TestKey, String>) -> Result<()> {
        open_section(ui, "Failed tests", &format!("Failed: {}", failures.len()))?;

        for (key, output) in failures {
            ui.output("<details>")?;
            ui.output(&summary_code(&key.to_string()))?;
            ui.output("")?;
            fenced(ui, trim_output(output))?;
            ui.output("</details>")?;
        }

        ui.output("</details>")?;
        ui.output("")
    }

    fn footer(&self, ui: &mut dyn UI, metrics: &Metrics) -> Result<()> {
        ui.output("## Metrics")?;
        ui.output("")?;
        ui.output(FENCE)?;
        ui.output(&metrics.format_counts())?;
        ui.output(FENCE)?;
        ui.output("")?;
        ui.output(&format!("Elapsed: {}", format_duration(metrics.elapsed)))?;
        ui.output(&format!("Slow: {}", format_duration(metrics.elapsed_slow)))?;
        ui.output("")?;
        ui.output("## Elapsed distribution (seconds)")?;
        ui.output(FENCE)?;
        ui.output(&metrics.histogram.render())?;
        ui.output(FENCE)
    }
}
