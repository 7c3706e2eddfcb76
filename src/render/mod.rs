//! Report rendering
//!
//! A report is a fixed sequence of sections (flaky, slowest, races,
//! packages, failures) followed by a metrics footer. A section with no data
//! renders nothing at all. The footer always renders.

use crate::classify::{classify, Classification, FlakyTest, RaceSummary};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::state::{AggregateState, Metrics, PackageTiming, SlowRecord, TestKey};
use crate::ui::UI;
use std::collections::BTreeMap;
use tracing::debug;

mod markdown;
mod plain;

pub use markdown::MarkdownRenderer;
pub use plain::PlainRenderer;

/// Output flavour of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Line-oriented console text.
    Plain,
    /// GitHub-flavoured Markdown with collapsible sections.
    Markdown,
}

impl OutputMode {
    /// Selects Markdown when `markdown` is set, plain text otherwise.
    pub fn from_markdown(markdown: bool) -> Self {
        if markdown {
            OutputMode::Markdown
        } else {
            OutputMode::Plain
        }
    }

    fn renderer(self) -> &'static dyn Renderer {
        match self {
            OutputMode::Plain => &PlainRenderer,
            OutputMode::Markdown => &MarkdownRenderer,
        }
    }
}

/// Writes the individual report sections in one output flavour.
///
/// [`render`] only calls a section method when that section has data.
pub trait Renderer {
    fn flaky(&self, ui: &mut dyn UI, flaky: &[FlakyTest]) -> Result<()>;

    /// `records` is the full ranking; at most `limit` rows are shown.
    fn slowest(&self, ui: &mut dyn UI, records: &[SlowRecord], limit: usize) -> Result<()>;

    fn races(&self, ui: &mut dyn UI, races: &RaceSummary) -> Result<()>;

    /// Package ranking. Rendered by default as nothing.
    fn packages(&self, _ui: &mut dyn UI, _packages: &[PackageTiming], _limit: usize) -> Result<()> {
        Ok(())
    }

    fn failures(&self, ui: &mut dyn UI, failures: &BTreeMap<TestKey, String>) -> Result<()>;

    fn footer(&self, ui: &mut dyn UI, metrics: &Metrics) -> Result<()>;
}

/// Renders `classification` in `mode`, showing at most `slowest` slow
/// executions.
pub fn render(
    mode: OutputMode,
    classification: &Classification,
    slowest: usize,
    ui: &mut dyn UI,
) -> Result<()> {
    let renderer = mode.renderer();

    if !classification.flaky.is_empty() {
        renderer.flaky(ui, &classification.flaky)?;
    }
    if !classification.slowest.is_empty() {
        renderer.slowest(ui, &classification.slowest, slowest)?;
    }
    if !classification.races.is_empty() {
        renderer.races(ui, &classification.races)?;
    }
    if !classification.packages.is_empty() {
        renderer.packages(ui, &classification.packages, slowest)?;
    }
    if !classification.failures.is_empty() {
        renderer.failures(ui, &classification.failures)?;
    }

    renderer.footer(ui, &classification.metrics)
}

/// Classifies `state` and renders the report configured by `config`.
pub fn report(state: &AggregateState, config: &ReportConfig, ui: &mut dyn UI) -> Result<()> {
    let classification = classify(state);
    let mode = OutputMode::from_markdown(config.markdown);
    debug!(?mode, slowest = config.slowest, "rendering report");
    render(mode, &classification, config.slowest, ui)
}

/// Trims the trailing line break captured output usually ends with.
fn trim_output(output: &str) -> &str {
    output.trim_end_matches(['\n', '\r'])
}
