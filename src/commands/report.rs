//! Build and print a run report from outcome records

use crate::commands::Command;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::events;
use crate::render::report;
use crate::state::{AggregateState, TestOutcome};
use crate::ui::UI;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub struct ReportCommand {
    input: Option<PathBuf>,
    config: ReportConfig,
}

impl ReportCommand {
    /// Report on records read from `input`, or from stdin when `None`.
    pub fn new(input: Option<PathBuf>, config: ReportConfig) -> Self {
        ReportCommand { input, config }
    }
}

/// Ingests `outcomes` into a fresh state and renders the report.
pub fn report_outcomes(
    outcomes: &[TestOutcome],
    config: &ReportConfig,
    ui: &mut dyn UI,
) -> Result<()> {
    let mut state = AggregateState::new(config.slow_threshold);
    for outcome in outcomes {
        state.ingest(outcome);
    }

    info!(
        records = outcomes.len(),
        tests = state.slow_records.len(),
        packages = state.packages.len(),
        "ingested test outcomes"
    );

    report(&state, config, ui)
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let outcomes = match &self.input {
            Some(path) => events::read_events_file(path)?,
            None => events::read_events(io::stdin().lock())?,
        };

        report_outcomes(&outcomes, &self.config, ui)?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_ui::TestUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_command_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("events.jsonl");
        fs::write(
            &path,
            concat!(
                "{\"action\":\"fail\",\"package\":\"pkg\",\"test\":\"Foo\",\"elapsed\":0.5}\n",
                "{\"action\":\"pass\",\"package\":\"pkg\",\"test\":\"Foo\",\"elapsed\":0.25}\n",
            ),
        )
        .unwrap();

        let mut ui = TestUI::new();
        let cmd = ReportCommand::new(Some(path), ReportConfig::default());
        let result = cmd.execute(&mut ui);

        assert_eq!(result.unwrap(), 0);
        assert_eq!(ui.output[0], "Flaky tests:");
        assert_eq!(ui.output[1], "pkg Foo: 1 passed, 1 failed");
        assert!(ui.output.contains(&"Metrics: fail:1 flaky:1 pass:1".to_string()));
    }

    #[test]
    fn test_report_command_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut ui = TestUI::new();
        let cmd = ReportCommand::new(
            Some(temp.path().join("missing.jsonl")),
            ReportConfig::default(),
        );

        assert!(cmd.execute(&mut ui).is_err());
        assert!(ui.output.is_empty());
    }

    #[test]
    fn test_report_outcomes_uses_threshold() {
        let config = ReportConfig {
            slow_threshold: 0.1,
            ..Default::default()
        };
        let outcomes = vec![
            TestOutcome::pass("pkg", "TestA").with_elapsed(0.5),
            TestOutcome::pass("pkg", "TestB").with_elapsed(0.05),
        ];

        let mut ui = TestUI::new();
        report_outcomes(&outcomes, &config, &mut ui).unwrap();

        assert!(ui.output.contains(&"Slow: 500ms".to_string()));
        assert!(ui.output.contains(&"Metrics: pass:2 slow:1".to_string()));
    }
}
