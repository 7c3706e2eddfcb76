//! teststat - Command-line tool for test run reports

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use teststat::commands::{Command, ReportCommand};
use teststat::config::ReportConfig;
use teststat::error::Result;
use teststat::ui::{CliUI, UI};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "teststat")]
#[command(about = "Report flaky, slow, racy and failing tests", long_about = None)]
struct Cli {
    /// File of JSON-lines outcome records (defaults to stdin)
    input: Option<PathBuf>,

    /// Configuration file with a [DEFAULT] section
    #[arg(short = 'c', long, env = "TESTSTAT_CONFIG")]
    config: Option<PathBuf>,

    /// Render collapsible Markdown instead of plain text (`--markdown=false`
    /// turns off a configuration file's setting)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    markdown: Option<bool>,

    /// Number of slowest executions to show
    #[arg(short = 'n', long)]
    slowest: Option<usize>,

    /// Seconds at or above which an execution counts as slow
    #[arg(long)]
    slow_threshold: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn report_config(&self) -> Result<ReportConfig> {
        let config = match &self.config {
            Some(path) => ReportConfig::load_from_file(path)?,
            None => ReportConfig::default(),
        };

        config.with_overrides(self.markdown, self.slowest, self.slow_threshold)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, ui: &mut CliUI) -> Result<i32> {
    let config = cli.report_config()?;

    let cmd = ReportCommand::new(cli.input, config);
    let exit_code = cmd.execute(ui)?;
    ui.flush()?;
    Ok(exit_code)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ui = CliUI::new();
    let exit_code = match run(cli, &mut ui) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let _ = ui.error(&e.to_string());
            let _ = ui.flush();
            1
        }
    };
    std::process::exit(exit_code);
}
