mod app;
mod options;
mod terminal;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shadowselect::{SelectConfig, SelectWidget};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::terminal::Terminal;

#[derive(Parser, Debug)]
#[command(
    name = "shadowselect-demo",
    version,
    about = "Drive a custom select widget in the terminal and print the submitted value"
)]
struct Cli {
    /// JSON array of {"value", "label"?, "selected"?} objects
    #[arg(long)]
    options: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "shadowselect-demo.log")]
    log: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    log_level: LogLevel,

    /// Idle time before the type-ahead buffer resets
    #[arg(long, default_value_t = 500)]
    debounce_ms: u64,

    /// Height of the open option list
    #[arg(long, default_value_t = 8)]
    visible_rows: u16,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn run(cli: Cli) -> Result<Option<String>> {
    let log_file = File::create(&cli.log)
        .with_context(|| format!("failed to create log file {}", cli.log.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("failed to initialize logger")?;

    let specs = match &cli.options {
        Some(path) => options::load(path)?,
        None => options::builtin(),
    };
    let (mut doc, form) = options::build_document(&specs)?;

    let config = SelectConfig::new()
        .debounce(Duration::from_millis(cli.debounce_ms))
        .visible_rows(cli.visible_rows);
    let widget = SelectWidget::mount(&mut doc, form.select, config)
        .context("cannot mount the select widget")?;
    log::info!("[demo] mounted with {} options", widget.options().len());

    let mut term = Terminal::new().context("failed to set up the terminal")?;
    let value = App::new(doc, form, widget).run(&mut term);
    drop(term);
    value
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(value) => {
            println!("{}", value.unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
