//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "livr-num",
    version,
    about = "Validate and coerce values with numeric LIVR rules",
    long_about = "Validate loosely-typed values against numeric LIVR rules.\n\n\
                  Numeric strings that pass are coerced to canonical numbers.\n\
                  Values are read as JSON unless --raw is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

impl Cli {
    /// Logging configuration for these flags.
    ///
    /// `--log-level` wins over `-v`/`-q`; when neither is given `RUST_LOG`
    /// may override the default level. ANSI output in `auto` mode needs a
    /// terminal on stderr and no log file.
    pub fn log_config(&self, stderr_is_terminal: bool) -> LogConfig {
        let pinned = self.log_level.is_some() || self.verbosity.is_present();
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && stderr_is_terminal,
        };
        LogConfig {
            level_filter,
            use_env_filter: !pinned,
            with_timestamps: self.log_timestamps,
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate values against a rule.
    Check(CheckArgs),

    /// List the available rules.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Rule name, e.g. `integer` or `number_between`.
    #[arg(value_name = "RULE")]
    pub rule: String,

    /// Rule argument as JSON, e.g. `10` or `[1, 5]`.
    #[arg(long = "arg", value_name = "JSON")]
    pub argument: Option<String>,

    /// Override the rule's error code (e.g. TOO_HIGH).
    #[arg(long = "error-code", value_name = "CODE")]
    pub error_code: Option<String>,

    /// Treat every value as a plain string instead of JSON.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Values to validate. Read line by line from stdin when omitted.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
