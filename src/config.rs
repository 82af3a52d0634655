//! Run options passed from the command line into lessons

use clap::ValueEnum;

/// Options that change what a lesson does at run time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Perform the out-of-range assignment in the collections lesson
    pub trigger_overrun: bool,
}

impl RunConfig {
    pub fn with_overrun(mut self, trigger_overrun: bool) -> Self {
        self.trigger_overrun = trigger_overrun;
        self
    }
}

/// Log verbosity accepted by `--log-level`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
