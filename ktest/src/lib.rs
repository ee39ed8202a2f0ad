#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

//! This crate provides a black-box test harness around the `kctl` key-value
//! command-line tool. Every `kctl` sub-command has a command object that knows
//! how to assemble its argument vector and run it as a child process,
//! either capturing the child's output or throwing it away.
//!
//! Besides, the crate provides a small timing utility that repeatedly runs a
//! prepared command and reports the average wall-clock time per run.

mod command;
mod config;
mod error;
mod format;
mod timing;

#[macro_use]
extern crate failure;
pub use command::{
    prepare_get, test_get, CachePolicy, CapturedOutput, DelCommand, DelRange, DelTarget,
    ExecutionResult, GetCommand, GetKind, InfoCommand, InfoSection, KCtlCommand, PutCommand,
    RangeBound, RangeCommand, SubCommand,
};
pub use config::{KCtlConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROGRAM};
pub use error::KtestError;
pub use error::KtestErrorKind;
pub use format::{FormatRegistry, PrintFormat};
pub use timing::{time_runs, TimingReport};

/// Result type used by this crate
pub type Result<T> = core::result::Result<T, KtestError>;
