//! This module contains the kctl command objects and the
//! machinery that turns them into child processes.

mod exec;
mod get;
mod info;
mod range;
mod write;

pub use exec::{CapturedOutput, ExecutionResult};
pub use get::{GetCommand, GetKind};
pub use info::{InfoCommand, InfoSection};
pub use range::{RangeBound, RangeCommand};
pub use write::{CachePolicy, DelCommand, DelRange, DelTarget, PutCommand};

use crate::{KCtlConfig, KtestError, KtestErrorKind, Result};
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

/// Sub-commands accepted by kctl, passed positionally
/// right after the common options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubCommand {
    /// get the value of a key
    Get,
    /// get the key/value following a key
    GetNext,
    /// get the key/value preceding a key
    GetPrev,
    /// get the version of a key/value entry
    GetVers,
    /// insert or update a key/value
    Put,
    /// delete a key/value
    Del,
    /// dump device information
    Info,
    /// list a range of keys
    Range,
}

impl SubCommand {
    /// every sub-command kctl accepts
    pub const ALL: [SubCommand; 8] = [
        SubCommand::Get,
        SubCommand::GetNext,
        SubCommand::GetPrev,
        SubCommand::GetVers,
        SubCommand::Put,
        SubCommand::Del,
        SubCommand::Info,
        SubCommand::Range,
    ];

    /// the name kctl expects on its command line
    pub fn name(self) -> &'static str {
        match self {
            SubCommand::Get => "get",
            SubCommand::GetNext => "getnext",
            SubCommand::GetPrev => "getprev",
            SubCommand::GetVers => "getvers",
            SubCommand::Put => "put",
            SubCommand::Del => "del",
            SubCommand::Info => "info",
            SubCommand::Range => "range",
        }
    }

    /// one line description of the sub-command
    pub fn about(self) -> &'static str {
        match self {
            SubCommand::Get => "Get key value",
            SubCommand::GetNext => "Get next key value",
            SubCommand::GetPrev => "Get previous key value",
            SubCommand::GetVers => "Get version of key value entry",
            SubCommand::Put => "Insert or update key value",
            SubCommand::Del => "Delete key value",
            SubCommand::Info => "Get device information",
            SubCommand::Range => "Get a range of keys",
        }
    }
}

impl fmt::Display for SubCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubCommand {
    type Err = KtestError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SubCommand::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| KtestErrorKind::UnknownSubCommand.into())
    }
}

/// Trait that describes a single kctl invocation.
///
/// Implementors only say which sub-command they are and which
/// options follow it; assembling the argument vector and spawning
/// the process is shared. The argument vector is always laid out as
///
/// ```text
/// <program> -h <host> -p <port> [common options] <sub-command> [options] [positional...]
/// ```
pub trait KCtlCommand {
    /// connection parameters and executable location
    fn config(&self) -> &KCtlConfig;

    /// the sub-command this object runs
    fn sub_command(&self) -> SubCommand;

    /// options placed between the sub-command and the positional
    /// arguments. Must not contain empty tokens.
    fn options(&self) -> Vec<OsString> {
        Vec::new()
    }

    /// the full argument vector, program first
    fn args(&self, positional: &[&str]) -> Vec<OsString> {
        let config = self.config();
        let mut args = vec![config.program.clone().into_os_string()];
        args.extend(config.common_args());
        args.push(self.sub_command().name().into());
        args.extend(self.options());
        args.extend(positional.iter().map(|arg| OsString::from(*arg)));
        args
    }

    /// spawn kctl, block until it exits and hand back what the OS
    /// reported. Output is captured as text when `capture` is set and
    /// sent to the null device otherwise.
    fn run(&self, positional: &[&str], capture: bool) -> Result<ExecutionResult> {
        exec::execute(self.args(positional), capture)
    }
}

/// build a `get` command for repeated use, resolving the
/// format name once
pub fn prepare_get(config: KCtlConfig, format: &str) -> Result<GetCommand> {
    GetCommand::with_format_name(config, Some(format))
}

/// get `key` once and capture what kctl printed
pub fn test_get(config: KCtlConfig, key: &str, format: &str) -> Result<ExecutionResult> {
    prepare_get(config, format)?.run(&[key], true)
}
