use crate::{KtestError, KtestErrorKind, Result};
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, trace};

/// Text kctl wrote while its output was being captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// standard output, decoded as UTF-8
    pub stdout: String,
    /// standard error, decoded as UTF-8
    pub stderr: String,
}

/// Outcome of a single kctl invocation, exactly as the OS reported it.
/// A non-zero exit is not turned into an error.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    args: Vec<OsString>,
    status: ExitStatus,
    output: Option<CapturedOutput>,
}

impl ExecutionResult {
    /// the argument vector the process was started with, program first
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// exit status of the child
    pub fn status(&self) -> ExitStatus {
        self.status
    }

    /// exit code of the child, `None` if it was killed by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// whether the child exited with status 0
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// captured output, `None` when the run discarded it
    pub fn captured(&self) -> Option<&CapturedOutput> {
        self.output.as_ref()
    }

    /// captured standard output
    pub fn stdout(&self) -> Option<&str> {
        self.output.as_ref().map(|output| output.stdout.as_str())
    }

    /// captured standard error
    pub fn stderr(&self) -> Option<&str> {
        self.output.as_ref().map(|output| output.stderr.as_str())
    }
}

pub(super) fn execute(args: Vec<OsString>, capture: bool) -> Result<ExecutionResult> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| KtestError::from(KtestErrorKind::InvalidArgument))?;

    debug!(?args, capture, "spawning kctl");

    let mut command = Command::new(program);
    command.args(rest);

    let (status, output) = if capture {
        let output = command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(KtestError::spawn)?;
        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        (output.status, Some(captured))
    } else {
        let status = command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(KtestError::spawn)?;
        (status, None)
    };

    trace!(%status, "kctl exited");

    Ok(ExecutionResult {
        args,
        status,
        output,
    })
}
