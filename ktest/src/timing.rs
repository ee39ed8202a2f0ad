use crate::{KCtlCommand, Result};
use std::convert::TryFrom;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// Wall-clock measurements of repeated runs of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingReport {
    /// number of runs
    pub iterations: u32,
    /// time spent across all runs
    pub total: Duration,
    /// runs whose child exited with a non-zero status
    pub failures: u32,
}

impl TimingReport {
    /// mean time per run, zero when nothing ran
    pub fn average(&self) -> Duration {
        if self.iterations == 0 {
            Duration::from_secs(0)
        } else {
            self.total / self.iterations
        }
    }

    /// mean time per run in microseconds, saturating at `u64::MAX`
    pub fn average_micros(&self) -> u64 {
        u64::try_from(self.average().as_micros()).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} seconds, average over {} iterations",
            self.total.as_secs_f64(),
            self.iterations
        )
    }
}

/// run `command` `iterations` times with its output discarded and
/// measure how long that took. Stops at the first run that cannot
/// be spawned.
pub fn time_runs<C: KCtlCommand>(
    command: &C,
    positional: &[&str],
    iterations: u32,
) -> Result<TimingReport> {
    let mut failures = 0;

    let start = Instant::now();
    for _ in 0..iterations {
        let result = command.run(positional, false)?;
        if !result.success() {
            failures += 1;
        }
    }
    let total = start.elapsed();

    let report = TimingReport {
        iterations,
        total,
        failures,
    };
    info!(
        sub_command = %command.sub_command(),
        iterations,
        failures,
        average_us = report.average_micros(),
        "timing finished"
    );
    Ok(report)
}
