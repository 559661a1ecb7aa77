//! The wait-and-notify engine behind the `test_long_running` tool.

use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::time::Duration;

/// Name of the only tool this server exposes.
pub const TOOL_NAME: &str = "test_long_running";

/// One progress update observed while a call is waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Elapsed whole seconds so far.
    pub progress: u64,
    /// Target whole seconds for this call.
    pub total: u64,
    /// Human-readable status line.
    pub message: String,
}

impl ProgressUpdate {
    fn started(total: u64) -> Self {
        Self {
            progress: 0,
            total,
            message: format!("Starting long running tool: {total} second(s)"),
        }
    }

    fn elapsed(progress: u64, total: u64) -> Self {
        Self {
            progress,
            total,
            message: format!("Progress: {progress}/{total} second(s) elapsed"),
        }
    }
}

/// Receives the updates emitted while a call waits. `run` is handed a sink
/// only when the caller attached a progress token to the request.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn emit(&self, update: ProgressUpdate) -> Result<()>;
}

/// The suspension between ticks, injected so tests can drive the loop
/// without wall-clock waits.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Waits in real time on the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Validates the `seconds` argument and truncates it to whole seconds.
///
/// Fractional values floor (2.9 waits 2 seconds). A missing, non-numeric,
/// non-finite or negative value is rejected.
pub fn parse_seconds(arguments: Option<&Map<String, Value>>) -> Result<u64> {
    let seconds = arguments
        .and_then(|arguments| arguments.get("seconds"))
        .and_then(Value::as_f64)
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
        .ok_or(Error::InvalidSeconds)?;
    Ok(seconds as u64)
}

/// Runs the timed wait: an initial 0/total update, then one tick per second
/// with an update after each tick. Without a sink the loop still waits the
/// full duration, silently.
pub async fn run(
    total: u64,
    tick: Duration,
    sink: Option<&dyn ProgressSink>,
    delay: &dyn Delay,
) -> Result<()> {
    if let Some(sink) = sink {
        sink.emit(ProgressUpdate::started(total)).await?;
    }

    for elapsed in 1..=total {
        delay.wait(tick).await;
        if let Some(sink) = sink {
            sink.emit(ProgressUpdate::elapsed(elapsed, total)).await?;
        }
    }

    Ok(())
}
