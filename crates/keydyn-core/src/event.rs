// Keydyn Raw Signal Log
// JSON-lines format for recording and replaying keyboard signals

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::clock::ManualClock;
use crate::session::CaptureSession;
use crate::sink::{Sink, SinkError};

/// Result type for signal log operations
pub type SignalLogResult<T> = Result<T, SignalLogError>;

/// Errors that can occur when reading or replaying a signal log
#[derive(Debug, thiserror::Error)]
pub enum SignalLogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}

/// One recorded keyboard signal.
///
/// `time_ms` is the wall-clock reading at which the signal was delivered,
/// in the same units the capture session's clock would have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignal {
    pub action: Action,
    pub key: String,
    pub time_ms: u64,
}

impl RawSignal {
    /// Convenience constructor for a press signal
    pub fn press(key: impl Into<String>, time_ms: u64) -> Self {
        Self {
            action: Action::Press,
            key: key.into(),
            time_ms,
        }
    }

    /// Convenience constructor for a release signal
    pub fn release(key: impl Into<String>, time_ms: u64) -> Self {
        Self {
            action: Action::Release,
            key: key.into(),
            time_ms,
        }
    }
}

/// An ordered log of raw signals, replayable into a capture session.
#[derive(Debug, Clone, Default)]
pub struct SignalLog {
    signals: Vec<RawSignal>,
}

impl SignalLog {
    /// Build a log from signals already in memory
    pub fn from_signals(signals: Vec<RawSignal>) -> Self {
        Self { signals }
    }

    /// Read a log from a JSON-lines stream, one signal per line.
    ///
    /// Blank lines are skipped. Parse errors carry the 1-based line
    /// number of the offending entry.
    pub fn from_reader<R: BufRead>(reader: R) -> SignalLogResult<Self> {
        let mut signals = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let signal = serde_json::from_str(&line)
                .map_err(|source| SignalLogError::Parse {
                    line: idx + 1,
                    source,
                })?;
            signals.push(signal);
        }
        log::debug!("loaded signal log with {} signals", signals.len());
        Ok(Self { signals })
    }

    /// The signals in delivery order
    pub fn signals(&self) -> &[RawSignal] {
        &self.signals
    }

    /// Number of signals in the log
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Check if the log holds no signals
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Replay the log into a session, publishing to the sink on every
    /// release exactly as live capture would.
    ///
    /// The session's manual clock is set to each signal's own timestamp
    /// before the handler runs, so offsets come out identical to a live
    /// session that saw the same delivery times.
    pub fn drive(
        &self,
        session: &mut CaptureSession<ManualClock>,
        sink: &mut dyn Sink,
    ) -> SignalLogResult<()> {
        for signal in &self.signals {
            session.clock().set(signal.time_ms);
            match signal.action {
                Action::Press => session.press(&signal.key),
                Action::Release => session.release(&signal.key, sink)?,
            }
        }
        log::debug!(
            "replayed {} signals into {} records",
            self.signals.len(),
            session.len()
        );
        Ok(())
    }
}
