// Keydyn Capture Session
// Start marker and append-only record sequence for one page/session

use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::record::KeyRecord;
use crate::sink::{Sink, SinkResult};

/// Capture state for one session.
///
/// Holds the start marker and the ordered, append-only record sequence.
/// The two handler operations (`press`, `release`) are the only writers;
/// nothing ever clears or trims the sequence, which grows unbounded for
/// the session's lifetime.
#[derive(Debug)]
pub struct CaptureSession<C: Clock = SystemClock> {
    clock: C,
    /// First-press timestamp; zero point for all record offsets.
    /// Unset until the first press and never changed afterwards.
    start_ms: Option<u64>,
    records: Vec<KeyRecord>,
}

impl CaptureSession<SystemClock> {
    /// Create a session timed against the system wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for CaptureSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CaptureSession<C> {
    /// Create a session timed against the given clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            start_ms: None,
            records: Vec::new(),
        }
    }

    /// The clock this session reads timestamps from
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The start marker, or None if no press has been seen yet
    pub fn start_marker(&self) -> Option<u64> {
        self.start_ms
    }

    /// The full record sequence accumulated so far
    pub fn records(&self) -> &[KeyRecord] {
        &self.records
    }

    /// Number of records accumulated so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no signal has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Handle a press signal.
    ///
    /// The first press fixes the start marker; every record's offset is
    /// measured against it. Offsets clamp to zero if the clock reads
    /// earlier than the marker.
    pub fn press(&mut self, key: &str) {
        let now = self.clock.now_ms();
        let start = *self.start_ms.get_or_insert(now);
        log::trace!("press {key} at +{}ms", now.saturating_sub(start));
        self.records
            .push(KeyRecord::press(key, now.saturating_sub(start)));
    }

    /// Handle a release signal and publish the full sequence.
    ///
    /// Appends a release record, then hands the entire accumulated
    /// sequence to the sink. A release with no preceding press leaves
    /// the marker unset and records the raw clock reading; an unset
    /// marker is treated as zero.
    pub fn release(&mut self, key: &str, sink: &mut dyn Sink) -> SinkResult<()> {
        let now = self.clock.now_ms();
        let offset = now.saturating_sub(self.start_ms.unwrap_or(0));
        self.records.push(KeyRecord::release(key, offset));
        log::trace!(
            "release {key} at +{offset}ms, publishing {} records",
            self.records.len()
        );
        sink.publish(&self.records)
    }
}

/// Lock-wrapped session for embedders whose signal source lives on
/// another thread.
///
/// The lock serializes the two handlers, preserving the single-threaded
/// delivery model the capture semantics assume.
#[derive(Debug)]
pub struct SharedSession<C: Clock = SystemClock> {
    inner: Mutex<CaptureSession<C>>,
}

impl SharedSession<SystemClock> {
    /// Create a shared session timed against the system wall clock
    pub fn new() -> Self {
        Self::from_session(CaptureSession::new())
    }
}

impl Default for SharedSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SharedSession<C> {
    /// Wrap an existing session
    pub fn from_session(session: CaptureSession<C>) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    /// Handle a press signal
    pub fn press(&self, key: &str) {
        self.inner.lock().press(key);
    }

    /// Handle a release signal and publish the full sequence
    pub fn release(&self, key: &str, sink: &mut dyn Sink) -> SinkResult<()> {
        self.inner.lock().release(key, sink)
    }

    /// Snapshot the record sequence accumulated so far
    pub fn snapshot(&self) -> Vec<KeyRecord> {
        self.inner.lock().records().to_vec()
    }
}
