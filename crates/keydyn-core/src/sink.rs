// Keydyn Sinks
// Host-bridge abstraction the capture session publishes to

use std::io::Write;

use crate::record::KeyRecord;

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Errors that can occur when publishing to a sink
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Host bridge unavailable: {0}")]
    Unavailable(String),
}

/// Single-method host bridge.
///
/// The session hands the entire accumulated sequence to `publish` once per
/// release signal, so each call's payload prefix-extends the previous one.
/// Implementations must not assume payloads are bounded.
pub trait Sink {
    fn publish(&mut self, records: &[KeyRecord]) -> SinkResult<()>;
}

/// In-memory sink that snapshots every published payload.
///
/// Used by embedders that only care about the latest sequence, and by tests
/// asserting the one-call-per-release publish cadence.
#[derive(Debug, Default)]
pub struct MemorySink {
    payloads: Vec<Vec<KeyRecord>>,
}

impl MemorySink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of publish calls received so far
    pub fn publish_count(&self) -> usize {
        self.payloads.len()
    }

    /// All payloads received, in publish order
    pub fn payloads(&self) -> &[Vec<KeyRecord>] {
        &self.payloads
    }

    /// The most recent payload, if any publish has happened
    pub fn last(&self) -> Option<&[KeyRecord]> {
        self.payloads.last().map(Vec::as_slice)
    }
}

impl Sink for MemorySink {
    fn publish(&mut self, records: &[KeyRecord]) -> SinkResult<()> {
        self.payloads.push(records.to_vec());
        Ok(())
    }
}

/// Sink that writes each published payload as one JSON line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink writing to the given writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn publish(&mut self, records: &[KeyRecord]) -> SinkResult<()> {
        serde_json::to_writer(&mut self.writer, records)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
