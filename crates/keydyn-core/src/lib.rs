// Keydyn Core Library
// Keystroke timing capture, replay, and analysis

pub mod action;
pub mod analysis;
pub mod clock;
pub mod event;
pub mod record;
pub mod session;
pub mod settings;
pub mod sink;

pub use action::Action;
pub use analysis::{dwell_by_key, dwell_times, flight_times, mean_ms, summarize, TimingSummary};
pub use clock::{Clock, ManualClock, SystemClock};
pub use event::{RawSignal, SignalLog, SignalLogError, SignalLogResult};
pub use record::KeyRecord;
pub use session::{CaptureSession, SharedSession};
pub use settings::{Settings, SettingsError};
pub use sink::{JsonLinesSink, MemorySink, Sink, SinkError, SinkResult};
