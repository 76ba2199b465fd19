// Keydyn Key Records
// The two wire shapes appended to a capture sequence

use serde::{Deserialize, Serialize};

/// One entry of a captured key sequence.
///
/// A press and its matching release are two independent entries; the two
/// shapes are never merged into one record per physical keystroke. The
/// JSON field names (`key`, `keyPressTime`, `keyUpTime`) are the wire
/// format consumed by downstream hosts and must not change.
///
/// Offsets are milliseconds elapsed since the session's start marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyRecord {
    Press {
        key: String,
        #[serde(rename = "keyPressTime")]
        press_ms: u64,
    },
    Release {
        key: String,
        #[serde(rename = "keyUpTime")]
        up_ms: u64,
    },
}

impl KeyRecord {
    /// Create a press record
    pub fn press(key: impl Into<String>, press_ms: u64) -> Self {
        KeyRecord::Press {
            key: key.into(),
            press_ms,
        }
    }

    /// Create a release record
    pub fn release(key: impl Into<String>, up_ms: u64) -> Self {
        KeyRecord::Release {
            key: key.into(),
            up_ms,
        }
    }

    /// The key identifier this record was captured for
    pub fn key(&self) -> &str {
        match self {
            KeyRecord::Press { key, .. } | KeyRecord::Release { key, .. } => key,
        }
    }

    /// Milliseconds since the session start marker
    pub fn offset_ms(&self) -> u64 {
        match self {
            KeyRecord::Press { press_ms, .. } => *press_ms,
            KeyRecord::Release { up_ms, .. } => *up_ms,
        }
    }

    /// Returns true if this is a press record
    pub fn is_press(&self) -> bool {
        matches!(self, KeyRecord::Press { .. })
    }

    /// Returns true if this is a release record
    pub fn is_release(&self) -> bool {
        matches!(self, KeyRecord::Release { .. })
    }
}
