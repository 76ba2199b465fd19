// Keydyn Signal Actions
// Press/release discriminant for keyboard signals

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The kind of keyboard signal delivered to a capture session.
///
/// The capture path only distinguishes press from release; key repeats
/// arrive as additional press signals and are recorded as such.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Press,
    Release,
}

impl Action {
    /// Returns true if this is a PRESS signal
    pub fn is_press(self) -> bool {
        matches!(self, Action::Press)
    }

    /// Returns true if this is a RELEASE signal
    pub fn is_release(self) -> bool {
        matches!(self, Action::Release)
    }
}
