//! Time-slot token.
//!
//! A [`TimeSlot`] is an opaque label drawn from the problem's slot universe
//! (e.g. "Monday 8AM"). Slots compare by equality only; the engine attaches
//! no calendar meaning to the label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, enumerable time-slot label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Creates a slot from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The slot label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeSlot {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for TimeSlot {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for TimeSlot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
