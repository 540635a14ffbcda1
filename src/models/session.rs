//! Class session model.

use serde::{Deserialize, Serialize};

/// A class session to be placed: one subject taught by one teacher to one
/// student group.
///
/// Sessions carry no assignment of their own; room and slot live in the
/// search candidate so that entity data stays shared and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    /// Subject taught in this session.
    pub subject: String,
    /// ID of the teacher holding the session.
    pub teacher_id: String,
    /// ID of the attending student group.
    pub group_id: String,
    /// Duration in slot units. Carried for reporting; the conflict score
    /// does not consume it.
    pub slot_span: u32,
    /// Equipment the session calls for. Carried for reporting; the conflict
    /// score does not consume it.
    pub required_equipment: Vec<String>,
}

impl ClassSession {
    /// Creates a single-slot session.
    pub fn new(
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            teacher_id: teacher_id.into(),
            group_id: group_id.into(),
            slot_span: 1,
            required_equipment: Vec::new(),
        }
    }

    /// Sets the duration in slot units.
    pub fn with_slot_span(mut self, span: u32) -> Self {
        self.slot_span = span;
        self
    }

    /// Adds a required equipment item.
    pub fn with_required_equipment(mut self, item: impl Into<String>) -> Self {
        self.required_equipment.push(item.into());
        self
    }
}
