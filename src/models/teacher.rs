//! Teacher model.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A teacher with subject qualifications and slot availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Subjects this teacher can teach.
    pub subjects: Vec<String>,
    /// Slots the teacher is free to teach in.
    ///
    /// Entries need not belong to the problem's slot universe; a label the
    /// universe never offers is simply never schedulable.
    pub available_slots: Vec<TimeSlot>,
}

impl Teacher {
    /// Creates a teacher with no subjects or availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subjects: Vec::new(),
            available_slots: Vec::new(),
        }
    }

    /// Adds a subject qualification.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Adds an available slot.
    pub fn with_available_slot(mut self, slot: impl Into<TimeSlot>) -> Self {
        self.available_slots.push(slot.into());
        self
    }

    /// Whether this teacher is qualified for a subject.
    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    /// Whether this teacher is free in a given slot.
    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        self.available_slots.contains(slot)
    }
}
