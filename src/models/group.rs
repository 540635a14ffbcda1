//! Student group model.

use serde::{Deserialize, Serialize};

/// A student group enrolled in a set of subjects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentGroup {
    /// Unique group identifier.
    pub id: String,
    /// Subjects the group is enrolled in.
    pub subjects: Vec<String>,
}

impl StudentGroup {
    /// Creates a group with no enrollments.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subjects: Vec::new(),
        }
    }

    /// Adds an enrolled subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Number of enrolled subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}
