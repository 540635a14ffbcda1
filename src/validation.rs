//! Input validation for timetabling problems.
//!
//! Checks structural integrity of sessions, rooms, teachers, groups, and
//! the slot universe before any search starts. Detects:
//! - Empty session/room/slot tables
//! - Duplicate IDs
//! - Sessions referencing unknown teachers or groups
//! - Non-positive room capacities
//!
//! Teacher availability is deliberately not cross-checked against the slot
//! universe: an availability label the universe never offers is legal and
//! simply never schedulable.

use std::collections::HashSet;
use std::fmt;

use crate::models::{ClassSession, Room, StudentGroup, Teacher, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required input table is empty.
    EmptyInput,
    /// Two entities share the same ID.
    DuplicateId,
    /// A session references a teacher that doesn't exist.
    InvalidTeacherReference,
    /// A session references a group that doesn't exist.
    InvalidGroupReference,
    /// A room has a capacity below one.
    InvalidCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input data for a timetabling problem.
///
/// Checks:
/// 1. At least one session, one room, and one time slot
/// 2. No duplicate room, teacher, group, or slot IDs
/// 3. All teacher references in sessions point to existing teachers
/// 4. All group references in sessions point to existing groups
/// 5. All room capacities are at least one
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    sessions: &[ClassSession],
    rooms: &[Room],
    teachers: &[Teacher],
    groups: &[StudentGroup],
    slots: &[TimeSlot],
) -> ValidationResult {
    let mut errors = Vec::new();

    if sessions.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No sessions to schedule",
        ));
    }
    if rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No rooms available",
        ));
    }
    if slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No time slots available",
        ));
    }

    // Collect entity IDs, flagging duplicates
    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
        if r.capacity < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Room '{}' has non-positive capacity {}", r.id, r.capacity),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut group_ids = HashSet::new();
    for g in groups {
        if !group_ids.insert(g.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate group ID: {}", g.id),
            ));
        }
    }

    let mut slot_labels = HashSet::new();
    for s in slots {
        if !slot_labels.insert(s.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time slot: {s}"),
            ));
        }
    }

    // Check session references
    for session in sessions {
        if !teacher_ids.contains(session.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTeacherReference,
                format!(
                    "Session '{}' for group '{}' references unknown teacher '{}'",
                    session.subject, session.group_id, session.teacher_id
                ),
            ));
        }
        if !group_ids.contains(session.group_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidGroupReference,
                format!(
                    "Session '{}' references unknown group '{}'",
                    session.subject, session.group_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
