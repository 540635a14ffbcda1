//! Timetable (solution) model.
//!
//! A timetable is the decoded form of a search candidate: one resolved
//! (room, slot) row per class session, plus the constraint violations the
//! assignment incurs. Infeasible timetables are representable; violations
//! are reported, not rejected.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A complete timetable (solution to a timetabling problem).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// One resolved row per class session, in session order.
    pub entries: Vec<TimetableEntry>,
    /// Constraint violations detected in this timetable.
    pub violations: Vec<Violation>,
    /// Total conflict score (0 = conflict-free, lower = worse).
    pub fitness: i64,
}

/// A session-room-slot assignment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Subject taught.
    pub subject: String,
    /// Assigned teacher ID.
    pub teacher_id: String,
    /// Attending group ID.
    pub group_id: String,
    /// Assigned room ID.
    pub room_id: String,
    /// Assigned time slot.
    pub slot: TimeSlot,
}

/// A constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub kind: ViolationKind,
    /// Related entity ID (room or teacher).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Penalty charged against the fitness (positive magnitude).
    pub penalty: i64,
}

/// Classification of constraint violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Two sessions share a room in the same slot.
    DoubleBooking,
    /// A session sits in a slot its teacher is not free in.
    TeacherUnavailable,
    /// A room is too small for the attending group.
    RoomOverCapacity,
}

impl Violation {
    /// Creates a double-booking violation.
    pub fn double_booking(
        room_id: impl Into<String>,
        message: impl Into<String>,
        penalty: i64,
    ) -> Self {
        Self {
            kind: ViolationKind::DoubleBooking,
            entity_id: room_id.into(),
            message: message.into(),
            penalty,
        }
    }

    /// Creates a teacher-unavailable violation.
    pub fn teacher_unavailable(
        teacher_id: impl Into<String>,
        message: impl Into<String>,
        penalty: i64,
    ) -> Self {
        Self {
            kind: ViolationKind::TeacherUnavailable,
            entity_id: teacher_id.into(),
            message: message.into(),
            penalty,
        }
    }

    /// Creates a room-over-capacity violation.
    pub fn room_over_capacity(
        room_id: impl Into<String>,
        message: impl Into<String>,
        penalty: i64,
    ) -> Self {
        Self {
            kind: ViolationKind::RoomOverCapacity,
            entity_id: room_id.into(),
            message: message.into(),
            penalty,
        }
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the timetable has no violations.
    pub fn is_conflict_free(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all violation penalties (non-negative; equals `-fitness`).
    pub fn total_penalty(&self) -> i64 {
        self.violations.iter().map(|v| v.penalty).sum()
    }

    /// Returns all entries placed in a given room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.room_id == room_id).collect()
    }

    /// Returns all entries held by a given teacher.
    pub fn entries_for_teacher(&self, teacher_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// Returns all entries placed in a given slot.
    pub fn entries_in_slot(&self, slot: &TimeSlot) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| &e.slot == slot).collect()
    }
}
