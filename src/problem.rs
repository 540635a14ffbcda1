//! Timetabling problem definition.
//!
//! [`TimetableProblem`] is the validated, immutable world every candidate
//! is scored against: rooms, teachers, groups, sessions, and the slot
//! universe. It is built once and shared by reference; candidates hold
//! indices into its tables and never copy or mutate entity data.

use std::collections::{HashMap, HashSet};

use crate::error::SolverError;
use crate::ga::fitness;
use crate::ga::{Candidate, PenaltyWeights};
use crate::models::{
    ClassSession, Room, StudentGroup, Teacher, TimeSlot, Timetable, TimetableEntry,
};
use crate::validation::validate_input;

/// The validated, shared-immutable input to a timetabling run.
///
/// Session references are resolved to table indices at construction so
/// that scoring is index-only and never touches an ID string.
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    sessions: Vec<ClassSession>,
    rooms: Vec<Room>,
    teachers: Vec<Teacher>,
    groups: Vec<StudentGroup>,
    slots: Vec<TimeSlot>,
    /// Session index -> teacher index.
    session_teacher: Vec<usize>,
    /// Session index -> group index.
    session_group: Vec<usize>,
    /// Teacher index -> universe slot indices the teacher is free in.
    teacher_slots: Vec<HashSet<usize>>,
}

impl TimetableProblem {
    /// Builds a problem from entity tables, validating the input.
    ///
    /// All detected issues are collected and returned together as
    /// [`SolverError::InvalidProblem`].
    pub fn new(
        sessions: Vec<ClassSession>,
        rooms: Vec<Room>,
        teachers: Vec<Teacher>,
        groups: Vec<StudentGroup>,
        slots: Vec<TimeSlot>,
    ) -> Result<Self, SolverError> {
        validate_input(&sessions, &rooms, &teachers, &groups, &slots)
            .map_err(SolverError::InvalidProblem)?;

        let teacher_index: HashMap<&str, usize> = teachers
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();
        let group_index: HashMap<&str, usize> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.id.as_str(), i))
            .collect();
        let slot_index: HashMap<&str, usize> = slots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();

        // References are known to resolve after validation
        let session_teacher = sessions
            .iter()
            .map(|s| teacher_index[s.teacher_id.as_str()])
            .collect();
        let session_group = sessions
            .iter()
            .map(|s| group_index[s.group_id.as_str()])
            .collect();

        // Availability entries outside the universe resolve to nothing
        let teacher_slots = teachers
            .iter()
            .map(|t| {
                t.available_slots
                    .iter()
                    .filter_map(|s| slot_index.get(s.as_str()).copied())
                    .collect()
            })
            .collect();

        Ok(Self {
            sessions,
            rooms,
            teachers,
            groups,
            slots,
            session_teacher,
            session_group,
            teacher_slots,
        })
    }

    /// Sessions to place.
    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }

    /// Room table.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Teacher table.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Group table.
    pub fn groups(&self) -> &[StudentGroup] {
        &self.groups
    }

    /// Slot universe, in index order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of sessions to place.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of universe slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Teacher holding the given session.
    pub fn teacher_of(&self, session: usize) -> &Teacher {
        &self.teachers[self.session_teacher[session]]
    }

    /// Group attending the given session.
    pub fn group_of(&self, session: usize) -> &StudentGroup {
        &self.groups[self.session_group[session]]
    }

    /// Whether the teacher of `session` is free in universe slot `slot`.
    pub fn is_teacher_available(&self, session: usize, slot: usize) -> bool {
        self.teacher_slots[self.session_teacher[session]].contains(&slot)
    }

    /// Decodes a candidate into a resolved [`Timetable`].
    ///
    /// The candidate must have been built for this problem; placements are
    /// resolved positionally against its tables.
    pub fn decode(&self, candidate: &Candidate, weights: &PenaltyWeights) -> Timetable {
        let entries = candidate
            .placements()
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                let session = &self.sessions[idx];
                TimetableEntry {
                    subject: session.subject.clone(),
                    teacher_id: session.teacher_id.clone(),
                    group_id: session.group_id.clone(),
                    room_id: self.rooms[p.room].id.clone(),
                    slot: self.slots[p.slot].clone(),
                }
            })
            .collect();

        let violations = fitness::violations(self, weights, candidate);
        let fitness = -violations.iter().map(|v| v.penalty).sum::<i64>();

        Timetable {
            entries,
            violations,
            fitness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Placement;

    fn campus_problem() -> TimetableProblem {
        let rooms = vec![Room::new("A101", 50), Room::new("B202", 30)];
        let teachers = vec![
            Teacher::new("T1")
                .with_subject("Math")
                .with_subject("Physics")
                .with_available_slot("Monday 8AM")
                .with_available_slot("Tuesday 10AM"),
            Teacher::new("T2")
                .with_subject("English")
                .with_available_slot("Monday 10AM")
                .with_available_slot("Wednesday 8AM"),
        ];
        let groups = vec![
            StudentGroup::new("S1").with_subject("Math").with_subject("English"),
            StudentGroup::new("S2").with_subject("Physics").with_subject("English"),
        ];
        let sessions = vec![
            ClassSession::new("Math", "T1", "S1"),
            ClassSession::new("Physics", "T1", "S2"),
            ClassSession::new("English", "T2", "S1"),
        ];
        let slots = vec![
            TimeSlot::new("Monday 8AM"),
            TimeSlot::new("Monday 10AM"),
            TimeSlot::new("Tuesday 8AM"),
            TimeSlot::new("Wednesday 8AM"),
        ];
        TimetableProblem::new(sessions, rooms, teachers, groups, slots).unwrap()
    }

    #[test]
    fn test_problem_construction() {
        let p = campus_problem();
        assert_eq!(p.session_count(), 3);
        assert_eq!(p.room_count(), 2);
        assert_eq!(p.slot_count(), 4);
        assert_eq!(p.teachers().len(), 2);
        assert_eq!(p.groups().len(), 2);
    }

    #[test]
    fn test_session_resolution() {
        let p = campus_problem();
        assert_eq!(p.teacher_of(0).id, "T1");
        assert_eq!(p.teacher_of(2).id, "T2");
        assert_eq!(p.group_of(1).id, "S2");
    }

    #[test]
    fn test_teacher_availability_resolution() {
        let p = campus_problem();
        // T1 is free at "Monday 8AM" (slot 0) only; "Tuesday 10AM" is
        // outside the universe and resolves to nothing.
        assert!(p.is_teacher_available(0, 0));
        assert!(!p.is_teacher_available(0, 1));
        assert!(!p.is_teacher_available(0, 2));
        assert!(!p.is_teacher_available(0, 3));
        // T2 is free at "Monday 10AM" (1) and "Wednesday 8AM" (3).
        assert!(p.is_teacher_available(2, 1));
        assert!(p.is_teacher_available(2, 3));
        assert!(!p.is_teacher_available(2, 0));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let err = TimetableProblem::new(vec![], vec![], vec![], vec![], vec![]).unwrap_err();
        match err {
            SolverError::InvalidProblem(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_conflict_free() {
        let p = campus_problem();
        // Math in A101 @ Monday 8AM, Physics in B202 @ Monday 8AM,
        // English in A101 @ Monday 10AM.
        let candidate = Candidate::from_placements(vec![
            Placement { room: 0, slot: 0 },
            Placement { room: 1, slot: 0 },
            Placement { room: 0, slot: 1 },
        ]);
        let weights = PenaltyWeights::default();
        let timetable = p.decode(&candidate, &weights);

        assert_eq!(timetable.entry_count(), 3);
        assert_eq!(timetable.entries[0].room_id, "A101");
        assert_eq!(timetable.entries[0].slot.as_str(), "Monday 8AM");
        assert_eq!(timetable.entries[1].subject, "Physics");
        assert!(timetable.is_conflict_free());
        assert_eq!(timetable.fitness, 0);
    }

    #[test]
    fn test_decode_reports_violations() {
        let p = campus_problem();
        // Everything in A101 @ Monday 8AM: two double-bookings, and the
        // English session sits outside T2's availability.
        let candidate = Candidate::from_placements(vec![
            Placement { room: 0, slot: 0 },
            Placement { room: 0, slot: 0 },
            Placement { room: 0, slot: 0 },
        ]);
        let weights = PenaltyWeights::default();
        let timetable = p.decode(&candidate, &weights);

        assert_eq!(timetable.fitness, -25);
        assert_eq!(timetable.total_penalty(), 25);
        assert!(!timetable.is_conflict_free());
    }
}
