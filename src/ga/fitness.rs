//! Conflict-penalty fitness.
//!
//! Scores a candidate by walking its placements once in session order and
//! charging a penalty for every constraint violation. All terms are
//! non-positive; 0 means conflict-free and higher is better. Scoring is
//! pure: the same assignment always produces the same score.
//!
//! Three constraints are active:
//! - **Double-booking**: each extra session on an already-seen
//!   (room, slot) pair; N sessions on one pair cost (N-1) penalties.
//! - **Teacher clash**: a session in a slot its teacher is not free in.
//! - **Capacity shortfall**: a room smaller than the attending group,
//!   where the group's subject count stands in for headcount.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use std::collections::HashSet;

use crate::ga::candidate::Candidate;
use crate::ga::config::PenaltyWeights;
use crate::models::Violation;
use crate::problem::TimetableProblem;

/// Computes the conflict score of a candidate (non-positive).
///
/// The candidate must have been built for `problem`. The result does not
/// depend on session iteration order.
pub fn score(problem: &TimetableProblem, weights: &PenaltyWeights, candidate: &Candidate) -> i64 {
    let mut total = 0;
    let mut occupied: HashSet<(usize, usize)> = HashSet::new();

    for (idx, p) in candidate.placements().iter().enumerate() {
        if !occupied.insert((p.room, p.slot)) {
            total -= weights.double_booking;
        }
        if !problem.is_teacher_available(idx, p.slot) {
            total -= weights.teacher_clash;
        }
        let room = &problem.rooms()[p.room];
        if (room.capacity as usize) < problem.group_of(idx).subject_count() {
            total -= weights.capacity_shortfall;
        }
    }

    total
}

/// Collects the violations behind a candidate's score as structured records.
///
/// The checks are the same as [`score`]; the negated sum of the returned
/// penalties equals the score.
pub fn violations(
    problem: &TimetableProblem,
    weights: &PenaltyWeights,
    candidate: &Candidate,
) -> Vec<Violation> {
    let mut found = Vec::new();
    let mut occupied: HashSet<(usize, usize)> = HashSet::new();

    for (idx, p) in candidate.placements().iter().enumerate() {
        let session = &problem.sessions()[idx];
        let room = &problem.rooms()[p.room];
        let slot = &problem.slots()[p.slot];

        if !occupied.insert((p.room, p.slot)) {
            found.push(Violation::double_booking(
                &room.id,
                format!(
                    "Session '{}' double-books room '{}' at '{slot}'",
                    session.subject, room.id
                ),
                weights.double_booking,
            ));
        }
        if !problem.is_teacher_available(idx, p.slot) {
            found.push(Violation::teacher_unavailable(
                &session.teacher_id,
                format!(
                    "Teacher '{}' is not free at '{slot}' for session '{}'",
                    session.teacher_id, session.subject
                ),
                weights.teacher_clash,
            ));
        }
        let group = problem.group_of(idx);
        if (room.capacity as usize) < group.subject_count() {
            found.push(Violation::room_over_capacity(
                &room.id,
                format!(
                    "Room '{}' (capacity {}) is too small for group '{}'",
                    room.id, room.capacity, group.id
                ),
                weights.capacity_shortfall,
            ));
        }
    }

    found
}
