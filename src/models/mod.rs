//! Timetabling domain models.
//!
//! Core data types for representing timetabling problems and solutions.
//! Entities are fixed-shape records, immutable after construction; a
//! solution never copies or mutates entity data, it only references it.
//!
//! # Entities
//!
//! | Type | Role |
//! |------|------|
//! | [`Room`] | Place a session can be held in |
//! | [`Teacher`] | Holder of sessions, with slot availability |
//! | [`StudentGroup`] | Audience of a session |
//! | [`ClassSession`] | One subject x teacher x group to be placed |
//! | [`TimeSlot`] | Opaque slot label from the problem's universe |
//! | [`Timetable`] | Decoded solution with violation breakdown |

mod group;
mod room;
mod session;
mod slot;
mod teacher;
mod timetable;

pub use group::StudentGroup;
pub use room::Room;
pub use session::ClassSession;
pub use slot::TimeSlot;
pub use teacher::Teacher;
pub use timetable::{Timetable, TimetableEntry, Violation, ViolationKind};
