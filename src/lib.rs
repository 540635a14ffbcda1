//! Genetic timetabling engine.
//!
//! Assigns a fixed set of class sessions (subject + teacher + student
//! group) to (room, time-slot) pairs by evolving a population of candidate
//! schedules against a conflict-penalty fitness. The engine runs one batch
//! optimization to a configured generation count and returns the single
//! best candidate plus the per-generation fitness history.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Room`, `Teacher`, `StudentGroup`,
//!   `ClassSession`, `TimeSlot`, and the decoded `Timetable`
//! - **`problem`**: `TimetableProblem`, the validated immutable world
//!   shared by every candidate
//! - **`validation`**: Input integrity checks (empty tables, duplicate
//!   IDs, dangling references)
//! - **`ga`**: The search itself — candidate encoding, fitness,
//!   population management, and the generational driver
//! - **`export`**: CSV output for decoded timetables
//! - **`error`**: `SolverError`
//!
//! # Example
//!
//! ```
//! use timetable_ga::ga::{GaConfig, GaRunner};
//! use timetable_ga::models::{ClassSession, Room, StudentGroup, Teacher, TimeSlot};
//! use timetable_ga::problem::TimetableProblem;
//!
//! # fn main() -> Result<(), timetable_ga::error::SolverError> {
//! let problem = TimetableProblem::new(
//!     vec![ClassSession::new("Math", "T1", "S1")],
//!     vec![Room::new("A101", 50)],
//!     vec![Teacher::new("T1").with_subject("Math").with_available_slot("Monday 8AM")],
//!     vec![StudentGroup::new("S1").with_subject("Math")],
//!     vec![TimeSlot::new("Monday 8AM"), TimeSlot::new("Monday 10AM")],
//! )?;
//!
//! let config = GaConfig::default().with_generations(50).with_seed(42);
//! let result = GaRunner::run(&problem, &config)?;
//!
//! let timetable = problem.decode(&result.best, &config.weights);
//! assert_eq!(timetable.entry_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated
//!   Timetabling"
//! - Colorni, Dorigo, Maniezzo (1998), "Metaheuristics for High School
//!   Timetabling"

pub mod error;
pub mod export;
pub mod ga;
pub mod models;
pub mod problem;
pub mod validation;
