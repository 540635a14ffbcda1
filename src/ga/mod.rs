//! Genetic search over candidate schedules.
//!
//! Implements the full evolutionary loop for the timetabling problem:
//! positional placement encoding, conflict-penalty fitness, rank-based
//! elitist reproduction with single-point crossover and slot mutation.
//!
//! # Encoding
//!
//! A candidate is a vector of (room index, slot index) placements, one per
//! class session in session order. Infeasible assignments are penalized by
//! the fitness, never repaired or rejected.
//!
//! # Submodules
//!
//! - [`fitness`]: the conflict-penalty scoring pass and violation reporting
//!
//! # Reference
//! - Colorni, Dorigo, Maniezzo (1998), "Metaheuristics for High School
//!   Timetabling"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod candidate;
mod config;
pub mod fitness;
mod population;
mod runner;

pub use candidate::{Candidate, Placement};
pub use config::{GaConfig, PenaltyWeights};
pub use population::Population;
pub use runner::{GaResult, GaRunner};
