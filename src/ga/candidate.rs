//! Candidate schedule encoding.
//!
//! # Encoding
//!
//! A candidate holds one [`Placement`] per class session, in session order:
//! the index of the assigned room and the index of the assigned slot in the
//! problem's tables. Feasibility is never enforced here; conflicting
//! placements survive construction and are penalized by the fitness.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 1-3

use rand::Rng;

use crate::error::SolverError;
use crate::ga::config::PenaltyWeights;
use crate::ga::fitness;
use crate::problem::TimetableProblem;

/// One session's assignment: indices into the problem's room table and
/// slot universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Room index.
    pub room: usize,
    /// Slot index.
    pub slot: usize,
}

/// A candidate schedule (individual in the genetic search).
///
/// Higher fitness = better; every score is non-positive, so 0 means
/// conflict-free. The cached fitness is `None` until evaluated and drops
/// back to `None` whenever an assignment changes.
#[derive(Debug, Clone)]
pub struct Candidate {
    placements: Vec<Placement>,
    fitness: Option<i64>,
}

impl Candidate {
    /// Creates a uniformly random candidate for a problem.
    ///
    /// Each session independently receives a random room and a random slot.
    pub fn random<R: Rng>(problem: &TimetableProblem, rng: &mut R) -> Self {
        let placements = (0..problem.session_count())
            .map(|_| Placement {
                room: rng.random_range(0..problem.room_count()),
                slot: rng.random_range(0..problem.slot_count()),
            })
            .collect();
        Self {
            placements,
            fitness: None,
        }
    }

    /// Wraps an existing assignment, e.g. to score a hand-built schedule.
    ///
    /// Placements must be in session order and index into the tables of the
    /// problem the candidate will be scored against.
    pub fn from_placements(placements: Vec<Placement>) -> Self {
        Self {
            placements,
            fitness: None,
        }
    }

    /// The per-session placements, in session order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placements (= session count of the originating problem).
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the candidate has no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Cached conflict score, `None` until evaluated.
    pub fn fitness(&self) -> Option<i64> {
        self.fitness
    }

    /// Returns the conflict score, computing and caching it if stale.
    pub fn evaluate(&mut self, problem: &TimetableProblem, weights: &PenaltyWeights) -> i64 {
        if let Some(f) = self.fitness {
            return f;
        }
        let f = fitness::score(problem, weights, self);
        self.fitness = Some(f);
        f
    }

    /// Breeds a child by single-point recombination.
    ///
    /// The child copies placements `[0, n/2)` from `self` and `[n/2, n)`
    /// from `other`, and starts with a stale fitness. Both parents must
    /// come from the same problem; a length mismatch is rejected, while
    /// equal-length candidates from different problems are a caller error
    /// this function cannot detect.
    pub fn crossover(&self, other: &Candidate) -> Result<Candidate, SolverError> {
        if self.placements.len() != other.placements.len() {
            return Err(SolverError::MismatchedParents {
                left: self.placements.len(),
                right: other.placements.len(),
            });
        }
        let split = self.placements.len() / 2;
        let mut placements = Vec::with_capacity(self.placements.len());
        placements.extend_from_slice(&self.placements[..split]);
        placements.extend_from_slice(&other.placements[split..]);
        Ok(Candidate {
            placements,
            fitness: None,
        })
    }

    /// Applies one mutation trial with probability `rate`.
    ///
    /// On success, one uniformly chosen session is reassigned a uniformly
    /// random slot from the universe; the room is left untouched. Rooms
    /// change only through initial randomization and recombination. The new
    /// slot may equal the old one.
    ///
    /// Returns whether a mutation was applied. `rate` must lie in [0, 1].
    pub fn mutate<R: Rng>(
        &mut self,
        problem: &TimetableProblem,
        rate: f64,
        rng: &mut R,
    ) -> bool {
        if self.placements.is_empty() || !rng.random_bool(rate) {
            return false;
        }
        let idx = rng.random_range(0..self.placements.len());
        self.placements[idx].slot = rng.random_range(0..problem.slot_count());
        self.fitness = None;
        true
    }
}
